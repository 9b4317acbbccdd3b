//! Cursor-tracking text output
//!
//! `ConsoleWriter` turns a character stream into cell writes on a
//! `DisplaySink`. It owns the cursor; the sink only stores cells.
//!
//! Cursor rules:
//! - The marker cell is blanked before every write and redrawn after
//! - `\n` moves to column 0 of the next row
//! - Writing past the last column wraps to the next row
//! - Moving past the last row scrolls the sink up one row

use console_vga::DisplaySink;
use core::fmt;

/// Glyph drawn at the cursor cell while the cursor is visible
pub const CURSOR_GLYPH: u8 = b'_';

const BLANK: u8 = b' ';

/// Console writer over a display sink
pub struct ConsoleWriter<D: DisplaySink> {
    sink: D,
    col: usize,
    row: usize,
    attr: u8,
    cursor_visible: bool,
}

impl<D: DisplaySink> ConsoleWriter<D> {
    /// Creates a writer with the cursor at the top-left cell
    pub fn new(sink: D, attr: u8) -> Self {
        Self {
            sink,
            col: 0,
            row: 0,
            attr,
            cursor_visible: true,
        }
    }

    /// Writes one byte at the cursor and advances
    pub fn put_char(&mut self, byte: u8) {
        self.put_cell(BLANK);

        if byte == b'\n' {
            self.col = 0;
            self.advance_row();
        } else {
            self.put_cell(byte);
            self.col += 1;
            if self.col >= self.cols() {
                self.col = 0;
                self.advance_row();
            }
        }

        self.render_cursor_marker();
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put_char(byte);
        }
    }

    pub fn write_str(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }

    /// Writes `text` followed by a newline
    pub fn write_line(&mut self, text: &str) {
        self.write_str(text);
        self.put_char(b'\n');
    }

    /// Formatted output; lets `write!`/`writeln!` target the console directly
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::Write::write_fmt(self, args);
    }

    /// Steps the cursor back one cell and blanks it
    ///
    /// Wraps to the last column of the previous row. Returns false at the
    /// top-left cell, where there is nothing to erase.
    pub fn erase_back(&mut self) -> bool {
        if self.col == 0 && self.row == 0 {
            return false;
        }

        self.put_cell(BLANK);
        if self.col == 0 {
            self.col = self.cols().saturating_sub(1);
            self.row -= 1;
        } else {
            self.col -= 1;
        }
        self.put_cell(BLANK);
        self.render_cursor_marker();
        true
    }

    /// Draws the cursor marker at the cursor cell
    ///
    /// Only touches the display; repeated calls leave the same picture.
    pub fn render_cursor_marker(&mut self) {
        let glyph = if self.cursor_visible {
            CURSOR_GLYPH
        } else {
            BLANK
        };
        self.put_cell(glyph);
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
        self.render_cursor_marker();
    }

    /// Clears the sink and homes the cursor
    pub fn clear(&mut self) {
        self.sink.clear(self.attr);
        self.col = 0;
        self.row = 0;
        self.render_cursor_marker();
    }

    /// Cursor position as (col, row)
    pub fn cursor(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    pub fn attr(&self) -> u8 {
        self.attr
    }

    pub fn dims(&self) -> (usize, usize) {
        self.sink.dims()
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut D {
        &mut self.sink
    }

    pub fn into_sink(self) -> D {
        self.sink
    }

    fn cols(&self) -> usize {
        self.sink.dims().0
    }

    fn advance_row(&mut self) {
        self.row += 1;
        let rows = self.sink.dims().1;
        if self.row >= rows {
            self.sink.scroll_up(self.attr);
            self.row = rows.saturating_sub(1);
        }
    }

    fn put_cell(&mut self, glyph: u8) {
        self.sink.put(self.col, self.row, glyph, self.attr);
    }
}

impl<D: DisplaySink> fmt::Write for ConsoleWriter<D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        ConsoleWriter::write_str(self, s);
        Ok(())
    }
}
