//! In-memory text grid
//!
//! A `DisplaySink` backed by a plain cell array instead of VGA memory.
//! Cells use the VGA encoding (low byte glyph, high byte attribute), so
//! a grid can be blitted to real hardware unchanged.

use crate::sink::DisplaySink;
use crate::{VGA_HEIGHT, VGA_WIDTH};

#[cfg(feature = "alloc")]
use alloc::string::String;

/// In-memory cell grid, 80x25 unless stated otherwise
#[derive(Clone)]
pub struct TextGrid<const COLS: usize = VGA_WIDTH, const ROWS: usize = VGA_HEIGHT> {
    cells: [[u16; COLS]; ROWS],
    revision: u64,
}

impl<const COLS: usize, const ROWS: usize> TextGrid<COLS, ROWS> {
    /// Creates a grid filled with blanks in the given attribute
    pub fn new(attr: u8) -> Self {
        Self {
            cells: [[cell(b' ', attr); COLS]; ROWS],
            revision: 0,
        }
    }

    /// Get the glyph at a position
    pub fn glyph_at(&self, col: usize, row: usize) -> Option<u8> {
        self.cell_at(col, row).map(|cell| (cell & 0xFF) as u8)
    }

    /// Get the attribute at a position
    pub fn attr_at(&self, col: usize, row: usize) -> Option<u8> {
        self.cell_at(col, row).map(|cell| (cell >> 8) as u8)
    }

    fn cell_at(&self, col: usize, row: usize) -> Option<u16> {
        if col >= COLS || row >= ROWS {
            return None;
        }
        Some(self.cells[row][col])
    }

    /// Raw glyph bytes of one row, blanks included
    pub fn row_glyphs(&self, row: usize) -> Option<[u8; COLS]> {
        let cells = self.cells.get(row)?;
        let mut glyphs = [b' '; COLS];
        for (glyph, cell) in glyphs.iter_mut().zip(cells.iter()) {
            *glyph = (*cell & 0xFF) as u8;
        }
        Some(glyphs)
    }

    /// Monotonic mutation counter
    ///
    /// Hosts compare revisions to skip redundant renders.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = u16> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Text of one row with trailing blanks removed
    #[cfg(feature = "alloc")]
    pub fn row_text(&self, row: usize) -> Option<String> {
        let glyphs = self.row_glyphs(row)?;
        let text: String = glyphs.iter().map(|&b| b as char).collect();
        Some(String::from(text.trim_end()))
    }

    /// Whole screen as text, rows joined by `\n`, trailing blank rows dropped
    #[cfg(feature = "alloc")]
    pub fn render_text(&self) -> String {
        let mut rows: alloc::vec::Vec<String> =
            (0..ROWS).filter_map(|row| self.row_text(row)).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        rows.join("\n")
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<const COLS: usize, const ROWS: usize> Default for TextGrid<COLS, ROWS> {
    fn default() -> Self {
        Self::new(0x07)
    }
}

impl<const COLS: usize, const ROWS: usize> DisplaySink for TextGrid<COLS, ROWS> {
    fn dims(&self) -> (usize, usize) {
        (COLS, ROWS)
    }

    fn clear(&mut self, attr: u8) {
        for row in self.cells.iter_mut() {
            row.fill(cell(b' ', attr));
        }
        self.touch();
    }

    fn put(&mut self, col: usize, row: usize, glyph: u8, attr: u8) -> bool {
        if col >= COLS || row >= ROWS {
            return false;
        }
        self.cells[row][col] = cell(glyph, attr);
        self.touch();
        true
    }

    fn scroll_up(&mut self, attr: u8) {
        if ROWS == 0 {
            return;
        }
        self.cells.copy_within(1.., 0);
        self.cells[ROWS - 1] = [cell(b' ', attr); COLS];
        self.touch();
    }
}

const fn cell(glyph: u8, attr: u8) -> u16 {
    ((attr as u16) << 8) | glyph as u16
}
