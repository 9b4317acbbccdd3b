//! Pending line editing
//!
//! The editor owns the in-progress input and mirrors it on screen through a
//! `ConsoleWriter`. Every stored byte has a glyph already drawn at the cell
//! before the cursor, so backspace can simply erase the previous cell.

use crate::console::ConsoleWriter;
use console_vga::DisplaySink;
use heapless::Vec;
use input_types::KeyEvent;
use thiserror::Error;

/// Line buffer size, terminator slot included
pub const MAX_LINE_LEN: usize = 128;

/// Characters a line can actually hold
pub const LINE_CAP: usize = MAX_LINE_LEN - 1;

/// Returned when appending to a full line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("line is full ({} characters)", LINE_CAP)]
pub struct LineFull;

/// Bounded buffer of printable ASCII
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingLine {
    bytes: Vec<u8, LINE_CAP>,
}

impl PendingLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, byte: u8) -> Result<(), LineFull> {
        self.bytes.push(byte).map_err(|_| LineFull)
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.bytes.pop()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_str(&self) -> &str {
        ascii_str(&self.bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.bytes.is_full()
    }
}

/// A submitted line, detached from the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedLine {
    bytes: Vec<u8, LINE_CAP>,
}

impl CompletedLine {
    pub fn as_str(&self) -> &str {
        ascii_str(&self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Line editor state machine
#[derive(Debug, Default)]
pub struct LineEditor {
    line: PendingLine,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one key event
    ///
    /// Returns the submitted line when `event` is Enter.
    pub fn handle_key<D: DisplaySink>(
        &mut self,
        event: KeyEvent,
        console: &mut ConsoleWriter<D>,
    ) -> Option<CompletedLine> {
        match event {
            KeyEvent::Printable(byte) => {
                self.handle_printable(byte, console);
                None
            }
            KeyEvent::Backspace => {
                self.handle_backspace(console);
                None
            }
            KeyEvent::Enter => Some(self.handle_enter(console)),
        }
    }

    /// Appends and echoes a printable byte
    ///
    /// A full line drops the byte without touching the display. Returns
    /// whether the byte was stored.
    pub fn handle_printable<D: DisplaySink>(
        &mut self,
        byte: u8,
        console: &mut ConsoleWriter<D>,
    ) -> bool {
        if !input_types::is_printable(byte) || self.line.push(byte).is_err() {
            return false;
        }
        console.put_char(byte);
        true
    }

    /// Removes the last byte and erases its cell
    pub fn handle_backspace<D: DisplaySink>(&mut self, console: &mut ConsoleWriter<D>) -> bool {
        if self.line.pop().is_none() {
            return false;
        }
        console.erase_back();
        true
    }

    /// Ends the line: newline on screen, buffer handed out, editor reset
    pub fn handle_enter<D: DisplaySink>(&mut self, console: &mut ConsoleWriter<D>) -> CompletedLine {
        console.put_char(b'\n');
        let bytes = core::mem::take(&mut self.line.bytes);
        CompletedLine { bytes }
    }

    pub fn reset(&mut self) {
        self.line.clear();
    }

    pub fn pending(&self) -> &PendingLine {
        &self.line
    }

    pub fn text(&self) -> &str {
        self.line.as_str()
    }

    pub fn len(&self) -> usize {
        self.line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}

// Only printable ASCII is ever stored.
fn ascii_str(bytes: &[u8]) -> &str {
    core::str::from_utf8(bytes).unwrap_or_default()
}
