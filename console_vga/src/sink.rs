//! Display sink abstraction
//!
//! The shell never addresses display memory directly. Everything it draws
//! goes through this trait, so the same session can render to VGA text
//! memory on hardware or to an in-memory grid on a host.
//!
//! ## Design
//!
//! - `DisplaySink` trait: cell-addressed output with a fixed attribute per call
//! - `VgaConsole`: Real VGA hardware (production)
//! - `TextGrid`: In-memory buffer (hosts and tests)

/// Trait for cell-addressed text output
pub trait DisplaySink {
    /// Get display dimensions (cols, rows)
    fn dims(&self) -> (usize, usize);

    /// Clear the display with the given attribute
    fn clear(&mut self, attr: u8);

    /// Write a glyph at the given cell
    ///
    /// Returns false if the cell is outside the display.
    fn put(&mut self, col: usize, row: usize, glyph: u8, attr: u8) -> bool;

    /// Scroll everything up by one row, blanking the bottom row with `attr`
    fn scroll_up(&mut self, attr: u8);
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn dims(&self) -> (usize, usize) {
        (**self).dims()
    }

    fn clear(&mut self, attr: u8) {
        (**self).clear(attr)
    }

    fn put(&mut self, col: usize, row: usize, glyph: u8, attr: u8) -> bool {
        (**self).put(col, row, glyph, attr)
    }

    fn scroll_up(&mut self, attr: u8) {
        (**self).scroll_up(attr)
    }
}
