//! # VGA Text Console
//!
//! This crate provides the display side of the Pebble shell: a VGA text mode
//! console that writes to mapped text memory, the `DisplaySink` trait the
//! shell renders through, and an in-memory grid for hosts and tests.
//!
//! ## Philosophy
//!
//! This is NOT a terminal emulator. No ANSI escape codes, no VT100, no TTY model.
//! It's a cell store: glyph + attribute at (col, row), clear, scroll.
//!
//! ## Design Principles
//!
//! 1. **Minimal and deterministic**: Simple 80x25 text with attributes
//! 2. **Testable**: The same trait is implemented by memory-backed grids
//! 3. **No unsafe except MMIO**: Isolated to the VGA memory writes
//! 4. **Explicit cursor**: Cursor position is owned by the caller, not tracked here

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

use core::ptr;

pub mod grid;
pub mod sink;

pub use grid::TextGrid;
pub use sink::DisplaySink;

/// VGA text mode dimensions
pub const VGA_WIDTH: usize = 80;
pub const VGA_HEIGHT: usize = 25;

/// VGA color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum VgaColor {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

impl VgaColor {
    /// Make a VGA attribute byte from foreground and background colors
    pub const fn make_attr(fg: VgaColor, bg: VgaColor) -> u8 {
        (bg as u8) << 4 | (fg as u8)
    }
}

/// VGA text console
pub struct VgaConsole {
    buffer: *mut u8,
}

impl VgaConsole {
    /// Create a new VGA console with the given virtual address of the VGA buffer
    ///
    /// # Safety
    ///
    /// The caller must ensure that `virt_addr` points to a valid, mapped VGA text buffer
    /// of at least `VGA_WIDTH * VGA_HEIGHT` cells that nothing else writes to.
    pub unsafe fn new(virt_addr: usize) -> Self {
        Self {
            buffer: virt_addr as *mut u8,
        }
    }

    /// Clear a single row with the given attribute
    pub fn clear_row(&mut self, row: usize, attr: u8) {
        if row >= VGA_HEIGHT {
            return;
        }

        let cell = ((attr as u16) << 8) | b' ' as u16;
        let offset = row * VGA_WIDTH * 2;
        unsafe {
            let ptr = self.buffer.add(offset) as *mut u16;
            for col in 0..VGA_WIDTH {
                ptr::write_volatile(ptr.add(col), cell);
            }
        }
    }

    /// Write a character at the given column and row with the given attribute
    ///
    /// Returns true if the character was written (within bounds)
    pub fn write_at(&mut self, col: usize, row: usize, ch: u8, attr: u8) -> bool {
        if col >= VGA_WIDTH || row >= VGA_HEIGHT {
            return false;
        }

        let offset = (row * VGA_WIDTH + col) * 2;
        unsafe {
            ptr::write_volatile(self.buffer.add(offset), ch);
            ptr::write_volatile(self.buffer.add(offset + 1), attr);
        }
        true
    }

    /// Scroll the entire VGA text buffer up by the given number of rows.
    ///
    /// Lines that scroll off the top are discarded; new lines at the bottom
    /// are cleared with spaces using the provided attribute.
    pub fn scroll_lines(&mut self, lines: usize, attr: u8) {
        if lines == 0 {
            return;
        }

        if lines >= VGA_HEIGHT {
            DisplaySink::clear(self, attr);
            return;
        }

        let row_bytes = VGA_WIDTH * 2;
        let total_bytes = VGA_HEIGHT * row_bytes;
        let offset = lines * row_bytes;

        unsafe {
            // Move visible rows up in-place.
            ptr::copy(self.buffer.add(offset), self.buffer, total_bytes - offset);
        }

        for row in (VGA_HEIGHT - lines)..VGA_HEIGHT {
            self.clear_row(row, attr);
        }
    }
}

impl DisplaySink for VgaConsole {
    fn dims(&self) -> (usize, usize) {
        (VGA_WIDTH, VGA_HEIGHT)
    }

    fn clear(&mut self, attr: u8) {
        for row in 0..VGA_HEIGHT {
            self.clear_row(row, attr);
        }
    }

    fn put(&mut self, col: usize, row: usize, glyph: u8, attr: u8) -> bool {
        self.write_at(col, row, glyph, attr)
    }

    fn scroll_up(&mut self, attr: u8) {
        self.scroll_lines(1, attr);
    }
}

// The console is the only writer of its buffer (see `new`), so moving it
// to another thread cannot introduce aliasing writes.
unsafe impl Send for VgaConsole {}
