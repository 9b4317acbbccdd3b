//! Scancode to KeyEvent translation
//!
//! This module translates hardware scan codes (from HAL) to the shell's
//! logical key events (from input_types).
//!
//! ## Philosophy
//!
//! - **Deterministic mapping**: Same scan code always produces same KeyEvent
//! - **Explicit drop**: Keys the shell has no use for decode to `None`
//! - **No locale/IME complexity**: Unshifted US layout, ASCII only
//!
//! ## Scan Code Set
//!
//! This implementation assumes **PS/2 Scan Code Set 1**.
//! - Released keys have bit 7 set (scancode | 0x80) and are ignored
//! - Extended keys are prefixed with 0xE0 and are ignored

use crate::keyboard::{HalKeyEvent, HalScancode, KeyboardDevice};
use input_types::{InputSource, KeyEvent};

/// Set 1 make code for Backspace
pub const SCANCODE_BACKSPACE: u8 = 0x0E;

/// Set 1 make code for Enter
pub const SCANCODE_ENTER: u8 = 0x1C;

/// Converts a Set 1 make code to its unshifted ASCII glyph
///
/// Returns `None` for control keys, modifiers and unmapped codes.
pub fn scancode_to_ascii(scancode: u8) -> Option<u8> {
    let byte = match scancode {
        // Number row
        0x02 => b'1',
        0x03 => b'2',
        0x04 => b'3',
        0x05 => b'4',
        0x06 => b'5',
        0x07 => b'6',
        0x08 => b'7',
        0x09 => b'8',
        0x0A => b'9',
        0x0B => b'0',
        0x0C => b'-',
        0x0D => b'=',

        // Top row
        0x10 => b'q',
        0x11 => b'w',
        0x12 => b'e',
        0x13 => b'r',
        0x14 => b't',
        0x15 => b'y',
        0x16 => b'u',
        0x17 => b'i',
        0x18 => b'o',
        0x19 => b'p',
        0x1A => b'[',
        0x1B => b']',

        // Home row
        0x1E => b'a',
        0x1F => b's',
        0x20 => b'd',
        0x21 => b'f',
        0x22 => b'g',
        0x23 => b'h',
        0x24 => b'j',
        0x25 => b'k',
        0x26 => b'l',
        0x27 => b';',
        0x28 => b'\'',
        0x29 => b'`',
        0x2B => b'\\',

        // Bottom row
        0x2C => b'z',
        0x2D => b'x',
        0x2E => b'c',
        0x2F => b'v',
        0x30 => b'b',
        0x31 => b'n',
        0x32 => b'm',
        0x33 => b',',
        0x34 => b'.',
        0x35 => b'/',

        0x37 => b'*',
        0x39 => b' ',

        _ => return None,
    };
    Some(byte)
}

/// Stateless Set 1 decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct ScancodeDecoder;

impl ScancodeDecoder {
    /// Creates a new decoder
    pub fn new() -> Self {
        Self
    }

    /// Translates a HAL keyboard event to a shell key event
    ///
    /// Returns `None` for releases, extended keys and keys with no mapping.
    pub fn decode(&self, event: HalKeyEvent) -> Option<KeyEvent> {
        if !event.pressed {
            return None;
        }
        match event.scancode {
            HalScancode::E0(_) => None,
            HalScancode::Base(SCANCODE_ENTER) => Some(KeyEvent::Enter),
            HalScancode::Base(SCANCODE_BACKSPACE) => Some(KeyEvent::Backspace),
            HalScancode::Base(code) => scancode_to_ascii(code).map(KeyEvent::Printable),
        }
    }

    /// Translates a raw byte read from the controller data port
    pub fn decode_raw(&self, byte: u8) -> Option<KeyEvent> {
        HalKeyEvent::from_raw(byte).and_then(|event| self.decode(event))
    }
}

/// Adapts a polled keyboard device into an `InputSource`
///
/// Events that decode to nothing are skipped; `None` means the device
/// has no more pending events.
pub struct KeyboardInput<D: KeyboardDevice> {
    device: D,
    decoder: ScancodeDecoder,
}

impl<D: KeyboardDevice> KeyboardInput<D> {
    /// Wraps a keyboard device
    pub fn new(device: D) -> Self {
        Self {
            device,
            decoder: ScancodeDecoder::new(),
        }
    }

    /// Returns the wrapped device
    pub fn into_inner(self) -> D {
        self.device
    }
}

impl<D: KeyboardDevice> InputSource for KeyboardInput<D> {
    fn next_key_event(&mut self) -> Option<KeyEvent> {
        while let Some(event) = self.device.poll_event() {
            if let Some(key) = self.decoder.decode(event) {
                return Some(key);
            }
        }
        None
    }
}
