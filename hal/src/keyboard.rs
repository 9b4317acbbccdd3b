//! Raw keyboard events
//!
//! A `KeyboardDevice` hands out one `HalKeyEvent` per byte read from the PS/2
//! controller. Events still carry set 1 make codes; `ScancodeDecoder` is the
//! only consumer that looks inside them.

/// Byte the controller sends ahead of an extended key's code
pub const EXTENDED_PREFIX: u8 = 0xE0;

/// Set on break codes
pub const RELEASE_BIT: u8 = 0x80;

/// A set 1 make code, tagged with whether it followed `EXTENDED_PREFIX`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalScancode {
    Base(u8),
    E0(u8),
}

impl HalScancode {
    pub fn is_extended(&self) -> bool {
        matches!(self, Self::E0(_))
    }

    /// Make code with the prefix dropped
    pub fn code(&self) -> u8 {
        match *self {
            Self::Base(code) | Self::E0(code) => code,
        }
    }
}

/// One press or release, before decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalKeyEvent {
    pub scancode: HalScancode,
    /// False for break codes
    pub pressed: bool,
}

impl HalKeyEvent {
    pub fn new(code: u8, pressed: bool) -> Self {
        Self::with_scancode(HalScancode::Base(code), pressed)
    }

    pub fn with_scancode(scancode: HalScancode, pressed: bool) -> Self {
        Self { scancode, pressed }
    }

    /// Splits a data-port byte into make code and direction
    ///
    /// The prefix byte on its own yields `None`; a device that supports
    /// extended keys builds the `E0` event from the byte after it.
    pub fn from_raw(byte: u8) -> Option<Self> {
        if byte == EXTENDED_PREFIX {
            return None;
        }
        Some(Self::new(byte & !RELEASE_BIT, byte & RELEASE_BIT == 0))
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// Something the shell can poll for key events
///
/// `poll_event` must not block. `None` means nothing is waiting right now,
/// and callers treat it as the end of the current burst of input.
pub trait KeyboardDevice {
    fn poll_event(&mut self) -> Option<HalKeyEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_splits_release_bit() {
        for (byte, code, pressed) in [(0x1C, 0x1C, true), (0x9C, 0x1C, false), (0x0E, 0x0E, true)] {
            let event = HalKeyEvent::from_raw(byte).unwrap();
            assert_eq!(event.scancode.code(), code);
            assert_eq!(event.is_pressed(), pressed);
            assert!(!event.scancode.is_extended());
        }
    }

    #[test]
    fn test_from_raw_ignores_prefix_byte() {
        assert_eq!(HalKeyEvent::from_raw(EXTENDED_PREFIX), None);
    }

    #[test]
    fn test_extended_event_keeps_code() {
        let right_ctrl = HalKeyEvent::with_scancode(HalScancode::E0(0x1D), true);
        assert!(right_ctrl.scancode.is_extended());
        assert_eq!(right_ctrl.scancode.code(), 0x1D);
        assert_ne!(right_ctrl, HalKeyEvent::new(0x1D, true));
    }
}
