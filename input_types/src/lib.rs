#![no_std]

//! # Input Types
//!
//! This crate defines the logical key events consumed by the Pebble shell.
//!
//! ## Philosophy
//!
//! - **Events, not scancodes**: The shell sees decoded characters, never raw hardware codes
//! - **Pull-based**: Input sources are polled one event at a time
//! - **Testable**: Events are serializable and can be injected from scripts
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A scancode table (see the `hal` crate)
//! - A terminal line discipline
//! - Modifier or key-release tracking

use core::fmt;
use serde::{Deserialize, Serialize};

/// Key event
///
/// One decoded logical input unit. Translation from hardware encodings to
/// this enum is the responsibility of the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyEvent {
    /// A printable ASCII character (32..=126)
    Printable(u8),
    /// Line submission
    Enter,
    /// Delete the character before the cursor
    Backspace,
}

impl KeyEvent {
    /// Creates a printable event, rejecting bytes outside the printable ASCII range
    pub fn printable(byte: u8) -> Option<Self> {
        if is_printable(byte) {
            Some(Self::Printable(byte))
        } else {
            None
        }
    }

    /// Decodes a raw byte as produced by serial lines and host terminals
    ///
    /// `\r` and `\n` map to Enter, BS and DEL map to Backspace. Other control
    /// bytes and non-ASCII bytes yield `None`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'\r' | b'\n' => Some(Self::Enter),
            0x08 | 0x7F => Some(Self::Backspace),
            _ => Self::printable(byte),
        }
    }

    /// Returns the character if this is a printable event
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Printable(byte) => Some(*byte as char),
            _ => None,
        }
    }

    /// Returns true if this is a printable event
    pub fn is_printable(&self) -> bool {
        matches!(self, Self::Printable(_))
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Printable(byte) => write!(f, "'{}'", *byte as char),
            Self::Enter => write!(f, "Enter"),
            Self::Backspace => write!(f, "Backspace"),
        }
    }
}

/// Returns true for bytes the shell can store and render (32..=126)
pub const fn is_printable(byte: u8) -> bool {
    byte >= 0x20 && byte <= 0x7E
}

/// Source of key events
///
/// ## Implementation Notes
///
/// - **One event per call**: Returns a single decoded event
/// - **`None` means idle**: No event is available right now; callers decide
///   whether to retry, spin or stop
/// - **Owns decoding**: Implementations translate their raw encoding before
///   returning
pub trait InputSource {
    /// Returns the next key event, or `None` if nothing is available
    fn next_key_event(&mut self) -> Option<KeyEvent>;
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    fn next_key_event(&mut self) -> Option<KeyEvent> {
        (**self).next_key_event()
    }
}

/// Adapts any iterator of key events into an input source
///
/// The source reports idle once the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    events: I,
}

impl<I> IterSource<I>
where
    I: Iterator<Item = KeyEvent>,
{
    /// Creates a source that replays the given events
    pub fn new(events: impl IntoIterator<IntoIter = I, Item = KeyEvent>) -> Self {
        Self {
            events: events.into_iter(),
        }
    }
}

impl<I> InputSource for IterSource<I>
where
    I: Iterator<Item = KeyEvent>,
{
    fn next_key_event(&mut self) -> Option<KeyEvent> {
        self.events.next()
    }
}

/// Expands text into key events the way a terminal would type it
///
/// Newlines become Enter, backspace/DEL become Backspace, other control
/// characters are skipped.
pub fn text_events(text: &str) -> impl Iterator<Item = KeyEvent> + '_ {
    text.bytes().filter_map(KeyEvent::from_byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate alloc;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_printable_range() {
        assert_eq!(KeyEvent::printable(b' '), Some(KeyEvent::Printable(b' ')));
        assert_eq!(KeyEvent::printable(b'~'), Some(KeyEvent::Printable(b'~')));
        assert_eq!(KeyEvent::printable(0x1F), None);
        assert_eq!(KeyEvent::printable(0x7F), None);
        assert_eq!(KeyEvent::printable(0xC3), None);
    }

    #[test]
    fn test_from_byte_control_keys() {
        assert_eq!(KeyEvent::from_byte(b'\n'), Some(KeyEvent::Enter));
        assert_eq!(KeyEvent::from_byte(b'\r'), Some(KeyEvent::Enter));
        assert_eq!(KeyEvent::from_byte(0x08), Some(KeyEvent::Backspace));
        assert_eq!(KeyEvent::from_byte(0x7F), Some(KeyEvent::Backspace));
        assert_eq!(KeyEvent::from_byte(b'\t'), None);
        assert_eq!(KeyEvent::from_byte(0x1B), None);
    }

    #[test]
    fn test_as_char() {
        assert_eq!(KeyEvent::Printable(b'x').as_char(), Some('x'));
        assert_eq!(KeyEvent::Enter.as_char(), None);
        assert!(KeyEvent::Printable(b'x').is_printable());
        assert!(!KeyEvent::Backspace.is_printable());
    }

    #[test]
    fn test_iter_source_replays_then_idles() {
        let mut source = IterSource::new(vec![KeyEvent::Printable(b'a'), KeyEvent::Enter]);

        assert_eq!(source.next_key_event(), Some(KeyEvent::Printable(b'a')));
        assert_eq!(source.next_key_event(), Some(KeyEvent::Enter));
        assert_eq!(source.next_key_event(), None);
        assert_eq!(source.next_key_event(), None);
    }

    #[test]
    fn test_source_by_mut_reference() {
        fn drain(mut source: impl InputSource) -> usize {
            let mut count = 0;
            while source.next_key_event().is_some() {
                count += 1;
            }
            count
        }

        let mut source = IterSource::new(text_events("ls"));
        assert_eq!(drain(&mut source), 2);
        assert_eq!(source.next_key_event(), None);
    }

    #[test]
    fn test_text_events_skips_unprintable() {
        let events: Vec<KeyEvent> = text_events("a\tb").collect();
        assert_eq!(
            events,
            vec![KeyEvent::Printable(b'a'), KeyEvent::Printable(b'b')]
        );
    }

    #[test]
    fn test_text_events_control_keys() {
        let events: Vec<KeyEvent> = text_events("x\x08\n").collect();
        assert_eq!(
            events,
            vec![KeyEvent::Printable(b'x'), KeyEvent::Backspace, KeyEvent::Enter]
        );
    }

    #[test]
    fn test_key_event_serialization() {
        let event = KeyEvent::Printable(b'q');
        let json = serde_json::to_string(&event).unwrap();
        let back: KeyEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);

        let json = serde_json::to_string(&KeyEvent::Enter).unwrap();
        assert_eq!(json, "\"Enter\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(alloc::format!("{}", KeyEvent::Printable(b'a')), "'a'");
        assert_eq!(alloc::format!("{}", KeyEvent::Backspace), "Backspace");
    }
}
