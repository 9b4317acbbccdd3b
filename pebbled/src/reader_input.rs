//! Byte-stream input
//!
//! Turns any `Read` (stdin in practice) into key events one byte at a time.

use input_types::{InputSource, KeyEvent};
use std::io::{self, Bytes, Read};

/// Key events decoded from a byte stream
///
/// Bytes with no key meaning are skipped. End of stream and read errors
/// both end the input.
pub struct ReaderInput<R: Read> {
    bytes: Bytes<R>,
    exhausted: bool,
}

impl<R: Read> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
            exhausted: false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl ReaderInput<io::Stdin> {
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<R: Read> InputSource for ReaderInput<R> {
    fn next_key_event(&mut self) -> Option<KeyEvent> {
        if self.exhausted {
            return None;
        }
        loop {
            match self.bytes.next() {
                Some(Ok(byte)) => {
                    if let Some(event) = KeyEvent::from_byte(byte) {
                        return Some(event);
                    }
                    tracing::trace!(byte, "skipping byte with no key mapping");
                }
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "input read failed");
                    self.exhausted = true;
                    return None;
                }
                None => {
                    self.exhausted = true;
                    return None;
                }
            }
        }
    }
}
