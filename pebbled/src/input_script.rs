//! # Input Script Parser
//!
//! Provides a simple scripted input format for deterministic runs and demos.
//!
//! ## Format
//!
//! Scripts are line-based, with each line representing one input action:
//! - Key names: `Enter`, `Backspace`, `Space` (case-insensitive)
//! - Single characters: `a`, `Z`, `7`, `/`
//! - Text strings: `"create notes hello"` (expanded to individual key presses)
//! - Comments: `# This is a comment`
//!
//! ## Example
//!
//! ```text
//! # Store a blob and read it back
//! "create a hi"
//! Enter
//! "cat a"
//! Enter
//! ```

use input_types::{InputSource, KeyEvent};
use std::collections::VecDeque;
use thiserror::Error;

/// Input script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputScriptError {
    #[error("Invalid key name at line {line}: {name}")]
    InvalidKeyName { line: usize, name: String },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Empty script")]
    EmptyScript,
}

/// Input script
///
/// A queue of key events parsed up front; replayed in order.
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    events: VecDeque<KeyEvent>,
}

impl InputScript {
    /// Creates a new empty input script
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, InputScriptError> {
        let mut events = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            events.extend(Self::parse_line(line, line_num + 1)?);
        }

        if events.is_empty() {
            return Err(InputScriptError::EmptyScript);
        }

        Ok(Self { events })
    }

    fn parse_line(line: &str, line_num: usize) -> Result<Vec<KeyEvent>, InputScriptError> {
        // Quoted text
        if line.len() >= 2 && line.starts_with('"') && line.ends_with('"') {
            let text = &line[1..line.len() - 1];
            return text
                .chars()
                .map(|c| Self::char_event(c, line_num))
                .collect();
        }

        if line.starts_with('"') {
            return Err(InputScriptError::ParseError {
                line: line_num,
                message: "unterminated string".to_string(),
            });
        }

        let event = match line.to_ascii_lowercase().as_str() {
            "enter" | "return" => KeyEvent::Enter,
            "backspace" | "back" => KeyEvent::Backspace,
            "space" => KeyEvent::Printable(b' '),
            _ => {
                let mut chars = line.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::char_event(c, line_num)?,
                    _ => {
                        return Err(InputScriptError::InvalidKeyName {
                            line: line_num,
                            name: line.to_string(),
                        })
                    }
                }
            }
        };

        Ok(vec![event])
    }

    fn char_event(c: char, line_num: usize) -> Result<KeyEvent, InputScriptError> {
        u8::try_from(c)
            .ok()
            .and_then(KeyEvent::printable)
            .ok_or_else(|| InputScriptError::ParseError {
                line: line_num,
                message: format!("character {:?} cannot be typed", c),
            })
    }

    /// Returns the next key event, if any
    pub fn next_event(&mut self) -> Option<KeyEvent> {
        self.events.pop_front()
    }

    /// Returns true if the script has more events
    pub fn has_more(&self) -> bool {
        !self.events.is_empty()
    }

    /// Returns the number of remaining events
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for InputScript {
    fn next_key_event(&mut self) -> Option<KeyEvent> {
        self.next_event()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_key() {
        let mut script = InputScript::from_text("a").unwrap();
        assert_eq!(script.remaining(), 1);
        assert_eq!(script.next_event(), Some(KeyEvent::Printable(b'a')));
    }

    #[test]
    fn test_parse_special_keys() {
        let mut script = InputScript::from_text("Enter\nbackspace\nSPACE").unwrap();
        assert_eq!(script.remaining(), 3);

        assert_eq!(script.next_event(), Some(KeyEvent::Enter));
        assert_eq!(script.next_event(), Some(KeyEvent::Backspace));
        assert_eq!(script.next_event(), Some(KeyEvent::Printable(b' ')));
        assert!(!script.has_more());
    }

    #[test]
    fn test_parse_quoted_string() {
        let mut script = InputScript::from_text(r#""Hi there""#).unwrap();
        assert_eq!(script.remaining(), 8);
        assert_eq!(script.next_event(), Some(KeyEvent::Printable(b'H')));
        assert_eq!(script.next_event(), Some(KeyEvent::Printable(b'i')));
        assert_eq!(script.next_event(), Some(KeyEvent::Printable(b' ')));
    }

    #[test]
    fn test_parse_empty_quotes() {
        let result = InputScript::from_text("\"\"");
        assert_eq!(result.unwrap_err(), InputScriptError::EmptyScript);
    }

    #[test]
    fn test_parse_comments_and_blank_lines() {
        let script = InputScript::from_text("# Comment\na\n\n  # Indented\nb\n\n").unwrap();
        assert_eq!(script.remaining(), 2);
    }

    #[test]
    fn test_empty_script_error() {
        assert_eq!(
            InputScript::from_text("").unwrap_err(),
            InputScriptError::EmptyScript
        );
        assert_eq!(
            InputScript::from_text("# Just comments").unwrap_err(),
            InputScriptError::EmptyScript
        );
    }

    #[test]
    fn test_invalid_key_name_reports_line() {
        let err = InputScript::from_text("a\nEscape").unwrap_err();
        assert_eq!(
            err,
            InputScriptError::InvalidKeyName {
                line: 2,
                name: "Escape".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid key name at line 2: Escape");
    }

    #[test]
    fn test_untypeable_character() {
        let err = InputScript::from_text("\"caf\u{e9}\"").unwrap_err();
        assert!(matches!(err, InputScriptError::ParseError { line: 1, .. }));
    }

    #[test]
    fn test_unterminated_string() {
        let err = InputScript::from_text("\"open").unwrap_err();
        assert_eq!(
            err,
            InputScriptError::ParseError {
                line: 1,
                message: "unterminated string".to_string()
            }
        );
    }

    #[test]
    fn test_script_as_input_source() {
        let mut script = InputScript::from_text("\"ls\"\nEnter").unwrap();
        let mut count = 0;
        while script.next_key_event().is_some() {
            count += 1;
        }
        assert_eq!(count, 3);
    }
}
