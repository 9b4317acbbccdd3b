//! # Shell Core
//!
//! The line-mode shell: a cursor-tracking console writer, a bounded line
//! editor, the built-in command table and the session that ties them to a
//! blob store.
//!
//! ## Philosophy
//!
//! - **One owner**: `ShellSession` holds every piece of mutable state; there
//!   are no globals
//! - **Sinks, not screens**: all output goes through `DisplaySink`
//! - **Bounded**: every buffer is fixed-capacity; overflow is reported, never
//!   written past
//!
//! ## Example
//!
//! ```ignore
//! let mut session: ShellSession<TextGrid> = ShellSession::new(TextGrid::default(), ShellConfig::default());
//! session.boot();
//! session.run_until_idle(&mut IterSource::new(text_events("echo hi\n")));
//! ```

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod console;
pub mod dispatch;
pub mod line_editor;
pub mod session;

pub use command::{Builtin, BuiltinSpec, Command, BUILTINS};
pub use console::ConsoleWriter;
pub use dispatch::{dispatch, CommandError, Outcome};
pub use line_editor::{CompletedLine, LineEditor, LineFull, PendingLine, LINE_CAP, MAX_LINE_LEN};
pub use session::{ShellConfig, ShellSession};
