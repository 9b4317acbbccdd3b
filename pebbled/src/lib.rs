//! # Pebble Host Daemon
//!
//! Runs a Pebble shell session on a host operating system.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The shell only ever sees key events and a cell grid
//! - **Output is snapshot rendering**: Frames are whole-screen text, not a
//!   terminal stream
//! - **Deterministic mode is first-class**: Key scripts replay exactly
//!
//! ## Responsibilities
//!
//! The host:
//! - Boots a `ShellSession` over an in-memory `TextGrid`
//! - Feeds it from a key script or from stdin
//! - Prints frames to stdout when the grid changed
//! - Reports the blob store as JSON on request

pub mod input_script;
pub mod reader_input;
pub mod report;
pub mod runtime;

pub use input_script::{InputScript, InputScriptError};
pub use reader_input::ReaderInput;
pub use report::{BlobReport, StoreReport};
pub use runtime::{read_script, HostRuntime, HostRuntimeConfig, HostRuntimeError, RenderMode};
