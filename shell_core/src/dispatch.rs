//! Command dispatch
//!
//! Routes a completed line to its built-in handler. Handlers write their
//! output straight to the console; failures come back as `CommandError` for
//! the session to print.

use crate::command::{Builtin, Command, BUILTINS};
use crate::console::ConsoleWriter;
use blob_store::{BlobStore, CreateError};
use console_vga::DisplaySink;
use input_types::is_printable;
use thiserror::Error;

/// Everything that can go wrong running one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError<'a> {
    #[error("Unknown command: {0}. Type 'help' for help.")]
    UnknownCommand(&'a str),

    #[error("Usage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("{0}: not found")]
    NotFound(&'a str),

    #[error("create: {0}")]
    Create(#[from] CreateError),
}

/// What a successful line did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was typed
    Empty,
    /// A command ran
    Done,
    /// The screen was cleared; the cursor is home
    Cleared,
}

/// Parses and runs one line
pub fn dispatch<'a, D: DisplaySink>(
    line: &'a str,
    console: &mut ConsoleWriter<D>,
    store: &mut BlobStore,
) -> Result<Outcome, CommandError<'a>> {
    let command = Command::parse(line);
    if command.is_empty() {
        return Ok(Outcome::Empty);
    }

    let builtin = Builtin::lookup(command.name).ok_or(CommandError::UnknownCommand(line))?;
    tracing::debug!(command = builtin.name(), "dispatching");

    // Argument-free builtins only match the whole line.
    let argument = match (builtin.takes_argument(), command.argument_text) {
        (false, Some(_)) => return Err(CommandError::UnknownCommand(line)),
        (true, None) => {
            return Err(CommandError::MissingArgument {
                usage: builtin.usage(),
            })
        }
        (_, argument) => argument.unwrap_or_default(),
    };

    match builtin {
        Builtin::Clear => {
            console.clear();
            return Ok(Outcome::Cleared);
        }
        Builtin::Echo => console.write_line(argument),
        Builtin::Minifetch => minifetch(console, store),
        Builtin::Help => help(console),
        Builtin::Ls => {
            for name in store.list() {
                console.write_line(name);
            }
        }
        Builtin::Cat => cat(argument, console, store)?,
        Builtin::Create => create(argument, store)?,
    }

    Ok(Outcome::Done)
}

fn help<D: DisplaySink>(console: &mut ConsoleWriter<D>) {
    console.write_line("Available commands:");
    for spec in BUILTINS.iter() {
        writeln!(console, "  {:<24} - {}", spec.usage, spec.summary);
    }
}

fn minifetch<D: DisplaySink>(console: &mut ConsoleWriter<D>, store: &BlobStore) {
    let (cols, rows) = console.dims();
    console.write_line("");
    writeln!(console, "    .-''-.     Pebble");
    writeln!(console, "   /      \\    Version {}", env!("CARGO_PKG_VERSION"));
    writeln!(console, "  |        |   Display: {}x{} text", cols, rows);
    writeln!(
        console,
        "   '-....-'    Blobs: {}/{}",
        store.len(),
        store.capacity()
    );
    console.write_line("");
}

fn cat<'a, D: DisplaySink>(
    name: &'a str,
    console: &mut ConsoleWriter<D>,
    store: &BlobStore,
) -> Result<(), CommandError<'a>> {
    if name.is_empty() {
        return Err(CommandError::MissingArgument {
            usage: Builtin::Cat.usage(),
        });
    }
    let blob = store.lookup(name).ok_or(CommandError::NotFound(name))?;
    for &byte in blob.content() {
        console.put_char(if is_printable(byte) { byte } else { b'.' });
    }
    console.put_char(b'\n');
    Ok(())
}

fn create<'a>(argument: &'a str, store: &mut BlobStore) -> Result<(), CommandError<'a>> {
    let (name, content) = argument
        .split_once(' ')
        .ok_or(CommandError::MissingArgument {
            usage: Builtin::Create.usage(),
        })?;
    store.create(name, content.as_bytes())?;
    Ok(())
}
