//! Shell session
//!
//! `ShellSession` is the single owner of the console, the pending line and
//! the blob store. Input sources push key events in; the session edits,
//! dispatches and reprints the prompt.

use crate::console::ConsoleWriter;
use crate::dispatch::{dispatch, Outcome};
use crate::line_editor::{CompletedLine, LineEditor};
use blob_store::BlobStore;
use console_vga::{DisplaySink, VgaColor};
use input_types::{InputSource, KeyEvent};

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// Printed before every line
    pub prompt: &'static str,
    /// Attribute for every cell the shell writes
    pub attr: u8,
    /// Printed once by `boot`
    pub banner: &'static str,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "pebble> ",
            attr: VgaColor::make_attr(VgaColor::White, VgaColor::Black),
            banner: "Pebble Shell\n============\n\n",
        }
    }
}

/// One interactive shell
pub struct ShellSession<D: DisplaySink> {
    console: ConsoleWriter<D>,
    editor: LineEditor,
    store: BlobStore,
    config: ShellConfig,
    lines_dispatched: u64,
}

impl<D: DisplaySink> ShellSession<D> {
    pub fn new(sink: D, config: ShellConfig) -> Self {
        Self {
            console: ConsoleWriter::new(sink, config.attr),
            editor: LineEditor::new(),
            store: BlobStore::new(),
            config,
            lines_dispatched: 0,
        }
    }

    /// Clears the display, prints the banner and the first prompt
    pub fn boot(&mut self) {
        self.editor.reset();
        self.console.clear();
        self.console.write_str(self.config.banner);
        self.show_prompt();
        tracing::info!(prompt = self.config.prompt, "shell ready");
    }

    /// Processes one key event
    ///
    /// Returns true when the key completed a line.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        match self.editor.handle_key(event, &mut self.console) {
            Some(line) => {
                self.execute(&line);
                true
            }
            None => false,
        }
    }

    /// Pulls at most one event from `source`
    ///
    /// Returns false when the source had nothing to offer.
    pub fn step<S: InputSource + ?Sized>(&mut self, source: &mut S) -> bool {
        match source.next_key_event() {
            Some(event) => {
                self.handle_key(event);
                true
            }
            None => false,
        }
    }

    /// Drains `source`, returning how many events were processed
    pub fn run_until_idle<S: InputSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let mut processed = 0;
        while self.step(source) {
            processed += 1;
        }
        processed
    }

    /// Serves `source` forever, spinning while it is idle
    pub fn run<S: InputSource>(&mut self, mut source: S) -> ! {
        loop {
            if !self.step(&mut source) {
                core::hint::spin_loop();
            }
        }
    }

    fn execute(&mut self, line: &CompletedLine) {
        self.lines_dispatched += 1;

        match dispatch(line.as_str(), &mut self.console, &mut self.store) {
            Ok(Outcome::Empty) => {}
            Ok(outcome) => tracing::debug!(?outcome, "command finished"),
            Err(err) => {
                tracing::warn!(error = %err, "command failed");
                writeln!(self.console, "{}", err);
            }
        }

        self.show_prompt();
    }

    fn show_prompt(&mut self) {
        self.console.write_str(self.config.prompt);
    }

    pub fn store(&self) -> &BlobStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BlobStore {
        &mut self.store
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn console(&self) -> &ConsoleWriter<D> {
        &self.console
    }

    pub fn sink(&self) -> &D {
        self.console.sink()
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Completed lines so far, empty ones included
    pub fn lines_dispatched(&self) -> u64 {
        self.lines_dispatched
    }

    pub fn into_sink(self) -> D {
        self.console.into_sink()
    }
}
