//! # Host Runtime
//!
//! The main event loop: input → shell → render.

use crate::input_script::{InputScript, InputScriptError};
use crate::reader_input::ReaderInput;
use crate::report::StoreReport;
use clap::ValueEnum;
use console_vga::TextGrid;
use input_types::InputSource;
use shell_core::{ShellConfig, ShellSession};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Host runtime error types
#[derive(Debug, Error)]
pub enum HostRuntimeError {
    #[error("Script error: {0}")]
    Script(#[from] InputScriptError),

    #[error("Failed to read script file {path}: {source}")]
    ScriptRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Output error: {0}")]
    Output(#[from] io::Error),

    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}

/// When frames are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderMode {
    /// After every completed line
    #[default]
    EachLine,
    /// Once, after the input ends
    Final,
    /// Never
    Never,
}

/// Host runtime configuration
#[derive(Debug, Clone, Default)]
pub struct HostRuntimeConfig {
    /// Optional input script text; stdin is used when absent
    pub script: Option<String>,
    /// Maximum key events to process (0 = unlimited)
    pub max_steps: usize,
    /// Frame policy
    pub render: RenderMode,
    /// Shell prompt, colours and banner
    pub shell: ShellConfig,
}

/// Reads a key script from disk
pub fn read_script(path: &Path) -> Result<String, HostRuntimeError> {
    fs::read_to_string(path).map_err(|source| HostRuntimeError::ScriptRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Host runtime
pub struct HostRuntime {
    /// Configuration
    config: HostRuntimeConfig,
    /// The shell, rendering into an in-memory grid
    session: ShellSession<TextGrid>,
    /// Key event source
    input: Box<dyn InputSource>,
    /// Step counter
    steps: usize,
    /// Grid revision of the last frame written
    last_rendered: Option<u64>,
    /// Frames written so far
    frames: usize,
}

impl HostRuntime {
    /// Creates a runtime fed by the configured script, or by stdin
    pub fn new(config: HostRuntimeConfig) -> Result<Self, HostRuntimeError> {
        let input: Box<dyn InputSource> = match &config.script {
            Some(text) => Box::new(InputScript::from_text(text)?),
            None => Box::new(ReaderInput::stdin()),
        };
        Ok(Self::with_input(config, input))
    }

    /// Creates a runtime over an explicit input source
    pub fn with_input(config: HostRuntimeConfig, input: Box<dyn InputSource>) -> Self {
        let mut session = ShellSession::new(TextGrid::new(config.shell.attr), config.shell);
        session.boot();

        Self {
            config,
            session,
            input,
            steps: 0,
            last_rendered: None,
            frames: 0,
        }
    }

    /// Runs until the input ends or `max_steps` is reached
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), HostRuntimeError> {
        if self.config.render == RenderMode::EachLine {
            self.render(out)?;
        }

        loop {
            if self.config.max_steps > 0 && self.steps >= self.config.max_steps {
                tracing::debug!(steps = self.steps, "step limit reached");
                break;
            }

            let Some(event) = self.input.next_key_event() else {
                tracing::debug!(steps = self.steps, "input exhausted");
                break;
            };

            let line_done = self.session.handle_key(event);
            self.steps += 1;

            if line_done && self.config.render == RenderMode::EachLine {
                self.render(out)?;
            }
        }

        if self.config.render != RenderMode::Never {
            self.render(out)?;
        }
        out.flush()?;

        tracing::info!(
            steps = self.steps,
            lines = self.session.lines_dispatched(),
            blobs = self.session.store().len(),
            "session finished"
        );
        Ok(())
    }

    /// Writes the grid if it changed since the last frame
    fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let revision = self.session.sink().revision();
        if self.last_rendered == Some(revision) {
            return Ok(());
        }

        self.frames += 1;
        writeln!(out, "--- frame {} (step {}) ---", self.frames, self.steps)?;
        writeln!(out, "{}", self.session.sink().render_text())?;
        self.last_rendered = Some(revision);
        Ok(())
    }

    /// Current blob store contents
    pub fn report(&self) -> StoreReport {
        StoreReport::from_store(self.session.store())
    }

    /// Returns the step count
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Returns the number of frames written
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// Returns the shell session (for testing)
    pub fn session(&self) -> &ShellSession<TextGrid> {
        &self.session
    }
}
