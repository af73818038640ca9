use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ShellError;

/// Result of one blocking read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C was typed while editing the line.
    Interrupted,
    /// End of input.
    Eof,
}

/// Where the loop gets its lines from.
pub trait LineSource {
    /// Shows `prompt` and blocks until a full line, an interrupt or end of
    /// input. Errors other than these end the session.
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;

    /// Called once when the session ends.
    fn close(&mut self) {}
}

pub struct RustylineReader {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl RustylineReader {
    pub fn new(config: &Config) -> Result<Self, ShellError> {
        let editor_config = rustyline::Config::builder()
            .auto_add_history(true)
            .max_history_size(config.history_size)?
            .build();
        let mut editor = DefaultEditor::with_config(editor_config)?;

        if let Some(path) = &config.history_file {
            if path.exists() {
                match editor.load_history(path) {
                    Ok(()) => debug!(path = %path.display(), "loaded history"),
                    Err(e) => warn!(path = %path.display(), error = %e, "couldn't load history"),
                }
            }
        }

        Ok(Self {
            editor,
            history_file: config.history_file.clone(),
        })
    }
}

impl LineSource for RustylineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn close(&mut self) {
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                warn!(path = %path.display(), error = %e, "couldn't save history");
            }
        }
    }
}
