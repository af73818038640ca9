use std::fmt;

mod builtin;
mod cd;
mod exit;
mod pwd;

pub use exit::FAREWELL;

use tracing::debug;

use crate::core::console::Console;
use crate::core::state::ShellState;
use crate::parse::Tokens;
use crate::process::ProcessLauncher;

/// What the caller should do after a statement has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Keep going with the next statement.
    Continue,
    /// The session is over; the status is in [`ShellState`].
    StopShell,
    /// The statement could not run; the rest of the line is skipped.
    StatementFailed(String),
}

/// Usage errors reported by built-ins.
#[derive(Debug)]
pub enum CommandError {
    InvalidOption(String),
    InvalidArgument,
    TooManyArguments,
    NoSuchDirectory(String),
    HomeDirNotFound,
    CurrentDirUnknown,
    IoError(std::io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidOption(opt) => {
                write!(f, "{}: invalid option\n{}", opt, cd::USAGE)
            }
            CommandError::InvalidArgument => write!(f, "invalid argument"),
            CommandError::TooManyArguments => write!(f, "too many arguments"),
            CommandError::NoSuchDirectory(path) => {
                write!(f, "{}: No such file or directory", path)
            }
            CommandError::HomeDirNotFound => write!(f, "HOME not set"),
            CommandError::CurrentDirUnknown => write!(f, "error getting current directory"),
            CommandError::IoError(err) => write!(f, "write error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// A built-in receives the whole argument vector, `argv[0]` included.
pub type Handler = fn(&[String], &mut ShellState, &mut Console) -> Result<Flow, CommandError>;

#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub handler: Handler,
    pub enabled: bool,
}

impl Builtin {
    pub const fn enabled(name: &'static str, handler: Handler) -> Self {
        Self {
            name,
            handler,
            enabled: true,
        }
    }

    pub const fn disabled(name: &'static str, handler: Handler) -> Self {
        Self {
            name,
            handler,
            enabled: false,
        }
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// Ordered table of built-ins. Lookup is a linear scan; the first enabled
/// entry with a matching name wins.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<Builtin>,
}

impl Registry {
    pub fn new(entries: Vec<Builtin>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            Builtin::enabled("cd", cd::cd),
            Builtin::disabled("help", builtin::inert),
            Builtin::enabled("exit", exit::exit),
            Builtin::enabled("pwd", pwd::pwd),
            Builtin::disabled("builtin", builtin::inert),
            Builtin::disabled("command", builtin::inert),
            Builtin::disabled("echo", builtin::inert),
            Builtin::disabled("enable", builtin::inert),
        ])
    }

    pub fn find(&self, name: &str) -> Option<&Builtin> {
        self.entries.iter().find(|b| b.enabled && b.name == name)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn entries(&self) -> &[Builtin] {
        &self.entries
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Routes an argument vector to a built-in or to an external program.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    registry: Registry,
    launcher: ProcessLauncher,
}

impl Dispatcher {
    pub fn new(registry: Registry, launcher: ProcessLauncher) -> Self {
        Self { registry, launcher }
    }

    pub fn dispatch(&self, tokens: &Tokens, state: &mut ShellState, console: &mut Console) -> Flow {
        let Some(name) = tokens.program() else {
            return Flow::Continue;
        };

        let Some(builtin) = self.registry.find(name) else {
            return self.launcher.launch(tokens.as_slice(), state, console);
        };

        debug!(builtin = builtin.name, argc = tokens.len(), "running builtin");
        match (builtin.handler)(tokens.as_slice(), state, console) {
            Ok(flow) => flow,
            Err(e) => {
                console.diagnostic(format_args!("{}: {}", builtin.name, e));
                state.set_last_exit_status(1);
                Flow::Continue
            }
        }
    }
}
