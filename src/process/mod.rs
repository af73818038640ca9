use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessLauncher;
pub use signal::{ChildActivity, ChildExit, PromptSnapshot};

#[derive(Debug)]
pub enum ProcessError {
    Spawn {
        program: String,
        source: std::io::Error,
    },
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn { program, source } => match source.kind() {
                std::io::ErrorKind::NotFound => write!(f, "{}: command not found", program),
                std::io::ErrorKind::PermissionDenied => write!(f, "{}: Permission denied", program),
                _ => write!(f, "{}: {}", program, source),
            },
            ProcessError::Wait(e) => write!(f, "wait failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Spawn { source, .. } => Some(source),
            ProcessError::Wait(e) => Some(e),
        }
    }
}
