use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

use super::identity;

/// Shown wherever the working directory could not be determined.
pub const UNKNOWN_DIR: &str = "<unknown>";

/// Process-wide shell state, owned by the loop and lent to every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    user: String,
    cwd: Option<PathBuf>,
    last_exit_status: i32,
    running: bool,
}

impl ShellState {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            cwd: env::current_dir().ok(),
            last_exit_status: 0,
            running: true,
        }
    }

    /// State for the current process: effective user and working directory.
    pub fn from_process() -> Self {
        Self::new(identity::effective_user())
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Cached working directory, `None` when it is unknown.
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn cwd_display(&self) -> Cow<'_, str> {
        match &self.cwd {
            Some(dir) => dir.to_string_lossy(),
            None => Cow::Borrowed(UNKNOWN_DIR),
        }
    }

    /// Re-reads the working directory from the OS after a `chdir`.
    pub fn refresh_cwd(&mut self) {
        self.cwd = env::current_dir().ok();
    }

    pub fn last_exit_status(&self) -> i32 {
        self.last_exit_status
    }

    pub fn set_last_exit_status(&mut self, status: i32) {
        self.last_exit_status = status;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Marks the session finished with `status`.
    pub fn stop(&mut self, status: i32) {
        self.last_exit_status = status;
        self.running = false;
    }

    #[cfg(test)]
    pub(crate) fn forget_cwd(&mut self) {
        self.cwd = None;
    }
}
