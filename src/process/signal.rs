use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::trace;

use super::ProcessError;
use crate::error::ShellError;

/// Whether a foreground child is currently running.
#[derive(Debug, Clone, Default)]
pub struct ChildActivity {
    running: Arc<AtomicBool>,
}

impl ChildActivity {
    pub fn is_active(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Marks a child as running until the guard is dropped.
    pub fn enter(&self) -> ActivityGuard<'_> {
        self.running.store(true, Ordering::SeqCst);
        ActivityGuard { activity: self }
    }
}

pub struct ActivityGuard<'a> {
    activity: &'a ChildActivity,
}

impl Drop for ActivityGuard<'_> {
    fn drop(&mut self) {
        self.activity.running.store(false, Ordering::SeqCst);
    }
}

/// Last prompt rendered by the loop, read by the interrupt handler.
#[derive(Debug, Clone, Default)]
pub struct PromptSnapshot {
    prompt: Arc<Mutex<String>>,
}

impl PromptSnapshot {
    pub fn update(&self, prompt: &str) {
        if let Ok(mut current) = self.prompt.lock() {
            current.clear();
            current.push_str(prompt);
        }
    }

    pub fn get(&self) -> String {
        self.prompt
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

/// Installs the SIGINT handler for the shell process.
///
/// The handler prints a newline and, when no child is in the foreground,
/// redraws the prompt. The blocked read is restarted rather than cancelled.
/// Children start with the default disposition since caught signals are
/// reset on exec.
pub fn install_interrupt_handler(
    prompt: PromptSnapshot,
    activity: ChildActivity,
) -> Result<(), ShellError> {
    ctrlc::set_handler(move || {
        trace!(child = activity.is_active(), "SIGINT received");
        on_interrupt(&mut io::stdout().lock(), &prompt, &activity);
    })?;
    Ok(())
}

fn on_interrupt(out: &mut impl Write, prompt: &PromptSnapshot, activity: &ChildActivity) {
    let _ = writeln!(out);
    if !activity.is_active() {
        let _ = write!(out, "{}", prompt.get());
    }
    let _ = out.flush();
}

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    Exited(i32),
    Signaled(i32),
}

impl ChildExit {
    /// Status recorded for the shell: the exit code, or 128 plus the signal.
    pub fn code(self) -> i32 {
        match self {
            ChildExit::Exited(code) => code,
            ChildExit::Signaled(sig) => 128 + sig,
        }
    }
}

/// Blocks until `pid` exits or is killed. Stop notifications are skipped.
pub fn wait_for_exit(pid: libc::pid_t) -> Result<ChildExit, ProcessError> {
    let mut status: libc::c_int = 0;

    loop {
        let rc = unsafe { libc::waitpid(pid, &mut status, libc::WUNTRACED) };
        if rc == -1 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(ProcessError::Wait(err));
        }

        if libc::WIFEXITED(status) {
            return Ok(ChildExit::Exited(libc::WEXITSTATUS(status)));
        }
        if libc::WIFSIGNALED(status) {
            return Ok(ChildExit::Signaled(libc::WTERMSIG(status)));
        }
        trace!(pid, "child stopped, still waiting");
    }
}
