//! Helpers shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard};

use rustyline::error::ReadlineError;

use crate::core::Console;
use crate::error::ShellError;
use crate::input::{LineSource, ReadOutcome};

/// In-memory writer whose contents stay readable after it is boxed.
#[derive(Clone, Default)]
pub(crate) struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub(crate) fn captured_console() -> (Console, SharedBuf, SharedBuf) {
    let out = SharedBuf::default();
    let err = SharedBuf::default();
    (Console::new(out.clone(), err.clone()), out, err)
}

pub(crate) fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

static PROCESS_ENV: Mutex<()> = Mutex::new(());

/// Serialises tests that change the working directory or `HOME`, and puts
/// both back when dropped.
pub(crate) struct ProcessEnvGuard {
    cwd: Option<PathBuf>,
    home: Option<OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl ProcessEnvGuard {
    pub(crate) fn lock() -> Self {
        let lock = PROCESS_ENV.lock().unwrap_or_else(|e| e.into_inner());
        Self {
            cwd: env::current_dir().ok(),
            home: env::var_os("HOME"),
            _lock: lock,
        }
    }

    pub(crate) fn set_home(&self, path: &Path) {
        env::set_var("HOME", path);
    }

    pub(crate) fn remove_home(&self) {
        env::remove_var("HOME");
    }
}

impl Drop for ProcessEnvGuard {
    fn drop(&mut self) {
        if let Some(cwd) = &self.cwd {
            let _ = env::set_current_dir(cwd);
        }
        match &self.home {
            Some(home) => env::set_var("HOME", home),
            None => env::remove_var("HOME"),
        }
    }
}

/// A [`LineSource`] that replays canned outcomes and records every prompt.
pub(crate) struct ScriptedInput {
    outcomes: VecDeque<ReadOutcome>,
    prompts: Rc<RefCell<Vec<String>>>,
    fail_when_empty: bool,
}

impl ScriptedInput {
    pub(crate) fn new(outcomes: Vec<ReadOutcome>) -> Self {
        Self {
            outcomes: outcomes.into(),
            prompts: Rc::default(),
            fail_when_empty: false,
        }
    }

    pub(crate) fn lines(lines: &[&str]) -> Self {
        Self::new(
            lines
                .iter()
                .map(|l| ReadOutcome::Line(l.to_string()))
                .collect(),
        )
    }

    /// Report a read error instead of end of input once the script runs out.
    pub(crate) fn failing(mut self) -> Self {
        self.fail_when_empty = true;
        self
    }

    pub(crate) fn prompts(&self) -> Rc<RefCell<Vec<String>>> {
        self.prompts.clone()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        match self.outcomes.pop_front() {
            Some(outcome) => Ok(outcome),
            None if self.fail_when_empty => Err(ShellError::Readline(ReadlineError::Io(
                io::Error::other("scripted failure"),
            ))),
            None => Ok(ReadOutcome::Eof),
        }
    }
}
