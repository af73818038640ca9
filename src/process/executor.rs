use std::process::{Command, Stdio};

use tracing::debug;

use super::signal::{self, ChildActivity, ChildExit};
use super::ProcessError;
use crate::core::commands::Flow;
use crate::core::console::Console;
use crate::core::state::ShellState;

/// Status recorded when a program could not be started.
const LAUNCH_FAILURE: i32 = 1;

/// Runs external programs in the foreground.
#[derive(Debug, Clone, Default)]
pub struct ProcessLauncher {
    activity: ChildActivity,
}

impl ProcessLauncher {
    pub fn new(activity: ChildActivity) -> Self {
        Self { activity }
    }

    /// Runs `argv[0]` with the remaining words as arguments and records its
    /// status. Failures are reported and never stop the shell.
    pub fn launch(&self, argv: &[String], state: &mut ShellState, console: &mut Console) -> Flow {
        let Some((program, args)) = argv.split_first() else {
            return Flow::Continue;
        };

        // Built-in output must reach the terminal before the child's.
        console.flush();

        match self.spawn_process(program, args) {
            Ok(exit) => {
                debug!(program = %program, ?exit, "child finished");
                state.set_last_exit_status(exit.code());
            }
            Err(e) => {
                debug!(program = %program, error = %e, "launch failed");
                console.diagnostic(&e);
                state.set_last_exit_status(LAUNCH_FAILURE);
            }
        }

        Flow::Continue
    }

    fn spawn_process(&self, program: &str, args: &[String]) -> Result<ChildExit, ProcessError> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let _guard = self.activity.enter();
        debug!(program, pid = child.id(), "spawned");
        signal::wait_for_exit(child.id() as libc::pid_t)
    }
}
