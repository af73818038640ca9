use std::io::Write;

use super::{CommandError, Flow};
use crate::core::console::Console;
use crate::core::state::ShellState;

/// Prints the cached working directory. Arguments are ignored.
pub(super) fn pwd(
    _argv: &[String],
    state: &mut ShellState,
    console: &mut Console,
) -> Result<Flow, CommandError> {
    let dir = state.cwd().ok_or(CommandError::CurrentDirUnknown)?;
    writeln!(console.out(), "{}", dir.display())?;
    state.set_last_exit_status(0);
    Ok(Flow::Continue)
}
