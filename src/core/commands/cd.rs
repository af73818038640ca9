use std::env;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use super::{CommandError, Flow};
use crate::core::console::Console;
use crate::core::state::ShellState;

pub(super) const USAGE: &str = "Usage: cd [--help|DIR]";

const HELP: &str = "Usage: cd [--help|DIR]
Change the shell current working directory.

Change the current directory to DIR. The default DIR is the value of the
HOME shell variable.

OPTIONS:
--help \t Prints this help menu";

pub(super) fn cd(
    argv: &[String],
    state: &mut ShellState,
    console: &mut Console,
) -> Result<Flow, CommandError> {
    let args = argv.get(1..).unwrap_or_default();

    // Option checks come before the argument count: `cd -x a b` is an
    // invalid option, not too many arguments.
    let target = match args {
        [] => env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .ok_or(CommandError::HomeDirNotFound)?,
        [first, ..] if first == "--help" => {
            writeln!(console.out(), "{}", HELP)?;
            state.set_last_exit_status(0);
            return Ok(Flow::Continue);
        }
        [first, ..] if first.starts_with('-') => {
            return Err(CommandError::InvalidOption(first.clone()));
        }
        [_, _, ..] => return Err(CommandError::TooManyArguments),
        [path] => PathBuf::from(path),
    };

    env::set_current_dir(&target)
        .map_err(|_| CommandError::NoSuchDirectory(target.display().to_string()))?;
    state.refresh_cwd();
    state.set_last_exit_status(0);
    debug!(cwd = %state.cwd_display(), "changed directory");

    Ok(Flow::Continue)
}
