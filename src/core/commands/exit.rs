use std::io::Write;

use tracing::debug;

use super::{CommandError, Flow};
use crate::core::console::Console;
use crate::core::state::ShellState;

pub const FAREWELL: &str = "Goodbye! :)";

/// Ends the session. The farewell is printed only for a zero status.
pub(super) fn exit(
    argv: &[String],
    state: &mut ShellState,
    console: &mut Console,
) -> Result<Flow, CommandError> {
    let (status, farewell) = match argv.get(1..).unwrap_or_default() {
        [] => {
            let last = state.last_exit_status();
            (last, last == 0)
        }
        [code] => {
            let value = parse_code(code)?;
            // The OS keeps the low eight bits of the status.
            ((value % 256) as i32, value == 0)
        }
        _ => return Err(CommandError::TooManyArguments),
    };

    if farewell {
        writeln!(console.out(), "{}", FAREWELL)?;
    }
    debug!(status, "exit requested");
    state.stop(status);

    Ok(Flow::StopShell)
}

fn parse_code(code: &str) -> Result<u64, CommandError> {
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CommandError::InvalidArgument);
    }
    code.parse().map_err(|_| CommandError::InvalidArgument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{args, captured_console};

    fn run(argv: &[&str], last: i32) -> (Result<Flow, CommandError>, ShellState, String) {
        let (mut console, out, _) = captured_console();
        let mut state = ShellState::new("tester");
        state.set_last_exit_status(last);
        let result = exit(&args(argv), &mut state, &mut console);
        (result, state, out.contents())
    }

    #[test]
    fn test_bare_exit_after_success() {
        let (result, state, out) = run(&["exit"], 0);
        assert_eq!(result.unwrap(), Flow::StopShell);
        assert!(!state.is_running());
        assert_eq!(state.last_exit_status(), 0);
        assert_eq!(out, "Goodbye! :)\n");
    }

    #[test]
    fn test_bare_exit_keeps_failure_status() {
        let (result, state, out) = run(&["exit"], 2);
        assert_eq!(result.unwrap(), Flow::StopShell);
        assert_eq!(state.last_exit_status(), 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_exit_with_code() {
        let (result, state, out) = run(&["exit", "0"], 5);
        assert_eq!(result.unwrap(), Flow::StopShell);
        assert_eq!(state.last_exit_status(), 0);
        assert_eq!(out, "Goodbye! :)\n");

        let (_, state, out) = run(&["exit", "42"], 0);
        assert_eq!(state.last_exit_status(), 42);
        assert!(out.is_empty());
    }

    #[test]
    fn test_exit_code_wraps() {
        let (_, state, out) = run(&["exit", "256"], 0);
        assert_eq!(state.last_exit_status(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_exit_non_numeric() {
        for bad in ["abc", "-1", "1a", "99999999999999999999999"] {
            let (result, state, out) = run(&["exit", bad], 0);
            assert!(matches!(result, Err(CommandError::InvalidArgument)), "{}", bad);
            assert!(state.is_running());
            assert!(out.is_empty());
        }
    }

    #[test]
    fn test_exit_too_many_arguments() {
        let (result, state, _) = run(&["exit", "1", "2"], 0);
        assert!(matches!(result, Err(CommandError::TooManyArguments)));
        assert!(state.is_running());
    }
}
