use super::{CommandError, Flow};
use crate::core::console::Console;
use crate::core::state::ShellState;

/// Handler for reserved names that are registered but disabled.
pub(super) fn inert(
    _argv: &[String],
    _state: &mut ShellState,
    _console: &mut Console,
) -> Result<Flow, CommandError> {
    Ok(Flow::Continue)
}
