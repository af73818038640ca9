use tracing::trace;

use super::Shell;
use crate::core::commands::Flow;
use crate::error::ShellError;
use crate::input::LineSource;
use crate::parse::{tokenize, Statements, PIPE};

pub(crate) trait CommandHandler {
    /// Runs every statement of `line` in order, stopping early on
    /// [`Flow::StopShell`] or [`Flow::StatementFailed`].
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError>;

    fn execute_statement(&mut self, statement: &str) -> Result<Flow, ShellError>;
}

impl<R: LineSource> CommandHandler for Shell<R> {
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        for statement in Statements::new(line) {
            match self.execute_statement(statement)? {
                Flow::Continue => {}
                Flow::StatementFailed(reason) => {
                    self.console.diagnostic(&reason);
                    self.state.set_last_exit_status(1);
                    return Ok(Flow::StatementFailed(reason));
                }
                Flow::StopShell => return Ok(Flow::StopShell),
            }
        }
        Ok(Flow::Continue)
    }

    fn execute_statement(&mut self, statement: &str) -> Result<Flow, ShellError> {
        trace!(statement, "executing");

        if statement.contains(PIPE) {
            return Ok(Flow::StatementFailed(
                "pipelines are not supported".to_string(),
            ));
        }

        let tokens = tokenize(statement)?;
        Ok(self
            .dispatcher
            .dispatch(&tokens, &mut self.state, &mut self.console))
    }
}
