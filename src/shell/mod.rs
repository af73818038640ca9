mod executor;

use tracing::{debug, trace, warn};

use crate::{
    config::Config,
    core::{
        commands::{Flow, Registry, FAREWELL},
        Console, Dispatcher, ShellState,
    },
    error::ShellError,
    highlight::Highlighter,
    input::{LineSource, ReadOutcome, RustylineReader},
    process::{signal, ChildActivity, ProcessLauncher, PromptSnapshot},
};

pub(crate) use executor::CommandHandler;

/// The read-dispatch loop and the state it owns.
pub struct Shell<R: LineSource> {
    pub(crate) reader: R,
    pub(crate) state: ShellState,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) highlighter: Highlighter,
    pub(crate) console: Console,
    pub(crate) prompt: PromptSnapshot,
}

impl Shell<RustylineReader> {
    /// A shell on the terminal, with the SIGINT handler installed.
    ///
    /// The handler can only be installed once per process.
    pub fn interactive(config: &Config) -> Result<Self, ShellError> {
        let reader = RustylineReader::new(config)?;
        let activity = ChildActivity::default();
        let prompt = PromptSnapshot::default();
        signal::install_interrupt_handler(prompt.clone(), activity.clone())?;

        let dispatcher = Dispatcher::new(Registry::standard(), ProcessLauncher::new(activity));
        let mut shell = Shell::new(
            reader,
            ShellState::from_process(),
            dispatcher,
            Highlighter::new(config.color),
            Console::stdio(),
        );
        shell.prompt = prompt;
        Ok(shell)
    }
}

impl<R: LineSource> Shell<R> {
    pub fn new(
        reader: R,
        state: ShellState,
        dispatcher: Dispatcher,
        highlighter: Highlighter,
        console: Console,
    ) -> Self {
        Shell {
            reader,
            state,
            dispatcher,
            highlighter,
            console,
            prompt: PromptSnapshot::default(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Runs until `exit`, end of input or a read error, and returns the
    /// status the process should exit with.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        debug!(user = %self.state.user(), cwd = %self.state.cwd_display(), "session started");
        let result = self.run_loop();
        self.console.flush();
        self.reader.close();
        debug!(?result, "session ended");
        result
    }

    fn run_loop(&mut self) -> Result<i32, ShellError> {
        while self.state.is_running() {
            let prompt = self
                .highlighter
                .prompt(self.state.user(), &self.state.cwd_display());
            self.prompt.update(&prompt);
            self.console.flush();

            match self.reader.read_line(&prompt) {
                Ok(ReadOutcome::Line(line)) => {
                    if self.execute_line(&line)? == Flow::StopShell {
                        break;
                    }
                }
                Ok(ReadOutcome::Interrupted) => {
                    trace!("interrupted at prompt");
                }
                Ok(ReadOutcome::Eof) => {
                    self.console.say(format_args!("\n{}", FAREWELL));
                    self.state.stop(0);
                }
                Err(e) => {
                    warn!(error = %e, "read failed");
                    self.console.diagnostic("Input error");
                    self.state.stop(0);
                }
            }
        }

        Ok(self.state.last_exit_status())
    }
}
