use std::fmt::Display;
use std::io::{self, Write};

use tracing::warn;

/// Prefix of every diagnostic the shell writes.
pub const SHELL_NAME: &str = "byteshell";

/// Output and diagnostic streams used by built-ins and the loop.
///
/// Child processes never see these; they inherit the real stdio.
pub struct Console {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Console {
    pub fn new(out: impl Write + 'static, err: impl Write + 'static) -> Self {
        Self {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut self.out
    }

    /// Writes `byteshell: <message>` to the error stream.
    pub fn diagnostic(&mut self, message: impl Display) {
        if let Err(e) = writeln!(self.err, "{}: {}", SHELL_NAME, message) {
            warn!(error = %e, "failed to write diagnostic");
        }
    }

    /// Writes one line to the output stream.
    pub fn say(&mut self, message: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", message) {
            warn!(error = %e, "failed to write output");
        }
    }

    pub fn flush(&mut self) {
        let _ = self.out.flush();
        let _ = self.err.flush();
    }
}
