/// Conventional exit status for fatal internal errors.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for an unusable invocation of the shell itself.
pub const EXIT_USAGE: i32 = 64;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Allocation,
    FlagError(String),
    CtrlC(String),
}

impl ShellError {
    /// Status the shell process terminates with when this error escapes the loop.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::FlagError(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl From<std::collections::TryReserveError> for ShellError {
    fn from(_: std::collections::TryReserveError) -> Self {
        ShellError::Allocation
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Allocation => write!(f, "Allocation error"),
            ShellError::FlagError(msg) => write!(f, "{}", msg),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ShellError::Allocation.exit_code(), EXIT_FAILURE);
        assert_eq!(
            ShellError::FlagError("bad".to_string()).exit_code(),
            EXIT_USAGE
        );
    }

    #[test]
    fn test_try_reserve_maps_to_allocation() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert!(matches!(ShellError::from(err), ShellError::Allocation));
        assert_eq!(ShellError::Allocation.to_string(), "Allocation error");
    }

    #[test]
    fn test_readline_error_conversion() {
        let err = rustyline::error::ReadlineError::Io(std::io::Error::other("tty gone"));
        let shell_err = ShellError::from(err);
        assert!(matches!(shell_err, ShellError::Readline(_)));
        assert_eq!(shell_err.exit_code(), EXIT_FAILURE);
        assert!(shell_err.to_string().starts_with("Readline error: "));
    }
}
