use std::path::PathBuf;

use crate::flags::Flags;

pub const HISTORY_FILE_NAME: &str = ".byteshell_history";
pub const HISTORY_SIZE: usize = 1000;

/// Runtime settings resolved from the command line and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub debug: bool,
    pub color: bool,
    pub history_file: Option<PathBuf>,
    pub history_size: usize,
    /// Argument of `-c`. It is echoed, not executed.
    pub command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            color: true,
            history_file: dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME)),
            history_size: HISTORY_SIZE,
            command: None,
        }
    }
}

impl Config {
    pub fn from_flags(flags: &Flags) -> Self {
        let mut config = Self {
            debug: flags.is_set("debug"),
            color: !flags.is_set("no-color"),
            command: flags.get_value("command").cloned(),
            ..Self::default()
        };
        if flags.is_set("no-history") {
            config.history_file = None;
        }
        config
    }
}
