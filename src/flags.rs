use crate::error::ShellError;
use std::collections::BTreeMap;

/// Printed by `--version`. Only the major and minor version are shown.
pub const VERSION_BANNER: &str = concat!(
    "ByteShell v",
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR")
);

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: Option<String>,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn new(short: Option<&str>, long: &str, description: &str, takes_value: bool) -> Self {
        Flag {
            short: short.map(String::from),
            long: long.to_string(),
            description: description.to_string(),
            takes_value,
            value: None,
        }
    }

    fn matches(&self, arg: &str) -> bool {
        self.short.as_deref() == Some(arg) || self.long == arg
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert(
            "help".to_string(),
            Flag::new(Some("-h"), "--help", "Print this help message", false),
        );
        flags.insert(
            "version".to_string(),
            Flag::new(Some("-v"), "--version", "Show version information", false),
        );
        flags.insert(
            "command".to_string(),
            Flag::new(Some("-c"), "--command", "Print COMMAND_STRING before starting", true),
        );
        flags.insert(
            "debug".to_string(),
            Flag::new(Some("-d"), "--debug", "Enable debug logging on stderr", false),
        );
        flags.insert(
            "no-color".to_string(),
            Flag::new(Some("-n"), "--no-color", "Disable prompt colors", false),
        );
        flags.insert(
            "no-history".to_string(),
            Flag::new(None, "--no-history", "Don't read or write the history file", false),
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            let flag = self
                .flags
                .values_mut()
                .find(|flag| flag.matches(arg))
                .ok_or_else(|| ShellError::FlagError(format!("unrecognized option '{}'", arg)))?;

            if flag.takes_value {
                let value = args.get(i + 1).ok_or_else(|| {
                    ShellError::FlagError(format!("option '{}' requires an argument", arg))
                })?;
                flag.value = Some(value.clone());
                i += 1;
            } else {
                flag.value = Some("true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: byteshell [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            let short = flag.short.as_deref().unwrap_or("  ");
            let long = if flag.takes_value {
                format!("{} STRING", flag.long)
            } else {
                flag.long.clone()
            };
            println!("  {}, {:<20} {}", short, long, flag.description);
        }
    }
}
