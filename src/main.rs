use byteshell::config::Config;
use byteshell::error::EXIT_USAGE;
use byteshell::flags::{Flags, VERSION_BANNER};
use byteshell::logging;
use byteshell::shell::Shell;
use std::{env, process};

fn main() {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("byteshell: {}", e);
        eprintln!("Try 'byteshell --help' for more information.");
        process::exit(EXIT_USAGE);
    }

    if flags.is_set("help") {
        flags.print_help();
        return;
    }

    if flags.is_set("version") {
        println!("{}", VERSION_BANNER);
        return;
    }

    let config = Config::from_flags(&flags);
    logging::init(config.debug);

    // The -c string is only echoed.
    if let Some(command) = &config.command {
        println!("{}", command);
    }

    let status = match Shell::interactive(&config).and_then(|mut shell| shell.run()) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("byteshell: {}", e);
            e.exit_code()
        }
    };
    process::exit(status);
}
