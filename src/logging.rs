use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "BYTESHELL_LOG";

/// Sends log output to stderr. `BYTESHELL_LOG` overrides the default level,
/// which is `debug` with `--debug` and `warn` otherwise. Calling this twice
/// keeps the first subscriber.
pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(true);
        init(false);
        tracing::debug!("still alive");
    }
}
