use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map `-v` count and `--debug` to a default filter level
pub fn level_for(verbosity: u8, debug: bool) -> &'static str {
    if debug {
        return "debug";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over the CLI level.
///
/// `log` records from the library crates are bridged through tracing-log.
pub fn init_logging(verbosity: u8, debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, debug)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(debug),
        )
        .try_init()
        .map_err(|_| anyhow!("Failed to initialize subscriber (already set)"))
}
