//! Tracing subscriber setup for the `primer` binary

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that overrides the CLI log level
pub const LOG_ENV: &str = "PRIMER_LOG";

/// Filter directive for the given CLI flags
///
/// A bare level such as `info` is scoped to this crate.
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("primer={level}"),
        (true, None) => "primer=debug".to_string(),
        (false, None) => "primer=warn".to_string(),
    }
}

/// Install a stderr fmt subscriber
///
/// `PRIMER_LOG` (or `RUST_LOG`) wins over the flags.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
