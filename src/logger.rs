//! Structured logging on stderr; stdout is reserved for query results.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install the global subscriber. `RUST_LOG` wins when it is set and valid,
/// otherwise `configured_level` (already checked by [`parse_level`]) applies.
pub fn init(configured_level: &str) -> Result<(), AppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(parse_level(configured_level)?.to_string()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("subscriber already installed: {e}")))
}

/// Accepts `off`, `error`, `warn`, `info`, `debug` and `trace`, any case.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}
