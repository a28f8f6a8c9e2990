//! Logging setup. Events go to stderr so stdout carries nothing but the
//! rendered credential.

use std::io;
use std::sync::OnceLock;

use tracing::level_filters::LevelFilter;

static LOGGER: OnceLock<Result<(), String>> = OnceLock::new();

/// Installs the global subscriber once; later calls report the first outcome.
pub fn init(level: LevelFilter) -> io::Result<()> {
    match LOGGER.get_or_init(|| configure(level)) {
        Ok(()) => Ok(()),
        Err(err) => Err(io::Error::other(err.clone())),
    }
}

fn configure(level: LevelFilter) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| e.to_string())
}
