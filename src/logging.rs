//! Tracing setup.
//!
//! The terminal surface belongs to the UI, so log output goes to a file
//! instead of stderr, and only when `PMLAB_LOG` names one. `RUST_LOG`
//! filters as usual.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::Error;

/// Environment variable naming the log file. Unset means no logging.
pub const LOG_PATH_VAR: &str = "PMLAB_LOG";

/// Initialize the tracing subscriber if logging is requested.
pub fn init() -> Result<(), Error> {
    let Some(path) = std::env::var_os(LOG_PATH_VAR) else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| Error::Init(format!("cannot open log file {:?}: {}", path, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Init(format!("tracing subscriber: {}", e)))?;

    Ok(())
}
