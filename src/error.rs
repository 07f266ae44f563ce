//! Error types for pmlab-tui.
//!
//! Three kinds of failure exist in this system: rejected user input
//! (recovered locally as a transient notice), a failure while building a
//! mock artifact (also recovered locally), and a failure during startup
//! wiring (fatal to the session).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Required user input was empty after trimming.
    #[error("{0}")]
    Validation(String),

    /// An artifact generator failed while building its output.
    #[error("{0}")]
    Generation(String),

    /// Startup wiring failed; the session cannot proceed.
    #[error("initialization failed: {0}")]
    Init(String),
}
