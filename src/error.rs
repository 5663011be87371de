// Error taxonomy for broker calls. Config load failures are handled
// separately in `config.rs` via anyhow, since they abort the process
// before any command runs.

use thiserror::Error;

/// Errors produced by `ApiClient` operations. Display strings double as
/// the user-facing messages printed by the command handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: the broker could not be reached or the
    /// response body could not be read.
    #[error("error connecting to broker")]
    Connection(#[from] reqwest::Error),

    /// The response body was not valid JSON or did not match the
    /// expected envelope shape.
    #[error("error parsing response from broker: {0}")]
    Parse(String),

    /// The envelope decoded fine but carried a broker error message,
    /// surfaced verbatim.
    #[error("{0}")]
    Application(String),
}
