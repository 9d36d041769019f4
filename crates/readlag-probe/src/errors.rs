use thiserror::Error;

use readlag_client::ClientError;

/// Failure of one stale-read task.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Raw connection parameters could not be resolved into a client
    /// handle. Only the `connect` construction path can produce this.
    #[error("connection resolution failed: {0}")]
    Connect(#[source] ClientError),

    /// The single-use read did not execute.
    #[error("query execution failed: {0}")]
    Query(#[source] ClientError),

    /// The read executed but returned something other than the expected row.
    #[error("validation failed: {0}")]
    Validate(#[from] ValidateError),
}

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("records did not match: expected {expected:?}, got {actual:?}")]
    RecordMismatch { expected: String, actual: String },

    #[error("no rows returned for key {key:?}")]
    NoRows { key: String },

    #[error("row read failed: {0}")]
    Read(#[source] ClientError),
}
