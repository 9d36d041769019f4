use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("invalid log format: {0} (expected: text|json)")]
    InvalidFormat(String),

    #[error("invalid log level filter: {0}")]
    InvalidLevel(String),

    #[error("logging has already been initialized")]
    AlreadyInitialized,

    #[error("failed to initialize logging: {0}")]
    Init(String),
}
