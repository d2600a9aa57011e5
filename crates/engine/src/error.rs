//! Engine error types.

/// Errors surfaced by a [`TargetExecutor`](crate::target::TargetExecutor).
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// The target could not be reached or refused the connection.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The statement or script failed server-side.
    #[error("execution failed: {0}")]
    Execution(String),

    /// The in-flight statement was aborted by a cancellation signal.
    #[error("statement cancelled")]
    Cancelled,
}

/// Errors surfaced by the maintenance and query executors.
///
/// Target failures on the maintenance path never become an `EngineError`;
/// they are recorded on the run instead. Ledger failures always propagate.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Safe mode rejected the statement before any connection was attempted.
    #[error("safe mode blocks destructive statements")]
    BlockedByPolicy,

    /// The target could not be reached or refused the connection.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The statement or script failed server-side.
    #[error("execution failed: {0}")]
    Execution(String),

    /// The operation was aborted by a cancellation signal.
    #[error("operation cancelled")]
    Cancelled,

    /// A hub-side ledger write failed.
    #[error("ledger write failed: {0}")]
    Ledger(#[from] sqlx::Error),
}

impl From<TargetError> for EngineError {
    fn from(err: TargetError) -> Self {
        match err {
            TargetError::Connection(msg) => Self::Connection(msg),
            TargetError::Execution(msg) => Self::Execution(msg),
            TargetError::Cancelled => Self::Cancelled,
        }
    }
}
