pub mod logging;

use std::io;

/// Result type for fold runs
pub type FoldResult<T> = Result<T, FoldError>;

/// Error type for the fold engine.
///
/// Read and write failures share one variant; which side failed is only
/// recorded in the log.
#[derive(Debug, thiserror::Error)]
pub enum FoldError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reason the argument resolver refused an invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("option '{flag}' requires a WIDTH argument")]
    MissingWidth { flag: String },

    #[error("invalid width '{token}' (parsed as {value}, must be at least 2)")]
    InvalidWidth { token: String, value: i64 },

    #[error("unrecognized argument '{0}'")]
    UnrecognizedArgument(String),
}
