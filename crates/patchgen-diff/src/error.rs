//! Error types for the diff crate.

use crate::kind::NodeKind;

/// Errors that can occur while generating a patch.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A value could not be projected into a JSON tree.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A value projected to something other than an object.
    #[error("unsupported root: expected object, got {kind}")]
    UnsupportedRoot { kind: NodeKind },

    /// The projected tree nests deeper than the configured limit.
    #[error("projected value exceeds maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
