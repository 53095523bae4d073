//! Error types for the patch crate.

use json_patch::jsonptr::ParseError;

/// Errors that can occur while validating or applying a patch.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    /// The path is not a valid JSON pointer.
    #[error("invalid pointer: {0}")]
    InvalidPointer(#[from] ParseError),

    /// An `add` or `replace` operation has no value.
    #[error("{op} operation at {path} requires a value")]
    MissingValue { op: String, path: String },

    /// A `remove` operation carries a value.
    #[error("remove operation at {0} must not carry a value")]
    UnexpectedValue(String),

    /// An operation could not be applied to the target document.
    #[error("apply error: {0}")]
    Apply(#[from] json_patch::PatchError),

    /// The target could not be converted to or from its JSON representation.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias for patch results.
pub type PatchResult<T> = Result<T, PatchError>;
