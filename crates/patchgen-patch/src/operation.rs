//! A single JSON-Patch operation.

use std::fmt;

use json_patch::jsonptr::{PointerBuf, Report};
use json_patch::{AddOperation, RemoveOperation, ReplaceOperation};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{PatchError, PatchResult};

/// The kind of change an operation describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Insert a member that does not exist in the target.
    Add,
    /// Delete an existing member.
    Remove,
    /// Overwrite an existing member with a new value.
    Replace,
}

impl OperationType {
    /// The wire name of this operation type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Replace => "replace",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation in a patch document.
///
/// Serializes to `{"op": ..., "path": ..., "value": ...}`; `value` is omitted
/// when absent, which is always the case for `remove`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    /// The operation type.
    pub op: OperationType,
    /// Slash-delimited pointer to the affected member.
    pub path: String,
    /// The new value for `add` and `replace`.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
}

// A present `"value": null` is a null value, not an absent one.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl PatchOperation {
    /// An `add` operation carrying `value`.
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: OperationType::Add,
            path: path.into(),
            value: Some(value),
        }
    }

    /// A `remove` operation. Removals never carry a value.
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: OperationType::Remove,
            path: path.into(),
            value: None,
        }
    }

    /// A `replace` operation carrying `value`.
    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: OperationType::Replace,
            path: path.into(),
            value: Some(value),
        }
    }

    /// Check that the value is present exactly when the operation type needs
    /// one and that the path is a pointer (the empty pointer is the root).
    ///
    /// Constructors always pair the value correctly, but take the path as
    /// given; documents decoded from the wire can get either wrong.
    pub fn validate(&self) -> PatchResult<()> {
        self.to_json_patch().map(|_| ())
    }

    /// Convert to the `json-patch` representation used for application.
    pub fn to_json_patch(&self) -> PatchResult<json_patch::PatchOperation> {
        let path = PointerBuf::parse(self.path.as_str()).map_err(Report::into_original)?;
        match (self.op, &self.value) {
            (OperationType::Add, Some(value)) => {
                Ok(json_patch::PatchOperation::Add(AddOperation {
                    path,
                    value: value.clone(),
                }))
            }
            (OperationType::Replace, Some(value)) => {
                Ok(json_patch::PatchOperation::Replace(ReplaceOperation {
                    path,
                    value: value.clone(),
                }))
            }
            (OperationType::Remove, None) => {
                Ok(json_patch::PatchOperation::Remove(RemoveOperation { path }))
            }
            (OperationType::Add | OperationType::Replace, None) => Err(PatchError::MissingValue {
                op: self.op.to_string(),
                path: self.path.clone(),
            }),
            (OperationType::Remove, Some(_)) => {
                Err(PatchError::UnexpectedValue(self.path.clone()))
            }
        }
    }
}

impl fmt::Display for PatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {} {}", self.op, self.path, value),
            None => write!(f, "{} {}", self.op, self.path),
        }
    }
}
