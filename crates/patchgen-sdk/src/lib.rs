//! High-level API for patchgen.
//!
//! Generates JSON patch documents describing how one value differs from
//! another, tracks changes to a value against a snapshot, and applies patches
//! back onto values. This is the main entry point for applications; the
//! individual crates are re-exported here.
//!
//! ```
//! use patchgen_sdk::{generate, PatchOperation};
//! use serde_json::json;
//!
//! let before = json!({"name": "a", "tags": [1, 2]});
//! let after = json!({"name": "b", "tags": [2, 1]});
//!
//! let patch = generate(&before, &after).unwrap();
//! assert_eq!(
//!     patch.operations(),
//!     &[
//!         PatchOperation::replace("/name", json!("b")),
//!         PatchOperation::replace("/tags", json!([2, 1])),
//!     ]
//! );
//! ```

pub use patchgen_diff::{
    diff_trees, generate, generate_with, project, DiffError, DiffResult, NodeKind,
    NullValueHandling, PatchGenerator, ProjectionSettings,
};
pub use patchgen_observer::ChangeObserver;
pub use patchgen_patch::{
    parse_pointer, OperationType, PatchDocument, PatchError, PatchOperation, PatchResult,
};
