//! Patch documents for patchgen.
//!
//! A patch document is an ordered list of JSON-Patch `add`, `remove` and
//! `replace` operations addressed by slash-delimited pointers. Documents
//! serialize to the standard JSON-Patch wire format and can be applied to a
//! JSON value or to any serde-representable value.
//!
//! # Key Types
//!
//! - [`PatchDocument`] -- Ordered operation list with application support
//! - [`PatchOperation`] / [`OperationType`] -- A single wire-format operation
//! - [`PatchError`] -- Failures raised while validating or applying a patch

pub mod apply;
pub mod document;
pub mod error;
pub mod operation;
pub mod pointer;

pub use document::PatchDocument;
pub use error::{PatchError, PatchResult};
pub use apply::apply_operation;
pub use operation::{OperationType, PatchOperation};
pub use pointer::parse_pointer;
