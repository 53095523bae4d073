//! Diff engine for patchgen.
//!
//! Compares two values of the same type by projecting each into a JSON tree
//! and walking the trees side by side, producing a [`PatchDocument`] that turns
//! the first value into the second.
//!
//! # Key Types
//!
//! - [`PatchGenerator`] / [`generate`] / [`generate_with`] -- Entry points
//! - [`ProjectionSettings`] / [`NullValueHandling`] -- How values become trees
//! - [`NodeKind`] -- Tree node classification used for type-change detection
//! - [`diff_trees`] -- The recursive comparison over already projected trees

pub mod error;
pub mod generator;
pub mod kind;
pub mod project;
pub mod settings;
pub mod tree_diff;

pub use error::{DiffError, DiffResult};
pub use generator::{generate, generate_with, PatchGenerator};
pub use kind::NodeKind;
pub use project::project;
pub use settings::{NullValueHandling, ProjectionSettings};
pub use tree_diff::diff_trees;

pub use patchgen_patch::PatchDocument;
