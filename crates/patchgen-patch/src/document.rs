//! Patch documents: ordered lists of operations.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::PatchResult;
use crate::operation::{OperationType, PatchOperation};

/// An ordered list of patch operations.
///
/// Operations are kept in the order they were appended. Serializes as a plain
/// JSON array, which is the JSON-Patch wire format.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument {
    operations: Vec<PatchOperation>,
}

impl PatchDocument {
    /// Create an empty patch document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an `add` operation.
    pub fn add(&mut self, path: impl Into<String>, value: Value) {
        self.push(PatchOperation::add(path, value));
    }

    /// Append a `remove` operation.
    pub fn remove(&mut self, path: impl Into<String>) {
        self.push(PatchOperation::remove(path));
    }

    /// Append a `replace` operation.
    pub fn replace(&mut self, path: impl Into<String>, value: Value) {
        self.push(PatchOperation::replace(path, value));
    }

    /// Append an already built operation.
    pub fn push(&mut self, operation: PatchOperation) {
        self.operations.push(operation);
    }

    /// The operations in generation order.
    pub fn operations(&self) -> &[PatchOperation] {
        &self.operations
    }

    /// Iterate over the operations in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, PatchOperation> {
        self.operations.iter()
    }

    /// Returns `true` if there are no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Number of `add` operations.
    pub fn additions(&self) -> usize {
        self.count(OperationType::Add)
    }

    /// Number of `remove` operations.
    pub fn removals(&self) -> usize {
        self.count(OperationType::Remove)
    }

    /// Number of `replace` operations.
    pub fn replacements(&self) -> usize {
        self.count(OperationType::Replace)
    }

    fn count(&self, op: OperationType) -> usize {
        self.operations.iter().filter(|o| o.op == op).count()
    }

    /// The paths touched by this document, in generation order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().map(|o| o.path.as_str())
    }

    /// The operation at `path`, if any. Returns the first match.
    pub fn find(&self, path: &str) -> Option<&PatchOperation> {
        self.operations.iter().find(|o| o.path == path)
    }

    /// Validate every operation, e.g. after decoding a document from the wire.
    pub fn validate(&self) -> PatchResult<()> {
        self.operations.iter().try_for_each(PatchOperation::validate)
    }

    /// Convert to a [`json_patch::Patch`], validating every operation.
    pub fn to_json_patch(&self) -> PatchResult<json_patch::Patch> {
        let operations = self
            .operations
            .iter()
            .map(PatchOperation::to_json_patch)
            .collect::<PatchResult<Vec<_>>>()?;
        Ok(json_patch::Patch(operations))
    }

    /// Apply every operation to `doc` in order.
    ///
    /// All-or-nothing: if any operation fails, the ones already applied are
    /// rolled back and `doc` is left as it was.
    pub fn apply(&self, doc: &mut Value) -> PatchResult<()> {
        let patch = self.to_json_patch()?;
        json_patch::patch(doc, &patch.0)?;
        debug!(operations = self.operations.len(), "patch applied");
        Ok(())
    }

    /// Apply this document to a typed value through its JSON representation.
    ///
    /// The value is serialized, patched, and deserialized back into `target`.
    /// On error `target` is left untouched.
    pub fn apply_to<T>(&self, target: &mut T) -> PatchResult<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut doc = serde_json::to_value(&*target)?;
        self.apply(&mut doc)?;
        *target = serde_json::from_value(doc)?;
        Ok(())
    }
}

impl From<Vec<PatchOperation>> for PatchDocument {
    fn from(operations: Vec<PatchOperation>) -> Self {
        Self { operations }
    }
}

impl FromIterator<PatchOperation> for PatchDocument {
    fn from_iter<I: IntoIterator<Item = PatchOperation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PatchDocument {
    type Item = PatchOperation;
    type IntoIter = std::vec::IntoIter<PatchOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}

impl<'a> IntoIterator for &'a PatchDocument {
    type Item = &'a PatchOperation;
    type IntoIter = std::slice::Iter<'a, PatchOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
