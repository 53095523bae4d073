//! Applying operations to a JSON value.
//!
//! Operations are converted to their `json-patch` form and applied with
//! [`json_patch::patch`]. Objects are addressed by member name, arrays by
//! decimal index (`-` means one past the end for `add`). `add` on an object
//! inserts or overwrites; `remove` and `replace` require the target to exist.

use serde_json::Value;
use tracing::trace;

use crate::error::PatchResult;
use crate::operation::PatchOperation;

/// Apply a single operation to `doc` in place.
///
/// On error `doc` is left unchanged.
pub fn apply_operation(doc: &mut Value, operation: &PatchOperation) -> PatchResult<()> {
    let converted = operation.to_json_patch()?;
    trace!(op = %operation.op, path = %operation.path, "applying operation");
    json_patch::patch(doc, std::slice::from_ref(&converted))?;
    Ok(())
}
