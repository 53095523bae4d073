//! Projection of typed values into JSON trees.
//!
//! Only what the value's `Serialize` implementation exposes survives the
//! projection: skipped fields, renamed members and flattened structs all
//! appear exactly as they would on the wire.

use serde::Serialize;
use serde_json::Value;

use crate::error::{DiffError, DiffResult};
use crate::settings::{NullValueHandling, ProjectionSettings};

/// Project `value` into a JSON tree according to `settings`.
///
/// Fails if the value cannot be serialized or if the tree nests deeper than
/// `settings.max_depth`.
///
/// JSON has no representation for non-finite floats, so `NaN` and the
/// infinities project to `null`. A patch that carries such a change cannot
/// be applied back onto the typed value: the `null` does not deserialize
/// into a float field.
pub fn project<T>(value: &T, settings: &ProjectionSettings) -> DiffResult<Value>
where
    T: Serialize + ?Sized,
{
    let mut tree = serde_json::to_value(value)?;
    check_depth(&tree, settings.max_depth)?;
    if settings.null_value_handling == NullValueHandling::Ignore {
        strip_null_members(&mut tree);
    }
    Ok(tree)
}

fn check_depth(tree: &Value, limit: usize) -> DiffResult<()> {
    let mut pending = vec![(tree, 1usize)];
    while let Some((node, depth)) = pending.pop() {
        if depth > limit {
            return Err(DiffError::DepthLimitExceeded { limit });
        }
        match node {
            Value::Object(map) => pending.extend(map.values().map(|v| (v, depth + 1))),
            Value::Array(items) => pending.extend(items.iter().map(|v| (v, depth + 1))),
            _ => {}
        }
    }
    Ok(())
}

/// Remove `null` members from every object in the tree. Array elements are
/// kept as they are.
fn strip_null_members(tree: &mut Value) {
    match tree {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_null_members);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_null_members),
        _ => {}
    }
}
