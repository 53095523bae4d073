//! Tree-level diff: compare two projected objects member by member.
//!
//! For each object level the walk emits, in order:
//!
//! 1. `remove` for members only in the original, in the original's order;
//! 2. `add` for members only in the modified tree, in the modified order;
//! 3. for shared members, in the original's order, either a recursive walk
//!    (both sides objects), a `replace` of the whole new value, or nothing.
//!
//! Arrays are compared as opaque values. Any difference inside an array
//! produces a single `replace` of the whole array, which keeps every emitted
//! operation valid when the document is applied in order.
//!
//! Values are compared with `serde_json::Value` equality, which for numbers
//! is numeric rather than textual: `0.0` and `-0.0` are equal, so a sign flip
//! on zero produces no operation.

use patchgen_patch::PatchDocument;
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{DiffError, DiffResult};
use crate::kind::NodeKind;

/// Compare two projected trees. Both roots must be objects.
pub fn diff_trees(original: &Value, modified: &Value) -> DiffResult<PatchDocument> {
    let (original, modified) = match (original, modified) {
        (Value::Object(o), Value::Object(m)) => (o, m),
        (Value::Object(_), other) | (other, _) => {
            return Err(DiffError::UnsupportedRoot {
                kind: NodeKind::of(other),
            })
        }
    };

    let mut patch = PatchDocument::new();
    diff_objects(original, modified, "/", &mut patch);
    Ok(patch)
}

fn diff_objects(
    original: &Map<String, Value>,
    modified: &Map<String, Value>,
    current_path: &str,
    patch: &mut PatchDocument,
) {
    // Members only in the original.
    for name in original.keys() {
        if !modified.contains_key(name) {
            let path = format!("{current_path}{name}");
            trace!(%path, "remove");
            patch.remove(path);
        }
    }

    // Members only in the modified tree.
    for (name, value) in modified {
        if !original.contains_key(name) {
            let path = format!("{current_path}{name}");
            trace!(%path, "add");
            patch.add(path, value.clone());
        }
    }

    // Members in both.
    for (name, old) in original {
        let Some(new) = modified.get(name) else {
            continue;
        };

        if NodeKind::of(old) != NodeKind::of(new) {
            let path = format!("{current_path}{name}");
            trace!(%path, from = %NodeKind::of(old), to = %NodeKind::of(new), "replace on kind change");
            patch.replace(path, new.clone());
        } else if old != new {
            match (old, new) {
                (Value::Object(o), Value::Object(m)) => {
                    diff_objects(o, m, &format!("{current_path}{name}/"), patch);
                }
                _ => {
                    let path = format!("{current_path}{name}");
                    trace!(%path, "replace");
                    patch.replace(path, new.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patchgen_patch::{OperationType, PatchOperation};
    use serde_json::json;

    fn diff(a: Value, b: Value) -> PatchDocument {
        diff_trees(&a, &b).unwrap()
    }

    #[test]
    fn identical_trees_no_changes() {
        let tree = json!({"a": 1, "b": [1, 2], "c": {"d": "x"}});
        assert!(diff(tree.clone(), tree).is_empty());
    }

    #[test]
    fn key_order_is_not_significant() {
        let a = json!({"a": 1, "b": {"x": 1, "y": 2}});
        let b = json!({"b": {"y": 2, "x": 1}, "a": 1});
        assert!(diff(a, b).is_empty());
    }

    #[test]
    fn empty_to_populated_all_additions() {
        let patch = diff(json!({}), json!({"a": 1, "b": "two"}));
        assert_eq!(
            patch.operations(),
            &[
                PatchOperation::add("/a", json!(1)),
                PatchOperation::add("/b", json!("two")),
            ]
        );
    }

    #[test]
    fn populated_to_empty_all_removals() {
        let patch = diff(json!({"a": 1, "b": 2}), json!({}));
        assert_eq!(
            patch.operations(),
            &[PatchOperation::remove("/a"), PatchOperation::remove("/b")]
        );
    }

    #[test]
    fn removals_then_additions_then_replacements() {
        let a = json!({"keep": true, "modify": "old", "gone": 42});
        let b = json!({"modify": "new", "keep": true, "added": [1, 2, 3]});

        let patch = diff(a, b);
        assert_eq!(
            patch.operations(),
            &[
                PatchOperation::remove("/gone"),
                PatchOperation::add("/added", json!([1, 2, 3])),
                PatchOperation::replace("/modify", json!("new")),
            ]
        );
    }

    #[test]
    fn kind_change_replaces_without_recursion() {
        let patch = diff(json!({"v": {"x": 1}}), json!({"v": [1]}));
        assert_eq!(patch.operations(), &[PatchOperation::replace("/v", json!([1]))]);
    }

    #[test]
    fn null_transition_is_a_replace() {
        let patch = diff(json!({"m": "message"}), json!({"m": null}));
        assert_eq!(patch.operations(), &[PatchOperation::replace("/m", Value::Null)]);

        let patch = diff(json!({"m": null}), json!({"m": "message"}));
        assert_eq!(patch.operations(), &[PatchOperation::replace("/m", json!("message"))]);
    }

    #[test]
    fn integer_to_float_is_a_kind_change() {
        let patch = diff(json!({"n": 1}), json!({"n": 1.5}));
        assert_eq!(patch.operations(), &[PatchOperation::replace("/n", json!(1.5))]);
    }

    #[test]
    fn zero_sign_change_is_not_a_difference() {
        assert!(diff(json!({"z": 0.0}), json!({"z": -0.0})).is_empty());
        assert!(diff(json!({"z": {"w": -0.0}}), json!({"z": {"w": 0.0}})).is_empty());
    }

    #[test]
    fn nested_change_emits_only_leaf_path() {
        let a = json!({"NestedClass": {"NestedId": "nested-id", "NestedIntValue": 465}});
        let b = json!({"NestedClass": {"NestedId": "new-nested-id", "NestedIntValue": 465}});

        let patch = diff(a, b);
        assert_eq!(
            patch.operations(),
            &[PatchOperation::replace("/NestedClass/NestedId", json!("new-nested-id"))]
        );
        assert!(patch.find("/NestedClass").is_none());
    }

    #[test]
    fn nested_additions_and_removals_use_full_path() {
        let a = json!({"outer": {"inner": {"old": 1}}});
        let b = json!({"outer": {"inner": {"new": 2}}});

        let patch = diff(a, b);
        assert_eq!(
            patch.operations(),
            &[
                PatchOperation::remove("/outer/inner/old"),
                PatchOperation::add("/outer/inner/new", json!(2)),
            ]
        );
    }

    #[test]
    fn array_change_replaces_whole_array() {
        let patch = diff(json!({"IntList": [1, 2, 3]}), json!({"IntList": [1, 3, 2]}));
        assert_eq!(patch.len(), 1);
        assert_eq!(
            patch.operations()[0],
            PatchOperation::replace("/IntList", json!([1, 3, 2]))
        );
    }

    #[test]
    fn array_of_objects_is_not_walked() {
        let a = json!({"items": [{"id": "1"}, {"id": "2"}]});
        let b = json!({"items": [{"id": "1"}, {"id": "345"}]});

        let patch = diff(a, b);
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.operations()[0].path, "/items");
        assert_eq!(patch.operations()[0].op, OperationType::Replace);
    }

    #[test]
    fn names_are_used_verbatim() {
        let patch = diff(json!({}), json!({"a/b": 1, "c~d": 2}));
        let paths: Vec<_> = patch.paths().collect();
        assert_eq!(paths, vec!["/a/b", "/c~d"]);
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = diff_trees(&json!([1]), &json!({})).unwrap_err();
        assert!(matches!(err, DiffError::UnsupportedRoot { kind: NodeKind::Array }));

        let err = diff_trees(&json!({}), &json!("x")).unwrap_err();
        assert!(matches!(err, DiffError::UnsupportedRoot { kind: NodeKind::String }));
    }
}
