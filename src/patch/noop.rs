//! Detecting PATCH operations that would leave a record unchanged.
//!
//! A request whose operations are all no-ops is answered with an empty
//! response and does not touch the record's metadata. An object value
//! counts as a no-op when any one of its keys already holds the same value.

use super::{PatchOpKind, PatchOperation};
use crate::resource::Attributes;
use serde_json::Value;

/// Whether every operation is a no-op against `current`.
///
/// An empty operation list is a no-op.
pub fn is_noop_request(current: Option<&Attributes>, operations: &[PatchOperation]) -> bool {
    operations.iter().all(|op| is_noop(current, op))
}

/// Whether a single operation is a no-op against `current`.
///
/// `current` is `None` when the record does not exist; only `remove` is a
/// no-op then.
pub fn is_noop(current: Option<&Attributes>, operation: &PatchOperation) -> bool {
    let Some(attributes) = current else {
        return operation.op == PatchOpKind::Remove;
    };

    let key = operation.target().unwrap_or("");
    if attributes.get(key) == Some(operation.comparison_value()) {
        return true;
    }

    if operation.op == PatchOpKind::Remove && !attributes.contains_key(key) {
        return true;
    }

    match &operation.value {
        Value::Object(fields) => any_field_matches(attributes, fields),
        Value::Array(items) => {
            let objects: Option<Vec<&Attributes>> = items.iter().map(Value::as_object).collect();
            objects.is_some_and(|objects| {
                objects
                    .into_iter()
                    .any(|fields| any_field_matches(attributes, fields))
            })
        }
        _ => false,
    }
}

// Inside an object value a missing attribute compares as null.
fn any_field_matches(attributes: &Attributes, fields: &Attributes) -> bool {
    fields
        .iter()
        .any(|(key, value)| attributes.get(key).unwrap_or(&Value::Null) == value)
}
