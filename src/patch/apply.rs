//! Applying PATCH operations to an attribute mapping.

use super::{PatchOpKind, PatchOperation};
use crate::error::{ScimError, ScimResult};
use crate::resource::Attributes;
use crate::resource::user::json_type_name;
use serde_json::Value;

/// Apply operations in order.
///
/// Stops at the first failing operation; callers that need atomicity apply
/// to a copy and keep it only on success.
pub fn apply_operations(attributes: &mut Attributes, operations: &[PatchOperation]) -> ScimResult<()> {
    for operation in operations {
        apply_operation(attributes, operation)?;
    }
    Ok(())
}

/// Apply one operation.
pub fn apply_operation(attributes: &mut Attributes, operation: &PatchOperation) -> ScimResult<()> {
    match (operation.op, operation.target()) {
        (PatchOpKind::Add | PatchOpKind::Replace, Some(path)) => {
            attributes.insert(path.to_string(), operation.value.clone());
            Ok(())
        }
        (PatchOpKind::Add, None) => {
            for (key, value) in object_value(operation)? {
                add_value(attributes, key, value);
            }
            Ok(())
        }
        (PatchOpKind::Replace, None) => {
            for (key, value) in object_value(operation)? {
                attributes.insert(key.clone(), value.clone());
            }
            Ok(())
        }
        // the key is kept with a null value
        (PatchOpKind::Remove, Some(path)) => {
            attributes.insert(path.to_string(), Value::Null);
            Ok(())
        }
        (PatchOpKind::Remove, None) => Err(ScimError::malformed_operation(
            "remove operation requires a path",
        )),
    }
}

fn object_value(operation: &PatchOperation) -> ScimResult<&Attributes> {
    operation.value.as_object().ok_or_else(|| {
        ScimError::malformed_operation(format!(
            "{} operation without a path requires an object value, got {}",
            operation.op,
            json_type_name(&operation.value)
        ))
    })
}

// Arrays grow instead of being overwritten; an array value contributes its elements.
fn add_value(attributes: &mut Attributes, key: &str, value: &Value) {
    match attributes.get_mut(key) {
        Some(Value::Array(existing)) => match value {
            Value::Array(items) => existing.extend(items.iter().cloned()),
            single => existing.push(single.clone()),
        },
        _ => {
            attributes.insert(key.to_string(), value.clone());
        }
    }
}
