//! The User resource view returned by every store operation.

use crate::error::{ScimError, ScimResult};
use crate::resource::Attributes;
use crate::resource::meta::Meta;
use crate::schema::SCHEMA_USER;
use serde_json::{Value, json};

/// Attributes the server owns; they are never stored as client attributes.
const SERVER_OWNED_ATTRIBUTES: [&str; 3] = ["schemas", "id", "meta"];

/// Snapshot of a user record as seen by a caller.
#[derive(Debug, Clone, PartialEq)]
pub struct UserResource {
    /// Store-assigned identifier.
    pub id: String,
    /// `externalId` when the attributes carry a textual one.
    pub external_id: Option<String>,
    /// Client attributes (full body minus id and metadata).
    pub attributes: Attributes,
    /// Metadata; absent in list entries and in Replace responses under the
    /// clear policy.
    pub meta: Option<Meta>,
}

impl UserResource {
    /// Build a view, extracting the external identifier from the attributes.
    pub fn new(id: impl Into<String>, attributes: Attributes, meta: Option<Meta>) -> Self {
        Self {
            id: id.into(),
            external_id: external_id(&attributes),
            attributes,
            meta,
        }
    }

    /// Version tag, when metadata is present.
    pub fn version(&self) -> Option<&str> {
        self.meta.as_ref().map(|m| m.version.as_str())
    }

    /// SCIM JSON representation.
    ///
    /// `location` becomes `meta.location` when metadata is present.
    pub fn to_json(&self, location: Option<&str>) -> Value {
        let mut body = Attributes::new();
        body.insert("schemas".to_string(), json!([SCHEMA_USER]));
        body.insert("id".to_string(), json!(self.id));
        for (key, value) in &self.attributes {
            if !SERVER_OWNED_ATTRIBUTES.contains(&key.as_str()) {
                body.insert(key.clone(), value.clone());
            }
        }
        match &self.external_id {
            Some(external_id) => {
                body.insert("externalId".to_string(), json!(external_id));
            }
            None => {
                // a non-textual externalId is not echoed back
                body.remove("externalId");
            }
        }
        if let Some(meta) = &self.meta {
            body.insert("meta".to_string(), meta.to_json(location));
        }
        Value::Object(body)
    }
}

/// The textual `externalId` of an attribute mapping, if any.
pub fn external_id(attributes: &Attributes) -> Option<String> {
    attributes
        .get("externalId")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Turn a decoded SCIM request body into store attributes.
///
/// The body must be a JSON object; `schemas`, `id` and `meta` are dropped.
pub fn attributes_from_json(body: Value) -> ScimResult<Attributes> {
    match body {
        Value::Object(mut attributes) => {
            for key in SERVER_OWNED_ATTRIBUTES {
                attributes.remove(key);
            }
            Ok(attributes)
        }
        other => Err(ScimError::invalid_request(format!(
            "resource body must be a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
