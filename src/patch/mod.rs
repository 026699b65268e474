//! SCIM PATCH operations.
//!
//! A PATCH request carries an ordered list of `add`, `replace` and `remove`
//! operations (RFC 7644 section 3.5.2). Paths are flat attribute names: the
//! whole path string is the key in the record's attribute mapping, so
//! extension URNs such as `urn:ietf:params:scim:schemas:extension:enterprise:2.0:User`
//! are addressed as-is.
//!
//! ```rust
//! use scim_user_store::patch::{PatchOpKind, PatchRequest};
//! use serde_json::json;
//!
//! let request: PatchRequest = serde_json::from_value(json!({
//!     "schemas": ["urn:ietf:params:scim:api:messages:2.0:PatchOp"],
//!     "Operations": [{"op": "Replace", "path": "active", "value": false}]
//! })).unwrap();
//! assert_eq!(request.operations[0].op, PatchOpKind::Replace);
//! ```

pub mod apply;
pub mod noop;

pub use apply::{apply_operation, apply_operations};
pub use noop::{is_noop, is_noop_request};

use crate::error::ScimError;
use crate::schema::SCHEMA_PATCH_OP;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

static NULL: Value = Value::Null;

/// Kind of a PATCH operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOpKind {
    Add,
    Replace,
    Remove,
}

impl PatchOpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Replace => "replace",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for PatchOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatchOpKind {
    type Err = ScimError;

    // Identity providers send `Add`, `add` and `ADD` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "replace" => Ok(Self::Replace),
            "remove" => Ok(Self::Remove),
            other => Err(ScimError::malformed_operation(format!(
                "unknown patch op '{}'",
                other
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for PatchOpKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A single PATCH operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: PatchOpKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,
}

impl PatchOperation {
    pub fn new(op: PatchOpKind, path: Option<&str>, value: Value) -> Self {
        Self {
            op,
            path: path.map(str::to_string),
            value,
        }
    }

    pub fn add(path: Option<&str>, value: Value) -> Self {
        Self::new(PatchOpKind::Add, path, value)
    }

    pub fn replace(path: Option<&str>, value: Value) -> Self {
        Self::new(PatchOpKind::Replace, path, value)
    }

    pub fn remove(path: &str) -> Self {
        Self::new(PatchOpKind::Remove, Some(path), Value::Null)
    }

    /// Attribute the operation targets; an empty path counts as absent.
    pub fn target(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }

    /// Value used when comparing against stored attributes; `remove` carries none.
    pub fn comparison_value(&self) -> &Value {
        match self.op {
            PatchOpKind::Remove => &NULL,
            _ => &self.value,
        }
    }
}

/// Body of a SCIM PATCH request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchRequest {
    #[serde(default)]
    pub schemas: Vec<String>,
    #[serde(rename = "Operations", alias = "operations")]
    pub operations: Vec<PatchOperation>,
}

impl PatchRequest {
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        Self {
            schemas: vec![SCHEMA_PATCH_OP.to_string()],
            operations,
        }
    }

    /// Decode a request body.
    pub fn from_json(body: Value) -> Result<Self, ScimError> {
        serde_json::from_value(body).map_err(|e| {
            ScimError::invalid_request(format!("invalid PATCH request body: {}", e))
        })
    }
}
