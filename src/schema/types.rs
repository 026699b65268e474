//! Schema and resource type declarations.
//!
//! These types describe the User resource to clients through the discovery
//! endpoints (RFC 7643 section 7 and 6). They carry no validation logic.

use serde::{Deserialize, Serialize};

/// A SCIM schema definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema URI
    pub id: String,
    pub name: String,
    pub description: String,
    pub attributes: Vec<AttributeDefinition>,
}

/// Definition of a top-level attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: AttributeType,
    pub multi_valued: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    pub case_exact: bool,
    pub mutability: Mutability,
    pub returned: Returned,
    pub uniqueness: Uniqueness,
}

impl AttributeDefinition {
    /// Optional, single-valued, read-write string attribute.
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: AttributeType::String,
            multi_valued: false,
            description: None,
            required: false,
            case_exact: false,
            mutability: Mutability::ReadWrite,
            returned: Returned::Default,
            uniqueness: Uniqueness::None,
        }
    }

    /// Optional, single-valued, read-write boolean attribute.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            data_type: AttributeType::Boolean,
            ..Self::string(name)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_uniqueness(mut self, uniqueness: Uniqueness) -> Self {
        self.uniqueness = uniqueness;
        self
    }
}

/// Attribute data types used by the User schema.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AttributeType {
    String,
    Boolean,
}

/// Whether and how an attribute can be modified; every User attribute is
/// read-write.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Mutability {
    ReadWrite,
}

/// When an attribute is returned in responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Returned {
    Default,
}

/// Scope of uniqueness for attribute values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Uniqueness {
    None,
    Server,
}

/// A resource type served by an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceType {
    pub id: String,
    pub name: String,
    pub endpoint: String,
    pub description: String,
    /// URI of the core schema
    pub schema: String,
}
