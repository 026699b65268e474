//! SCIM schema URIs and the User resource declaration.
//!
//! The store does not validate attributes against the schema; the
//! declaration exists so clients can discover what the endpoint serves.

pub mod types;

pub use types::{
    AttributeDefinition, AttributeType, Mutability, ResourceType, Returned, Schema, Uniqueness,
};

use serde_json::{Value, json};

/// Core User schema.
pub const SCHEMA_USER: &str = "urn:ietf:params:scim:schemas:core:2.0:User";
/// Schema of the Schema resource.
pub const SCHEMA_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:Schema";
/// Schema of the ResourceType resource.
pub const SCHEMA_RESOURCE_TYPE: &str = "urn:ietf:params:scim:schemas:core:2.0:ResourceType";
/// List response message.
pub const SCHEMA_LIST_RESPONSE: &str = "urn:ietf:params:scim:api:messages:2.0:ListResponse";
/// PATCH request message.
pub const SCHEMA_PATCH_OP: &str = "urn:ietf:params:scim:api:messages:2.0:PatchOp";
/// Error response message.
pub const SCHEMA_ERROR: &str = "urn:ietf:params:scim:api:messages:2.0:Error";

/// The User schema served at `/Schemas`.
pub fn user_schema() -> Schema {
    Schema {
        id: SCHEMA_USER.to_string(),
        name: "User".to_string(),
        description: "User Account".to_string(),
        attributes: vec![
            AttributeDefinition::string("userName")
                .required()
                .with_uniqueness(Uniqueness::Server),
            AttributeDefinition::string("externalId")
                .with_description(
                    "A String that is an identifier for the resource as defined by the provisioning client.",
                )
                .with_uniqueness(Uniqueness::Server),
            AttributeDefinition::string("nickName"),
            AttributeDefinition::boolean("active")
                .with_description("A boolean denoting that the user is either active or disabled."),
        ],
    }
}

/// The User resource type served at `/ResourceTypes`.
pub fn user_resource_type() -> ResourceType {
    ResourceType {
        id: "User".to_string(),
        name: "User".to_string(),
        endpoint: "/Users".to_string(),
        description: "User Account".to_string(),
        schema: SCHEMA_USER.to_string(),
    }
}

/// Wire form of a schema, with its `schemas` and `meta` attributes.
pub fn schema_to_json(schema: &Schema) -> Value {
    let mut body = json!(schema);
    if let Some(obj) = body.as_object_mut() {
        obj.insert("schemas".to_string(), json!([SCHEMA_SCHEMA]));
        obj.insert(
            "meta".to_string(),
            json!({"resourceType": "Schema", "location": format!("/Schemas/{}", schema.id)}),
        );
    }
    body
}

/// Wire form of a resource type, with its `schemas` and `meta` attributes.
pub fn resource_type_to_json(resource_type: &ResourceType) -> Value {
    let mut body = json!(resource_type);
    if let Some(obj) = body.as_object_mut() {
        obj.insert("schemas".to_string(), json!([SCHEMA_RESOURCE_TYPE]));
        obj.insert(
            "meta".to_string(),
            json!({
                "resourceType": "ResourceType",
                "location": format!("/ResourceTypes/{}", resource_type.id)
            }),
        );
    }
    body
}
