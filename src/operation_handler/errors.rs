//! Error handling utilities for operation handlers
//!
//! Converts [`ScimError`] values into RFC 7644 section 3.12 error responses.

use crate::{
    ScimError,
    operation_handler::core::{OperationMetadata, ScimOperationResponse},
    schema::SCHEMA_ERROR,
};
use serde_json::{Value, json};

/// The SCIM error body for an error.
pub fn error_body(error: &ScimError) -> Value {
    let mut body = json!({
        "schemas": [SCHEMA_ERROR],
        "status": error.status_code().to_string(),
        "detail": error.to_string(),
    });
    if let (Some(scim_type), Some(obj)) = (error.scim_type(), body.as_object_mut()) {
        obj.insert("scimType".to_string(), json!(scim_type));
    }
    body
}

/// Create an error response from a ScimError.
pub fn create_error_response(error: ScimError, request_id: String) -> ScimOperationResponse {
    let resource_id = match &error {
        ScimError::ResourceNotFound { id, .. } => Some(id.clone()),
        _ => None,
    };

    ScimOperationResponse {
        status: error.status_code(),
        body: Some(error_body(&error)),
        metadata: OperationMetadata {
            resource_id,
            request_id,
            error_code: Some(error.error_code().to_string()),
            ..OperationMetadata::default()
        },
    }
}
