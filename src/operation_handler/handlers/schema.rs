//! Schema operation handlers
//!
//! Serve the User schema and resource type declarations as ListResponses.

use crate::{
    error::ScimResult,
    operation_handler::core::{OperationMetadata, ScimOperationHandler, ScimOperationResponse},
    resource::ResourceProvider,
    schema::{
        SCHEMA_LIST_RESPONSE, resource_type_to_json, schema_to_json, user_resource_type,
        user_schema,
    },
};
use serde_json::{Value, json};

/// Handle get schemas operations.
pub fn handle_get_schemas<P: ResourceProvider + Sync>(
    _handler: &ScimOperationHandler<P>,
    request_id: &str,
) -> ScimResult<ScimOperationResponse> {
    Ok(list_response(vec![schema_to_json(&user_schema())], request_id))
}

/// Handle get resource types operations.
pub fn handle_get_resource_types<P: ResourceProvider + Sync>(
    _handler: &ScimOperationHandler<P>,
    request_id: &str,
) -> ScimResult<ScimOperationResponse> {
    Ok(list_response(
        vec![resource_type_to_json(&user_resource_type())],
        request_id,
    ))
}

fn list_response(resources: Vec<Value>, request_id: &str) -> ScimOperationResponse {
    let count = resources.len();
    ScimOperationResponse {
        status: 200,
        body: Some(json!({
            "schemas": [SCHEMA_LIST_RESPONSE],
            "totalResults": count,
            "itemsPerPage": count,
            "startIndex": 1,
            "Resources": resources,
        })),
        metadata: OperationMetadata {
            resource_count: Some(count),
            total_results: Some(count),
            ..OperationMetadata::for_request(request_id)
        },
    }
}
