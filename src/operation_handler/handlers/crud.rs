//! CRUD operation handlers
//!
//! Handlers for Create, Get, Replace, Patch and Delete on `/Users`.

use crate::{
    ScimError,
    error::ScimResult,
    operation_handler::core::{
        OperationMetadata, ScimOperationHandler, ScimOperationRequest, ScimOperationResponse,
    },
    patch::PatchRequest,
    resource::{PatchOutcome, ResourceProvider, UserResource, attributes_from_json},
};

/// Handle create operations.
pub async fn handle_create<P: ResourceProvider + Sync>(
    handler: &ScimOperationHandler<P>,
    request: ScimOperationRequest,
    request_id: &str,
) -> ScimResult<ScimOperationResponse> {
    let data = request.data.ok_or_else(|| {
        ScimError::invalid_request("Missing data for create operation".to_string())
    })?;
    let attributes = attributes_from_json(data)?;

    let resource = handler
        .provider
        .create(attributes)
        .await
        .map_err(Into::<ScimError>::into)?;

    Ok(resource_response(handler, &resource, 201, request_id))
}

/// Handle get operations.
pub async fn handle_get<P: ResourceProvider + Sync>(
    handler: &ScimOperationHandler<P>,
    request: ScimOperationRequest,
    request_id: &str,
) -> ScimResult<ScimOperationResponse> {
    let resource_id = required_id(&request, "get")?;

    let resource = handler
        .provider
        .get(resource_id)
        .await
        .map_err(Into::<ScimError>::into)?;

    Ok(resource_response(handler, &resource, 200, request_id))
}

/// Handle replace operations.
pub async fn handle_replace<P: ResourceProvider + Sync>(
    handler: &ScimOperationHandler<P>,
    request: ScimOperationRequest,
    request_id: &str,
) -> ScimResult<ScimOperationResponse> {
    let resource_id = required_id(&request, "replace")?.to_string();
    let data = request.data.ok_or_else(|| {
        ScimError::invalid_request("Missing data for replace operation".to_string())
    })?;
    let attributes = attributes_from_json(data)?;

    let resource = handler
        .provider
        .replace(&resource_id, attributes)
        .await
        .map_err(Into::<ScimError>::into)?;

    Ok(resource_response(handler, &resource, 200, request_id))
}

/// Handle patch operations.
///
/// A patch that changes nothing answers 204 without a body.
pub async fn handle_patch<P: ResourceProvider + Sync>(
    handler: &ScimOperationHandler<P>,
    request: ScimOperationRequest,
    request_id: &str,
) -> ScimResult<ScimOperationResponse> {
    let resource_id = required_id(&request, "patch")?.to_string();
    let data = request.data.ok_or_else(|| {
        ScimError::invalid_request("Missing data for patch operation".to_string())
    })?;
    let patch = PatchRequest::from_json(data)?;

    let outcome = handler
        .provider
        .patch(&resource_id, &patch.operations)
        .await
        .map_err(Into::<ScimError>::into)?;

    match outcome {
        PatchOutcome::Modified(resource) => {
            Ok(resource_response(handler, &resource, 200, request_id))
        }
        PatchOutcome::NoContent => Ok(ScimOperationResponse {
            status: 204,
            body: None,
            metadata: OperationMetadata {
                resource_id: Some(resource_id),
                ..OperationMetadata::for_request(request_id)
            },
        }),
    }
}

/// Handle delete operations.
pub async fn handle_delete<P: ResourceProvider + Sync>(
    handler: &ScimOperationHandler<P>,
    request: ScimOperationRequest,
    request_id: &str,
) -> ScimResult<ScimOperationResponse> {
    let resource_id = required_id(&request, "delete")?;

    handler
        .provider
        .delete(resource_id)
        .await
        .map_err(Into::<ScimError>::into)?;

    Ok(ScimOperationResponse {
        status: 204,
        body: None,
        metadata: OperationMetadata {
            resource_id: Some(resource_id.to_string()),
            ..OperationMetadata::for_request(request_id)
        },
    })
}

fn required_id<'a>(request: &'a ScimOperationRequest, operation: &str) -> ScimResult<&'a str> {
    request
        .resource_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            ScimError::invalid_request(format!("Missing resource_id for {} operation", operation))
        })
}

fn resource_response<P: ResourceProvider + Sync>(
    handler: &ScimOperationHandler<P>,
    resource: &UserResource,
    status: u16,
    request_id: &str,
) -> ScimOperationResponse {
    let location = handler.config.user_location(&resource.id);
    ScimOperationResponse {
        status,
        body: Some(resource.to_json(location.as_deref())),
        metadata: OperationMetadata {
            resource_id: Some(resource.id.clone()),
            resource_count: Some(1),
            etag: resource.meta.as_ref().map(|meta| meta.etag()),
            location,
            ..OperationMetadata::for_request(request_id)
        },
    }
}
