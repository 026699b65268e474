//! Query operation handlers
//!
//! Handles `GET /Users` with paging and a single-clause filter.

use crate::{
    ScimError,
    error::ScimResult,
    operation_handler::core::{
        OperationMetadata, ScimOperationHandler, ScimOperationRequest, ScimOperationResponse,
    },
    resource::{ListQuery, ResourceProvider},
};

/// Handle list operations.
pub async fn handle_list<P: ResourceProvider + Sync>(
    handler: &ScimOperationHandler<P>,
    request: ScimOperationRequest,
    request_id: &str,
) -> ScimResult<ScimOperationResponse> {
    let query = ListQuery::from_query_string(
        request.query.as_deref().unwrap_or_default(),
        handler.config.default_page_size,
    )?;

    let page = handler
        .provider
        .get_all(&query.params, query.filter.as_deref())
        .await
        .map_err(Into::<ScimError>::into)?;

    Ok(ScimOperationResponse {
        status: 200,
        body: Some(page.to_json(query.params.start_index)),
        metadata: OperationMetadata {
            resource_count: Some(page.resources.len()),
            total_results: Some(page.total_results),
            ..OperationMetadata::for_request(request_id)
        },
    })
}
