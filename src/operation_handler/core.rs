//! Core operation handler infrastructure
//!
//! This module contains the request and response types and the dispatcher
//! that routes each request to its operation handler.

use crate::config::HandlerConfig;
use crate::resource::ResourceProvider;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Framework-agnostic operation handler for SCIM User operations
pub struct ScimOperationHandler<P: ResourceProvider> {
    pub(super) provider: P,
    pub(super) config: HandlerConfig,
}

/// Structured request for SCIM operations
#[derive(Debug, Clone, PartialEq)]
pub struct ScimOperationRequest {
    /// The type of operation to perform
    pub operation: ScimOperationType,
    /// Resource ID for operations that target a specific resource
    pub resource_id: Option<String>,
    /// Decoded request body for create, replace and patch
    pub data: Option<Value>,
    /// Raw URL query string for list operations
    pub query: Option<String>,
    /// Request ID for tracing and correlation
    pub request_id: Option<String>,
}

/// Types of SCIM operations supported by the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScimOperationType {
    /// `POST /Users`
    Create,
    /// `GET /Users/{id}`
    Get,
    /// `PUT /Users/{id}`
    Replace,
    /// `PATCH /Users/{id}`
    Patch,
    /// `DELETE /Users/{id}`
    Delete,
    /// `GET /Users`
    List,
    /// `GET /Schemas`
    GetSchemas,
    /// `GET /ResourceTypes`
    GetResourceTypes,
}

impl ScimOperationType {
    /// Whether requests of this type carry a body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Create | Self::Replace | Self::Patch)
    }
}

/// Structured response from SCIM operations
#[derive(Debug, Clone, PartialEq)]
pub struct ScimOperationResponse {
    /// HTTP status the transport should answer with
    pub status: u16,
    /// SCIM JSON body; `None` for 204 responses
    pub body: Option<Value>,
    /// Additional metadata about the operation
    pub metadata: OperationMetadata,
}

impl ScimOperationResponse {
    /// Whether the operation succeeded.
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

/// Metadata about a SCIM operation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperationMetadata {
    /// Resource ID if applicable
    pub resource_id: Option<String>,
    /// Number of resources returned (for list operations)
    pub resource_count: Option<usize>,
    /// Total number of resources available (for list operations)
    pub total_results: Option<usize>,
    /// Request ID for tracing
    pub request_id: String,
    /// Weak ETag of the returned resource
    pub etag: Option<String>,
    /// `Location` header value for created or returned resources
    pub location: Option<String>,
    /// Machine-readable error code for failed operations
    pub error_code: Option<String>,
}

impl OperationMetadata {
    pub(super) fn for_request(request_id: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
            ..Self::default()
        }
    }
}

impl<P: ResourceProvider + Sync> ScimOperationHandler<P> {
    /// Create a handler with default settings.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, HandlerConfig::default())
    }

    /// Create a handler with the given settings.
    pub fn with_config(provider: P, config: HandlerConfig) -> Self {
        Self { provider, config }
    }

    /// The underlying resource provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The handler's settings.
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Handle a structured SCIM operation request.
    ///
    /// Never fails: errors become SCIM error responses.
    pub async fn handle_operation(&self, request: ScimOperationRequest) -> ScimOperationResponse {
        let request_id = request
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        info!(
            "SCIM operation handler processing {:?} for User{} (request: '{}')",
            request.operation,
            request
                .resource_id
                .as_deref()
                .map(|id| format!(" '{}'", id))
                .unwrap_or_default(),
            request_id
        );
        if request.operation.has_body() {
            if let Some(data) = &request.data {
                debug!(
                    "Request body (request: '{}'):\n{}",
                    request_id,
                    serde_json::to_string_pretty(data)
                        .unwrap_or_else(|_| "invalid json".to_string())
                );
            }
        }

        let result = match request.operation {
            ScimOperationType::Create => {
                super::handlers::crud::handle_create(self, request, &request_id).await
            }
            ScimOperationType::Get => {
                super::handlers::crud::handle_get(self, request, &request_id).await
            }
            ScimOperationType::Replace => {
                super::handlers::crud::handle_replace(self, request, &request_id).await
            }
            ScimOperationType::Patch => {
                super::handlers::crud::handle_patch(self, request, &request_id).await
            }
            ScimOperationType::Delete => {
                super::handlers::crud::handle_delete(self, request, &request_id).await
            }
            ScimOperationType::List => {
                super::handlers::query::handle_list(self, request, &request_id).await
            }
            ScimOperationType::GetSchemas => {
                super::handlers::schema::handle_get_schemas(self, &request_id)
            }
            ScimOperationType::GetResourceTypes => {
                super::handlers::schema::handle_get_resource_types(self, &request_id)
            }
        };

        match &result {
            Ok(response) => {
                debug!(
                    "SCIM operation handler completed with status {} (request: '{}')",
                    response.status, request_id
                );
            }
            Err(e) => {
                warn!(
                    "SCIM operation handler failed: {} (request: '{}')",
                    e, request_id
                );
            }
        }

        result.unwrap_or_else(|e| super::errors::create_error_response(e, request_id))
    }
}
