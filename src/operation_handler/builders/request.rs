//! Request builder utilities for ScimOperationRequest
//!
//! Convenience constructors for each operation type.

use crate::operation_handler::core::{ScimOperationRequest, ScimOperationType};
use serde_json::Value;

impl ScimOperationRequest {
    fn new(operation: ScimOperationType) -> Self {
        Self {
            operation,
            resource_id: None,
            data: None,
            query: None,
            request_id: None,
        }
    }

    /// Create a new create operation request.
    pub fn create(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::new(ScimOperationType::Create)
        }
    }

    /// Create a new get operation request.
    pub fn get(resource_id: impl Into<String>) -> Self {
        Self {
            resource_id: Some(resource_id.into()),
            ..Self::new(ScimOperationType::Get)
        }
    }

    /// Create a new replace operation request.
    pub fn replace(resource_id: impl Into<String>, data: Value) -> Self {
        Self {
            resource_id: Some(resource_id.into()),
            data: Some(data),
            ..Self::new(ScimOperationType::Replace)
        }
    }

    /// Create a new patch operation request; `data` is the PatchOp body.
    pub fn patch(resource_id: impl Into<String>, data: Value) -> Self {
        Self {
            resource_id: Some(resource_id.into()),
            data: Some(data),
            ..Self::new(ScimOperationType::Patch)
        }
    }

    /// Create a new delete operation request.
    pub fn delete(resource_id: impl Into<String>) -> Self {
        Self {
            resource_id: Some(resource_id.into()),
            ..Self::new(ScimOperationType::Delete)
        }
    }

    /// Create a new list operation request.
    pub fn list() -> Self {
        Self::new(ScimOperationType::List)
    }

    /// Create a new get schemas operation request.
    pub fn get_schemas() -> Self {
        Self::new(ScimOperationType::GetSchemas)
    }

    /// Create a new get resource types operation request.
    pub fn get_resource_types() -> Self {
        Self::new(ScimOperationType::GetResourceTypes)
    }

    /// Set the raw URL query string (`count=10&filter=...`).
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the request ID for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}
