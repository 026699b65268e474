//! Framework-agnostic SCIM operation handler.
//!
//! Turns transport-neutral requests into store calls and SCIM wire bodies.
//! A transport (HTTP server, test harness) only has to copy
//! [`ScimOperationResponse::status`] and [`ScimOperationResponse::body`] to
//! its response.
//!
//! # Key Types
//!
//! - [`ScimOperationHandler`] - Dispatches requests to the resource provider
//! - [`ScimOperationRequest`] - Structured request wrapper
//! - [`ScimOperationResponse`] - Status, body and operation metadata
//!
//! # Examples
//!
//! ```rust
//! use scim_user_store::operation_handler::{ScimOperationHandler, ScimOperationRequest};
//! use scim_user_store::storage::InMemoryUserStore;
//! use serde_json::json;
//!
//! # async fn example() {
//! let handler = ScimOperationHandler::new(InMemoryUserStore::new());
//!
//! let request = ScimOperationRequest::create(json!({"userName": "bjensen"}));
//! let response = handler.handle_operation(request).await;
//! assert_eq!(response.status, 201);
//! # }
//! ```

mod builders;
mod core;
mod errors;
mod handlers;

pub use core::{
    OperationMetadata, ScimOperationHandler, ScimOperationRequest, ScimOperationResponse,
    ScimOperationType,
};

pub use errors::{create_error_response, error_body};
