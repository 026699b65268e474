//! In-memory SCIM 2.0 User store.
//!
//! Holds user records for an identity-provisioning endpoint: assigns
//! identifiers, applies PATCH operations with SCIM semantics, tracks
//! `created`/`lastModified`/`version` metadata, lists records with a
//! single-clause equality filter and recognises PATCH requests that would
//! change nothing.
//!
//! # Core Components
//!
//! - [`InMemoryUserStore`] - Record store behind a single async `RwLock`
//! - [`ResourceProvider`] - Trait for implementing storage backends
//! - [`ScimOperationHandler`] - Maps transport-neutral requests to SCIM responses
//!
//! # Quick Start
//!
//! ```rust
//! use scim_user_store::{InMemoryUserStore, ResourceProvider};
//! use scim_user_store::patch::PatchOperation;
//! use scim_user_store::resource::PatchOutcome;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryUserStore::new();
//! let attributes = json!({"userName": "bjensen", "active": true})
//!     .as_object()
//!     .cloned()
//!     .unwrap_or_default();
//! let user = store.create(attributes).await?;
//!
//! let outcome = store
//!     .patch(&user.id, &[PatchOperation::replace(Some("active"), json!(true))])
//!     .await?;
//! assert_eq!(outcome, PatchOutcome::NoContent);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod operation_handler;
pub mod patch;
pub mod resource;
pub mod schema;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::{HandlerConfig, ServerConfig, StoreConfig};
pub use error::{ScimError, ScimResult};
pub use filter::{Filter, FilterOperator};
pub use operation_handler::{
    OperationMetadata, ScimOperationHandler, ScimOperationRequest, ScimOperationResponse,
    ScimOperationType,
};
pub use patch::{PatchOpKind, PatchOperation, PatchRequest};
pub use resource::{
    Attributes, ListPage, ListParams, ListQuery, Meta, PatchOutcome, ResourceProvider,
    UserResource,
};
pub use storage::InMemoryUserStore;
