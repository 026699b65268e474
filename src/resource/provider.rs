//! Resource provider trait for the User store.
//!
//! The operation handler talks to storage only through this trait, so a
//! different backend can be plugged in without touching protocol code. The
//! design is async-first; every method returns a `Send` future.

use crate::error::ScimError;
use crate::patch::PatchOperation;
use crate::resource::Attributes;
use crate::resource::list::{ListPage, ListParams};
use crate::resource::user::UserResource;
use std::future::Future;

/// Result of a PATCH request.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOutcome {
    /// The record changed; carries the updated view with metadata.
    Modified(UserResource),
    /// Every operation was a no-op; nothing was written.
    NoContent,
}

impl PatchOutcome {
    /// The updated resource, if the patch modified the record.
    pub fn into_resource(self) -> Option<UserResource> {
        match self {
            Self::Modified(resource) => Some(resource),
            Self::NoContent => None,
        }
    }

    /// Whether the patch was skipped as a no-op.
    pub fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent)
    }
}

/// Storage operations for User resources.
///
/// Missing records are reported as errors that convert into
/// [`ScimError::ResourceNotFound`].
pub trait ResourceProvider {
    type Error: std::error::Error + Into<ScimError> + Send + Sync + 'static;

    /// Store a new record under a freshly allocated identifier.
    fn create(
        &self,
        attributes: Attributes,
    ) -> impl Future<Output = Result<UserResource, Self::Error>> + Send;

    /// Fetch one record with its metadata.
    fn get(&self, id: &str) -> impl Future<Output = Result<UserResource, Self::Error>> + Send;

    /// List records, optionally filtered by a raw (URL-encoded) filter.
    fn get_all(
        &self,
        params: &ListParams,
        raw_filter: Option<&str>,
    ) -> impl Future<Output = Result<ListPage, Self::Error>> + Send;

    /// Apply PATCH operations in order.
    fn patch(
        &self,
        id: &str,
        operations: &[PatchOperation],
    ) -> impl Future<Output = Result<PatchOutcome, Self::Error>> + Send;

    /// Replace the whole attribute mapping of a record.
    fn replace(
        &self,
        id: &str,
        attributes: Attributes,
    ) -> impl Future<Output = Result<UserResource, Self::Error>> + Send;

    /// Remove a record.
    fn delete(&self, id: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
