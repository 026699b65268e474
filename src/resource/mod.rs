//! User resource model.
//!
//! A user record is an identifier, a mapping of client attributes and
//! structured metadata. Callers never see stored records directly; every
//! operation hands out a [`UserResource`] snapshot.

pub mod list;
pub mod meta;
pub mod provider;
pub mod user;

/// Attribute name to JSON value mapping of a user record.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

pub use list::{ListPage, ListParams, ListQuery};
pub use meta::Meta;
pub use provider::{PatchOutcome, ResourceProvider};
pub use user::{UserResource, attributes_from_json, external_id};
