//! Storage for user records.
//!
//! [`InMemoryUserStore`] keeps every record in memory behind a single
//! `tokio::sync::RwLock`. Reads share the lock; each mutation performs its
//! existence check and its write under one exclusive acquisition, so
//! concurrent requests never observe half-applied changes.
//!
//! Identifiers come from an [`IdGenerator`]. The store treats a generated
//! value only as a starting candidate and probes forward to the next free
//! identifier, so creation never overwrites an existing record.
//!
//! # Example Usage
//!
//! ```rust
//! use scim_user_store::resource::ResourceProvider;
//! use scim_user_store::storage::InMemoryUserStore;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryUserStore::new();
//! let attributes = json!({"userName": "bjensen"}).as_object().cloned().unwrap_or_default();
//!
//! let created = store.create(attributes).await?;
//! let fetched = store.get(&created.id).await?;
//! assert_eq!(fetched.attributes["userName"], "bjensen");
//!
//! store.delete(&created.id).await?;
//! assert!(store.get(&created.id).await.is_err());
//! # Ok(())
//! # }
//! ```

pub mod id;
pub mod in_memory;

pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator, format_id, generate_id};
pub use in_memory::{InMemoryUserStore, StoreStats};
