//! Common test utilities for the user store.

use scim_user_store::config::{IdStrategy, ReplaceMetadataPolicy, StoreConfig};
use scim_user_store::{Attributes, InMemoryUserStore, ResourceProvider, UserResource};
use serde_json::Value;


/// Turn a JSON object literal into an attribute mapping.
pub fn attrs(value: Value) -> Attributes {
    value
        .as_object()
        .cloned()
        .expect("attribute literal must be a JSON object")
}

/// Store whose identifiers are `0000`, `0001`, ... in creation order.
pub fn sequential_store() -> InMemoryUserStore {
    store_with(StoreConfig::default().with_id_strategy(IdStrategy::Sequential))
}

/// Sequential store using the clearing Replace policy.
pub fn clearing_store() -> InMemoryUserStore {
    store_with(
        StoreConfig::default()
            .with_id_strategy(IdStrategy::Sequential)
            .with_replace_metadata(ReplaceMetadataPolicy::Clear),
    )
}

pub fn store_with(config: StoreConfig) -> InMemoryUserStore {
    InMemoryUserStore::with_config(config).expect("test store config must be valid")
}

/// Create one user per name, in order.
pub async fn seed_users(store: &InMemoryUserStore, user_names: &[&str]) -> Vec<UserResource> {
    let mut created = Vec::with_capacity(user_names.len());
    for name in user_names {
        let user = store
            .create(builders::UserBuilder::new(name).attributes())
            .await
            .expect("create should succeed");
        created.push(user);
    }
    created
}

/// Route store logs to the test output when `RUST_LOG` is set.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
