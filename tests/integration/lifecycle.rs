//! Create, Get, Replace and Delete against the in-memory store.

use crate::common::builders::UserBuilder;
use crate::common::{attrs, clearing_store, sequential_store, store_with};
use scim_user_store::config::StoreConfig;
use scim_user_store::{InMemoryUserStore, ResourceProvider, ScimError};
use serde_json::json;
use std::collections::HashSet;

#[tokio::test]
async fn test_create_then_get_returns_attributes() {
    crate::common::init_logging();
    let store = sequential_store();
    let created = store
        .create(UserBuilder::new_full("bjensen").attributes())
        .await
        .unwrap();

    let fetched = store.get(&created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.attributes, created.attributes);
    assert_eq!(fetched.attributes["userName"], "bjensen");
    assert_eq!(fetched.external_id.as_deref(), Some("701984"));
    assert_eq!(fetched.meta, created.meta);
}

#[tokio::test]
async fn test_create_assigns_unique_ids_across_whole_space() {
    let store = InMemoryUserStore::new();
    let mut ids = HashSet::new();
    for i in 0..9999 {
        let user = store
            .create(attrs(json!({"userName": format!("user{}", i)})))
            .await
            .unwrap();
        assert_eq!(user.id.len(), 4);
        assert!(ids.insert(user.id), "identifier issued twice");
    }
    assert_eq!(store.len().await, 9999);
}

#[tokio::test]
async fn test_create_fails_when_id_space_full() {
    let store = store_with(StoreConfig::default().with_id_width(2));
    for _ in 0..100 {
        store.create(attrs(json!({}))).await.unwrap();
    }
    let err = store.create(attrs(json!({}))).await.unwrap_err();
    assert!(matches!(
        err,
        ScimError::IdentifierSpaceExhausted { capacity: 100 }
    ));
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let store = sequential_store();
    let user = store.create(UserBuilder::new("gone").attributes()).await.unwrap();

    store.delete(&user.id).await.unwrap();
    let err = store.get(&user.id).await.unwrap_err();
    assert!(err.is_not_found());

    // no tombstone: a second delete fails the same way
    assert!(store.delete(&user.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let store = sequential_store();
    assert!(store.get("0042").await.unwrap_err().is_not_found());
    assert!(
        store
            .replace("0042", attrs(json!({"userName": "x"})))
            .await
            .unwrap_err()
            .is_not_found()
    );
}

#[tokio::test]
async fn test_replace_is_wholesale() {
    let store = sequential_store();
    let user = store
        .create(UserBuilder::new_full("bjensen").attributes())
        .await
        .unwrap();

    let replaced = store
        .replace(&user.id, attrs(json!({"userName": "barbara"})))
        .await
        .unwrap();
    assert_eq!(replaced.attributes.len(), 1);
    assert_eq!(replaced.external_id, None);

    let fetched = store.get(&user.id).await.unwrap();
    assert_eq!(fetched.attributes, attrs(json!({"userName": "barbara"})));
    assert!(fetched.attributes.get("emails").is_none());
}

#[tokio::test]
async fn test_replace_refreshes_metadata_by_default() {
    let store = sequential_store();
    let user = store.create(UserBuilder::new("a").attributes()).await.unwrap();
    let before = user.meta.unwrap();

    let replaced = store
        .replace(&user.id, UserBuilder::new("b").attributes())
        .await
        .unwrap();
    let after = replaced.meta.unwrap();
    assert_eq!(after.created, before.created);
    assert!(after.last_modified >= before.last_modified);
    assert_eq!(after.version, format!("v{}.replace", user.id));
}

#[tokio::test]
async fn test_replace_with_clear_policy_omits_metadata() {
    let store = clearing_store();
    let user = store.create(UserBuilder::new("a").attributes()).await.unwrap();

    let replaced = store
        .replace(&user.id, UserBuilder::new("b").attributes())
        .await
        .unwrap();
    assert!(replaced.meta.is_none());

    let meta = store.get(&user.id).await.unwrap().meta.unwrap();
    assert_eq!(meta.version, format!("v{}", user.id));
    assert_eq!(meta.created, meta.last_modified);
}
