//! GetAll paging and filtering.

use crate::common::{attrs, seed_users, sequential_store};
use scim_user_store::{ListParams, ResourceProvider, ScimError};
use serde_json::json;

fn ids(page: &scim_user_store::ListPage) -> Vec<&str> {
    page.resources.iter().map(|r| r.id.as_str()).collect()
}

#[tokio::test]
async fn test_count_zero_returns_total_only() {
    let store = sequential_store();
    seed_users(&store, &["alice", "bob", "carol"]).await;

    let page = store.get_all(&ListParams::count_only(), None).await.unwrap();
    assert_eq!(page.total_results, 3);
    assert!(page.resources.is_empty());

    // the filter is not even parsed
    let page = store
        .get_all(&ListParams::count_only(), Some("garbage"))
        .await
        .unwrap();
    assert_eq!(page.total_results, 3);
}

#[tokio::test]
async fn test_list_without_filter_omits_metadata() {
    let store = sequential_store();
    seed_users(&store, &["alice", "bob"]).await;

    let page = store.get_all(&ListParams::default(), None).await.unwrap();
    assert_eq!(ids(&page), ["0000", "0001"]);
    assert!(page.resources.iter().all(|r| r.meta.is_none()));
}

#[tokio::test]
async fn test_equality_filter() {
    let store = sequential_store();
    seed_users(&store, &["alice", "bob", "alice2"]).await;

    let page = store
        .get_all(&ListParams::default(), Some("userName%20eq%20%22alice%22"))
        .await
        .unwrap();
    assert_eq!(page.total_results, 3);
    assert_eq!(page.resources.len(), 1);
    assert_eq!(page.resources[0].attributes["userName"], "alice");
}

#[tokio::test]
async fn test_filter_on_external_id() {
    let store = sequential_store();
    store
        .create(attrs(json!({"userName": "a", "externalId": "okta-1"})))
        .await
        .unwrap();
    store
        .create(attrs(json!({"userName": "b", "externalId": "okta-2"})))
        .await
        .unwrap();

    let page = store
        .get_all(&ListParams::default(), Some("externalId+eq+%22okta-2%22"))
        .await
        .unwrap();
    assert_eq!(page.resources.len(), 1);
    assert_eq!(page.resources[0].external_id.as_deref(), Some("okta-2"));
}

#[tokio::test]
async fn test_non_string_values_never_match() {
    let store = sequential_store();
    store.create(attrs(json!({"active": true}))).await.unwrap();
    store.create(attrs(json!({"active": "true"}))).await.unwrap();

    let page = store
        .get_all(&ListParams::default(), Some("active eq \"true\""))
        .await
        .unwrap();
    assert_eq!(ids(&page), ["0001"]);
}

#[tokio::test]
async fn test_pagination_counts_unfiltered_position() {
    let store = sequential_store();
    // matches are the 4th and 5th visited records
    seed_users(&store, &["a", "b", "c", "match", "match"]).await;
    let filter = Some("userName eq \"match\"");

    let page = store.get_all(&ListParams::new(10, 3), filter).await.unwrap();
    // filtered-then-paginated would skip both matches here
    assert_eq!(ids(&page), ["0003", "0004"]);

    let page = store.get_all(&ListParams::new(10, 5), filter).await.unwrap();
    assert_eq!(ids(&page), ["0004"]);

    let page = store.get_all(&ListParams::new(10, 6), filter).await.unwrap();
    assert!(page.resources.is_empty());
    assert_eq!(page.total_results, 5);
}

#[tokio::test]
async fn test_count_does_not_truncate() {
    let store = sequential_store();
    seed_users(&store, &["a", "b", "c"]).await;

    let page = store.get_all(&ListParams::new(1, 1), None).await.unwrap();
    assert_eq!(page.resources.len(), 3);
}

#[tokio::test]
async fn test_invalid_filters_rejected() {
    let store = sequential_store();
    seed_users(&store, &["alice"]).await;

    for filter in ["userName", "userName eq", "userName co \"al\"", "userName like \"al\""] {
        let err = store
            .get_all(&ListParams::default(), Some(filter))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ScimError::InvalidFilter { .. }),
            "{filter:?} gave {err:?}"
        );
    }
}

#[tokio::test]
async fn test_empty_filter_is_no_filter() {
    let store = sequential_store();
    seed_users(&store, &["alice", "bob"]).await;

    let page = store.get_all(&ListParams::default(), Some("")).await.unwrap();
    assert_eq!(page.resources.len(), 2);
}
