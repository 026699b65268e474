//! Operation handler status codes and SCIM wire bodies.

use crate::common::builders::{PatchBuilder, UserBuilder};
use crate::common::sequential_store;
use scim_user_store::config::HandlerConfig;
use scim_user_store::schema::{SCHEMA_ERROR, SCHEMA_LIST_RESPONSE, SCHEMA_USER};
use scim_user_store::{InMemoryUserStore, ScimOperationHandler, ScimOperationRequest};
use serde_json::json;

fn handler() -> ScimOperationHandler<InMemoryUserStore> {
    ScimOperationHandler::with_config(
        sequential_store(),
        HandlerConfig::default().with_base_url("https://idp.example.com/scim/v2"),
    )
}

#[tokio::test]
async fn test_create_responds_201_with_location() {
    let handler = handler();
    let response = handler
        .handle_operation(
            ScimOperationRequest::create(UserBuilder::new_full("bjensen").build())
                .with_request_id("req-1"),
        )
        .await;

    assert_eq!(response.status, 201);
    assert_eq!(response.metadata.request_id, "req-1");
    assert_eq!(response.metadata.resource_id.as_deref(), Some("0000"));
    assert_eq!(response.metadata.etag.as_deref(), Some("W/\"v0000\""));
    assert_eq!(
        response.metadata.location.as_deref(),
        Some("https://idp.example.com/scim/v2/Users/0000")
    );

    let body = response.body.unwrap();
    assert_eq!(body["schemas"], json!([SCHEMA_USER]));
    assert_eq!(body["id"], "0000");
    assert_eq!(body["externalId"], "701984");
    assert_eq!(body["meta"]["resourceType"], "User");
    assert_eq!(body["meta"]["version"], "W/\"v0000\"");
    assert_eq!(
        body["meta"]["location"],
        "https://idp.example.com/scim/v2/Users/0000"
    );
}

#[tokio::test]
async fn test_client_supplied_id_and_meta_are_ignored() {
    let handler = handler();
    let body = UserBuilder::new("x")
        .with_attribute("id", json!("client-id"))
        .with_attribute("meta", json!({"version": "W/\"forged\""}))
        .build();
    let response = handler
        .handle_operation(ScimOperationRequest::create(body))
        .await;

    let body = response.body.unwrap();
    assert_eq!(body["id"], "0000");
    assert_eq!(body["meta"]["version"], "W/\"v0000\"");

    let stored = handler.provider().len().await;
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn test_full_lifecycle_status_codes() {
    let handler = handler();
    handler
        .handle_operation(ScimOperationRequest::create(
            UserBuilder::new("bjensen").with_attribute("active", json!(true)).build(),
        ))
        .await;

    let get = handler.handle_operation(ScimOperationRequest::get("0000")).await;
    assert_eq!(get.status, 200);

    let noop = handler
        .handle_operation(ScimOperationRequest::patch(
            "0000",
            PatchBuilder::new().replace(Some("active"), json!(true)).build(),
        ))
        .await;
    assert_eq!(noop.status, 204);
    assert!(noop.body.is_none());

    let patched = handler
        .handle_operation(ScimOperationRequest::patch(
            "0000",
            PatchBuilder::new().replace(Some("active"), json!(false)).build(),
        ))
        .await;
    assert_eq!(patched.status, 200);
    assert_eq!(patched.body.as_ref().unwrap()["active"], false);
    assert_eq!(patched.metadata.etag.as_deref(), Some("W/\"v0000.patch\""));

    let replaced = handler
        .handle_operation(ScimOperationRequest::replace(
            "0000",
            UserBuilder::new("barbara").build(),
        ))
        .await;
    assert_eq!(replaced.status, 200);
    assert_eq!(replaced.body.as_ref().unwrap()["userName"], "barbara");
    assert!(replaced.body.as_ref().unwrap().get("active").is_none());

    let deleted = handler
        .handle_operation(ScimOperationRequest::delete("0000"))
        .await;
    assert_eq!(deleted.status, 204);
    assert!(deleted.body.is_none());

    let missing = handler.handle_operation(ScimOperationRequest::get("0000")).await;
    assert_eq!(missing.status, 404);
    assert!(!missing.is_success());
    let body = missing.body.unwrap();
    assert_eq!(body["schemas"], json!([SCHEMA_ERROR]));
    assert_eq!(body["status"], "404");
}

#[tokio::test]
async fn test_list_parses_query_string() {
    let handler = handler();
    for name in ["alice", "bob", "alice2"] {
        handler
            .handle_operation(ScimOperationRequest::create(UserBuilder::new(name).build()))
            .await;
    }

    let response = handler
        .handle_operation(
            ScimOperationRequest::list().with_query("?filter=userName+eq+%22alice%22&startIndex=1"),
        )
        .await;
    assert_eq!(response.status, 200);
    assert_eq!(response.metadata.total_results, Some(3));
    assert_eq!(response.metadata.resource_count, Some(1));

    let body = response.body.unwrap();
    assert_eq!(body["schemas"], json!([SCHEMA_LIST_RESPONSE]));
    assert_eq!(body["totalResults"], 3);
    assert_eq!(body["itemsPerPage"], 1);
    assert_eq!(body["Resources"][0]["userName"], "alice");
    assert!(body["Resources"][0].get("meta").is_none());

    let count_only = handler
        .handle_operation(ScimOperationRequest::list().with_query("count=0"))
        .await;
    let body = count_only.body.unwrap();
    assert_eq!(body["totalResults"], 3);
    assert_eq!(body["Resources"], json!([]));
}

#[tokio::test]
async fn test_unsupported_filter_is_400_invalid_filter() {
    let handler = handler();
    let response = handler
        .handle_operation(ScimOperationRequest::list().with_query("filter=userName%20sw%20%22a%22"))
        .await;
    assert_eq!(response.status, 400);
    assert_eq!(response.body.unwrap()["scimType"], "invalidFilter");
    assert_eq!(response.metadata.error_code.as_deref(), Some("INVALID_FILTER"));
}

#[tokio::test]
async fn test_bad_requests_are_400() {
    let handler = handler();

    let not_object = handler
        .handle_operation(ScimOperationRequest::create(json!(["x"])))
        .await;
    assert_eq!(not_object.status, 400);
    assert_eq!(not_object.body.unwrap()["scimType"], "invalidSyntax");

    let mut no_id = ScimOperationRequest::get("x");
    no_id.resource_id = None;
    assert_eq!(handler.handle_operation(no_id).await.status, 400);

    handler
        .handle_operation(ScimOperationRequest::create(UserBuilder::new("a").build()))
        .await;
    let bad_patch = handler
        .handle_operation(ScimOperationRequest::patch("0000", json!({"Operations": "nope"})))
        .await;
    assert_eq!(bad_patch.status, 400);

    let bad_op = handler
        .handle_operation(ScimOperationRequest::patch(
            "0000",
            json!({"Operations": [{"op": "replace", "value": "not an object"}]}),
        ))
        .await;
    assert_eq!(bad_op.status, 400);
    assert_eq!(bad_op.body.unwrap()["scimType"], "invalidValue");

    let bad_count = handler
        .handle_operation(ScimOperationRequest::list().with_query("count=many"))
        .await;
    assert_eq!(bad_count.status, 400);
}

#[tokio::test]
async fn test_patch_missing_resource_is_404() {
    let handler = handler();
    let response = handler
        .handle_operation(ScimOperationRequest::patch(
            "0042",
            PatchBuilder::new().remove("title").build(),
        ))
        .await;
    assert_eq!(response.status, 404);
    assert_eq!(response.metadata.resource_id.as_deref(), Some("0042"));
}

#[tokio::test]
async fn test_discovery_endpoints() {
    let handler = handler();

    let schemas = handler
        .handle_operation(ScimOperationRequest::get_schemas())
        .await;
    assert_eq!(schemas.status, 200);
    let body = schemas.body.unwrap();
    assert_eq!(body["totalResults"], 1);
    assert_eq!(body["Resources"][0]["id"], SCHEMA_USER);
    assert_eq!(body["Resources"][0]["attributes"][0]["name"], "userName");
    assert_eq!(body["Resources"][0]["attributes"][0]["required"], true);

    let types = handler
        .handle_operation(ScimOperationRequest::get_resource_types())
        .await;
    let body = types.body.unwrap();
    assert_eq!(body["Resources"][0]["name"], "User");
    assert_eq!(body["Resources"][0]["endpoint"], "/Users");
}
