//! # Provisioning Flow Example
//!
//! Walks through the requests an identity provider sends while provisioning
//! one user: create, lookup by externalId, a no-op PATCH, a deactivating
//! PATCH, replace and delete. Every request goes through the operation
//! handler, so the printed status codes and bodies are what a transport
//! would send back.
//!
//! Run with `RUST_LOG=debug` to see request bodies.

use scim_user_store::config::ServerConfig;
use scim_user_store::{
    InMemoryUserStore, ScimOperationHandler, ScimOperationRequest, ScimOperationResponse,
};
use serde_json::json;

fn show(label: &str, response: &ScimOperationResponse) {
    println!("{} -> {}", label, response.status);
    if let Some(body) = &response.body {
        println!(
            "{}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let config = ServerConfig::from_json(
        r#"{
            "store": {"idWidth": 4, "idStrategy": "random", "replaceMetadata": "refresh"},
            "handler": {"baseUrl": "http://localhost:8080/scim/v2", "defaultPageSize": 50}
        }"#,
    )?;
    let store = InMemoryUserStore::with_config(config.store)?;
    let handler = ScimOperationHandler::with_config(store, config.handler);

    let created = handler
        .handle_operation(ScimOperationRequest::create(json!({
            "schemas": ["urn:ietf:params:scim:schemas:core:2.0:User"],
            "userName": "bjensen@example.com",
            "externalId": "00u1abcd",
            "nickName": "Babs",
            "active": true
        })))
        .await;
    show("POST /Users", &created);
    let id = created
        .metadata
        .resource_id
        .clone()
        .ok_or("create returned no id")?;

    let lookup = handler
        .handle_operation(
            ScimOperationRequest::list().with_query("filter=externalId%20eq%20%2200u1abcd%22"),
        )
        .await;
    show("GET /Users?filter=externalId eq \"00u1abcd\"", &lookup);

    let noop = handler
        .handle_operation(ScimOperationRequest::patch(
            id.clone(),
            json!({
                "schemas": ["urn:ietf:params:scim:api:messages:2.0:PatchOp"],
                "Operations": [{"op": "Replace", "value": {"active": true}}]
            }),
        ))
        .await;
    show("PATCH (already active)", &noop);

    let deactivated = handler
        .handle_operation(ScimOperationRequest::patch(
            id.clone(),
            json!({
                "schemas": ["urn:ietf:params:scim:api:messages:2.0:PatchOp"],
                "Operations": [{"op": "replace", "path": "active", "value": false}]
            }),
        ))
        .await;
    show("PATCH active=false", &deactivated);

    let replaced = handler
        .handle_operation(ScimOperationRequest::replace(
            id.clone(),
            json!({"userName": "barbara.jensen@example.com", "externalId": "00u1abcd"}),
        ))
        .await;
    show("PUT /Users/{id}", &replaced);

    let deleted = handler
        .handle_operation(ScimOperationRequest::delete(id.clone()))
        .await;
    show("DELETE /Users/{id}", &deleted);

    let missing = handler.handle_operation(ScimOperationRequest::get(id)).await;
    show("GET /Users/{id}", &missing);

    Ok(())
}
