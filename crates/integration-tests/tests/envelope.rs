mod harness;

use harness::config::ConfigBuilder;
use harness::server::{TestServer, envelope};
use serde_json::json;

#[tokio::test]
async fn every_error_uses_the_envelope() {
    let server = TestServer::start(ConfigBuilder::new().with_apple().build()).await.unwrap();
    let client = server.client();

    let responses = vec![
        server.get("/items/42").await,
        server.get("/items/nope").await,
        server.post_json("/items", &json!({})).await,
        server.post_json("/items", &json!([1, 2])).await,
        server.get("/missing").await,
        client.delete(server.url("/items/1")).send().await.unwrap(),
        client
            .post(server.url("/items"))
            .header("content-type", "text/plain")
            .body("pear")
            .send()
            .await
            .unwrap(),
    ];

    for resp in responses {
        let status = resp.status();
        assert!(status.is_client_error(), "unexpected status {status}");
        assert_eq!(resp.headers()["content-type"], "application/json");

        let body = envelope(resp).await;
        assert!(!body.error_code.is_empty());
        assert!(!body.message.is_empty());
    }
}

#[tokio::test]
async fn unknown_route_is_route_not_found() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server.get("/widgets/1").await;
    assert_eq!(resp.status(), 404);

    let body = envelope(resp).await;
    assert_eq!(body.error_code, "ROUTE_NOT_FOUND");
    assert_eq!(body.details[0].field, "request");
    assert_eq!(body.details[0].reason, "no route for /widgets/1");
}

#[tokio::test]
async fn wrong_method_is_method_not_allowed() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server.client().put(server.url("/items")).send().await.unwrap();
    assert_eq!(resp.status(), 405);

    let body = envelope(resp).await;
    assert_eq!(body.error_code, "METHOD_NOT_ALLOWED");
    assert_eq!(body.details[0].reason, "PUT is not supported for /items");
}

#[tokio::test]
async fn not_found_and_validation_codes_differ() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let not_found = envelope(server.get("/items/1").await).await;
    let invalid = envelope(server.get("/items/one").await).await;

    assert_eq!(not_found.error_code, "ITEM_NOT_FOUND");
    assert_eq!(invalid.error_code, "VALIDATION_ERROR");
    assert_eq!(not_found.details[0].field, invalid.details[0].field);
}
