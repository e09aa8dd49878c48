use super::helpers::{
    empty_request, eventually, expect_status, json_request, read_json, send, spawn_app,
};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn create_webhook_registers_subscription() {
    let app = spawn_app().await;

    let res = send(
        &app.app,
        json_request(
            "POST",
            "/webhooks",
            json!({ "city_id": 5, "callback_url": "https://x/y" }),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;

    assert_eq!(body["id"], 1);
    assert_eq!(body["city_id"], 5);
    assert_eq!(body["callback_url"], "https://x/y");

    let store = app.store.clone();
    eventually("webhook registration", move || {
        store.lookup(5) == vec!["https://x/y".to_string()]
    })
    .await;
    assert_eq!(app.webhooks.len(), 1);
}

#[tokio::test]
async fn create_webhook_rejects_missing_fields() {
    let app = spawn_app().await;

    for payload in [
        json!({ "callback_url": "https://x/y" }),
        json!({ "city_id": 5 }),
        json!({ "city_id": 5, "callback_url": "not a url" }),
        json!({ "city_id": 5, "callback_url": "ftp://x/y" }),
        json!({ "city_id": 5, "callback_url": "mailto:a@b.c" }),
        json!({ "city_id": 5, "callback_url": "file:///etc/passwd" }),
    ] {
        let res = send(&app.app, json_request("POST", "/webhooks", payload)).await;
        expect_status(res, StatusCode::BAD_REQUEST).await;
    }

    assert_eq!(app.webhooks.len(), 0);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn malformed_payload_is_a_bad_request() {
    let app = spawn_app().await;

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/webhooks")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let res = send(&app.app, req).await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert_eq!(body["error"], "Invalid request payload");
}

#[tokio::test]
async fn delete_webhook_unregisters_subscription() {
    let app = spawn_app().await;

    let res = send(
        &app.app,
        json_request(
            "POST",
            "/webhooks",
            json!({ "city_id": 8, "callback_url": "https://hooks.test/a" }),
        ),
    )
    .await;
    expect_status(res, StatusCode::CREATED).await;

    let res = send(&app.app, empty_request("DELETE", "/webhooks/1")).await;
    let body: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;
    assert_eq!(body["id"], 1);

    let store = app.store.clone();
    eventually("webhook removal", move || store.is_empty()).await;
    assert!(app.store.lookup(8).is_empty());
}

#[tokio::test]
async fn delete_unknown_webhook_is_not_found() {
    let app = spawn_app().await;

    let res = send(&app.app, empty_request("DELETE", "/webhooks/42")).await;
    expect_status(res, StatusCode::NOT_FOUND).await;

    let res = send(&app.app, empty_request("DELETE", "/webhooks/abc")).await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = spawn_app().await;

    let res = send(&app.app, empty_request("DELETE", "/webhooks/42")).await;
    assert!(res.headers().contains_key("x-request-id"));
}
