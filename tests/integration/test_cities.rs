use super::helpers::{empty_request, expect_status, json_request, read_json, send, spawn_app};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn city_lifecycle() {
    let app = spawn_app().await;

    let res = send(
        &app.app,
        json_request(
            "POST",
            "/cities",
            json!({ "name": "Berlin", "latitude": 52.52, "longitude": 13.405 }),
        ),
    )
    .await;
    let created: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Berlin");

    let res = send(
        &app.app,
        json_request(
            "PATCH",
            "/cities/1",
            json!({ "name": "Berlin Mitte", "latitude": 52.52, "longitude": 13.405 }),
        ),
    )
    .await;
    let updated: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;
    assert_eq!(updated["name"], "Berlin Mitte");

    let res = send(&app.app, empty_request("DELETE", "/cities/1")).await;
    expect_status(res, StatusCode::CREATED).await;

    let res = send(&app.app, empty_request("DELETE", "/cities/1")).await;
    expect_status(res, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn city_requires_name_and_coordinates() {
    let app = spawn_app().await;

    for payload in [
        json!({ "latitude": 52.52, "longitude": 13.405 }),
        json!({ "name": "Berlin", "longitude": 13.405 }),
        json!({ "name": "Berlin", "latitude": 52.52 }),
        json!({ "name": "Berlin", "latitude": 152.0, "longitude": 13.405 }),
    ] {
        let res = send(&app.app, json_request("POST", "/cities", payload)).await;
        expect_status(res, StatusCode::BAD_REQUEST).await;
    }
}

#[tokio::test]
async fn updating_missing_city_is_not_found() {
    let app = spawn_app().await;

    let res = send(
        &app.app,
        json_request(
            "PATCH",
            "/cities/77",
            json!({ "name": "Nowhere", "latitude": 1.0, "longitude": 1.0 }),
        ),
    )
    .await;
    expect_status(res, StatusCode::NOT_FOUND).await;
}
