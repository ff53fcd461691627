use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{spawn_app, register_and_login, create_admin_and_login, make_authenticated_request};

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let test_app = spawn_app().await;
    let client = Client::new();
    register_and_login(&test_app.address, "dave").await;

    let response = client
        .post(&format!("{}/login", &test_app.address))
        .json(&json!({ "username": "dave", "password": "wrong-password" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn season_routes_require_a_token() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/seasons", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 401);

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/seasons", &test_app.address),
        "not-a-token",
        None,
    )
    .await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn admin_routes_reject_regular_users() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let token = register_and_login(&test_app.address, "erin").await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/seasons", &test_app.address),
        &token,
        Some(json!({ "season": "2025" })),
    )
    .await;
    assert_eq!(response.status().as_u16(), 403);

    let admin_token = create_admin_and_login(&test_app.address).await;
    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/admin/users", &test_app.address),
        &admin_token,
        None,
    )
    .await;
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}
