use fake::{Fake, faker::internet::en::SafeEmail};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{bearer_token, body_json, method, path, query_param},
};

use crate::helpers::{
    CLIENT_ID, DATABASE_CONNECTION, MANAGEMENT_TOKEN, assert_failure, assert_success,
    identity_user, spawn_app,
};

fn event(email: &str) -> serde_json::Value {
    serde_json::json!({ "data": { "email": email } })
}

#[tokio::test]
async fn forgot_password_dispatches_one_email_for_known_user() {
    let app = spawn_app().await;
    let email: String = SafeEmail().fake();

    Mock::given(method("GET"))
        .and(path("/api/v2/users-by-email"))
        .and(query_param("email", email.as_str()))
        .and(bearer_token(MANAGEMENT_TOKEN))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([identity_user(&email, "auth0", "123")])),
        )
        .expect(1)
        .mount(&app.auth0_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/dbconnections/change_password"))
        .and(body_json(serde_json::json!({
            "client_id": CLIENT_ID,
            "email": &email,
            "connection": DATABASE_CONNECTION
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("We've just sent you an email"))
        .expect(1)
        .mount(&app.auth0_server)
        .await;

    let response = app.post_forgot_password(&event(&email)).await;

    assert_success(response).await;
}

#[tokio::test]
async fn forgot_password_reports_unknown_user_without_dispatch() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users-by-email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&app.auth0_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/dbconnections/change_password"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.auth0_server)
        .await;

    let response = app.post_forgot_password(&event("nobody@example.com")).await;

    assert_failure(response, "UserNotFound").await;
}

#[tokio::test]
async fn forgot_password_reports_lookup_failure_without_dispatch() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users-by-email"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&app.auth0_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/dbconnections/change_password"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.auth0_server)
        .await;

    let response = app.post_forgot_password(&event("a@example.com")).await;

    assert_failure(response, "ProviderLookupError").await;
}

#[tokio::test]
async fn forgot_password_reports_dispatch_failure() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users-by-email"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([identity_user("a@example.com", "auth0", "1")])),
        )
        .mount(&app.auth0_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/dbconnections/change_password"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&app.auth0_server)
        .await;

    let response = app.post_forgot_password(&event("a@example.com")).await;

    assert_failure(response, "ProviderDispatchError").await;
}

#[tokio::test]
async fn forgot_password_twice_dispatches_twice() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users-by-email"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([identity_user("a@example.com", "auth0", "1")])),
        )
        .expect(2)
        .mount(&app.auth0_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/dbconnections/change_password"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.auth0_server)
        .await;

    assert_success(app.post_forgot_password(&event("a@example.com")).await).await;
    assert_success(app.post_forgot_password(&event("a@example.com")).await).await;

    // The management token is exchanged once and reused.
    let token_exchanges = app
        .auth0_server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|request| request.url.path() == "/oauth/token")
        .count();
    assert_eq!(token_exchanges, 1);
}

#[tokio::test]
async fn forgot_password_rejects_blank_email_without_remote_calls() {
    let app = spawn_app().await;

    let response = app.post_forgot_password(&event("   ")).await;

    assert_failure(response, "InvalidInput").await;
    assert!(app.identity_requests().await.is_empty());
}

#[tokio::test]
async fn forgot_password_reports_malformed_payload_as_invalid_input() {
    let app = spawn_app().await;

    let test_cases = [
        serde_json::json!({}),
        serde_json::json!({ "data": {} }),
        serde_json::json!({ "data": { "email": null } }),
        serde_json::json!({ "email": "a@example.com" }),
        serde_json::json!({ "data": { "email": 42 } }),
        serde_json::json!({ "data": null }),
    ];

    for body in test_cases {
        let response = app.post_forgot_password(&body).await;
        assert_failure(response, "InvalidInput").await;
    }
    assert!(app.identity_requests().await.is_empty());
}

#[tokio::test]
async fn forgot_password_reports_unparseable_body_as_invalid_input() {
    let app = spawn_app().await;

    let response = app.post_raw("userForgotPassword", "{\"data\": ").await;

    assert_failure(response, "InvalidInput").await;
    assert!(app.identity_requests().await.is_empty());
}
