//! Integration tests for signup, login, and profile access.

mod helpers;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_signup_then_login() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": "ravi@metro.test",
                "password": "password123",
                "full_name": "Ravi Kumar",
                "role": "admin",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert!(response.body["data"]["access_token"].is_string());
    assert_eq!(response.body["data"]["user"]["role"], "admin");

    let token = app.login("ravi@metro.test", "password123").await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["email"], "ravi@metro.test");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_duplicate_email_is_a_conflict() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("dup@metro.test", "password123", "employee")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": "dup@metro.test",
                "password": "password123",
                "full_name": "Second Account",
                "role": "employee",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_wrong_password_is_unauthorized() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("locked@metro.test", "password123", "employee")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "locked@metro.test",
                "password": "not-the-password",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_invalid_role_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": "odd@metro.test",
                "password": "password123",
                "full_name": "Odd Role",
                "role": "superuser",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
