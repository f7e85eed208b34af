//! Integration tests for role-scoped access.

mod helpers;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_employee_cannot_reach_admin_routes() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("worker@metro.test", "password123", "employee")
        .await;
    let token = app.login("worker@metro.test", "password123").await;

    for (method, path) in [
        ("GET", "/api/documents/pending"),
        ("GET", "/api/employees"),
        ("GET", "/api/dashboard/admin"),
    ] {
        let response = app.request(method, path, None, Some(&token)).await;
        assert_eq!(
            response.status,
            StatusCode::FORBIDDEN,
            "{method} {path} should be admin-only"
        );
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_admin_cannot_use_employee_views() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("boss@metro.test", "password123", "admin")
        .await;
    let token = app.login("boss@metro.test", "password123").await;

    for path in ["/api/documents/assigned", "/api/dashboard/employee"] {
        let response = app.request("GET", path, None, Some(&token)).await;
        assert_eq!(
            response.status,
            StatusCode::FORBIDDEN,
            "{path} should be employee-only"
        );
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_missing_token_is_unauthorized() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/documents/pending", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_garbage_token_is_unauthorized() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "GET",
            "/api/documents/pending",
            None,
            Some("not-a-real-token"),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_health_is_public() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
