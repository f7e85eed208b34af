//! Integration tests for the document lifecycle: upload, review,
//! and employee visibility.

mod helpers;

use http::StatusCode;

const PDF_BYTES: &[u8] = b"%PDF-1.4 minimal test document";

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_upload_without_file_creates_nothing() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin@metro.test", "password123", "admin")
        .await;
    let token = app.login("admin@metro.test", "password123").await;

    let response = app
        .upload_document(&token, "Safety Bulletin", "safety", None, &[])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    let edges: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assignments")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(edges, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_upload_creates_pending_document_with_edges() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin@metro.test", "password123", "admin")
        .await;
    let e1 = app
        .create_test_user("e1@metro.test", "password123", "employee")
        .await;
    let e2 = app
        .create_test_user("e2@metro.test", "password123", "employee")
        .await;
    let token = app.login("admin@metro.test", "password123").await;

    let response = app
        .upload_document(
            &token,
            "Safety Bulletin",
            "safety",
            Some(("bulletin.pdf", PDF_BYTES)),
            &[e1, e2],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["document"]["status"], "pending");
    assert_eq!(response.body["data"]["assigned_count"], 2);

    // The enrichment job was enqueued but must not gate the upload.
    assert_eq!(response.body["data"]["enrichment_queued"], true);

    let edges: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assignments")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(edges, 2);

    // Enrichment has not run yet; the document is fully usable without it.
    let (parsed, summary): (Option<String>, Option<String>) =
        sqlx::query_as("SELECT parsed_text, summary FROM documents LIMIT 1")
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert!(parsed.is_none());
    assert!(summary.is_none());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_approval_grants_visibility_to_assignees_only() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin@metro.test", "password123", "admin")
        .await;
    let e1 = app
        .create_test_user("e1@metro.test", "password123", "employee")
        .await;
    app.create_test_user("e3@metro.test", "password123", "employee")
        .await;
    let admin = app.login("admin@metro.test", "password123").await;

    let upload = app
        .upload_document(
            &admin,
            "Operations Report",
            "operations",
            Some(("report.pdf", PDF_BYTES)),
            &[e1],
        )
        .await;
    let doc_id = upload.body["data"]["document"]["id"].as_str().unwrap().to_string();

    // Pending: not visible to anyone but the review queue.
    let e1_token = app.login("e1@metro.test", "password123").await;
    let before = app
        .request("GET", "/api/documents/assigned", None, Some(&e1_token))
        .await;
    assert_eq!(before.body["data"]["total_items"], 0);

    let pending = app
        .request("GET", "/api/documents/pending", None, Some(&admin))
        .await;
    assert_eq!(pending.body["data"]["total_items"], 1);

    // Approve.
    let approve = app
        .request(
            "POST",
            &format!("/api/documents/{doc_id}/approve"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(approve.status, StatusCode::OK);
    assert_eq!(approve.body["data"]["status"], "approved");

    // Assigned employee now sees it; the review queue no longer does.
    let after = app
        .request("GET", "/api/documents/assigned", None, Some(&e1_token))
        .await;
    assert_eq!(after.body["data"]["total_items"], 1);
    assert_eq!(after.body["data"]["items"][0]["id"], doc_id.as_str());

    let pending_after = app
        .request("GET", "/api/documents/pending", None, Some(&admin))
        .await;
    assert_eq!(pending_after.body["data"]["total_items"], 0);

    // An unassigned employee sees nothing, even after approval.
    let e3_token = app.login("e3@metro.test", "password123").await;
    let e3_list = app
        .request("GET", "/api/documents/assigned", None, Some(&e3_token))
        .await;
    assert_eq!(e3_list.body["data"]["total_items"], 0);

    let e3_direct = app
        .request(
            "GET",
            &format!("/api/documents/{doc_id}"),
            None,
            Some(&e3_token),
        )
        .await;
    assert_eq!(e3_direct.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_decided_document_cannot_transition_again() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin@metro.test", "password123", "admin")
        .await;
    let admin = app.login("admin@metro.test", "password123").await;

    let upload = app
        .upload_document(
            &admin,
            "Maintenance Schedule",
            "maintenance",
            Some(("schedule.pdf", PDF_BYTES)),
            &[],
        )
        .await;
    let doc_id = upload.body["data"]["document"]["id"].as_str().unwrap().to_string();

    let approve = app
        .request(
            "POST",
            &format!("/api/documents/{doc_id}/approve"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(approve.status, StatusCode::OK);

    // Flipping an approved document to rejected is refused.
    let reject = app
        .request(
            "POST",
            &format!("/api/documents/{doc_id}/reject"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(reject.status, StatusCode::CONFLICT);

    let status: String =
        sqlx::query_scalar("SELECT status::text FROM documents WHERE id = $1::uuid")
            .bind(&doc_id)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(status, "approved");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_download_round_trips_the_stored_bytes() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin@metro.test", "password123", "admin")
        .await;
    let admin = app.login("admin@metro.test", "password123").await;

    let upload = app
        .upload_document(
            &admin,
            "Technical Note",
            "technical",
            Some(("note.pdf", PDF_BYTES)),
            &[],
        )
        .await;
    let doc_id = upload.body["data"]["document"]["id"].as_str().unwrap().to_string();

    let download = app
        .request(
            "GET",
            &format!("/api/documents/{doc_id}/download"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(download.status, StatusCode::OK);
}
