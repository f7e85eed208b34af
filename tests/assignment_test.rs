//! Integration tests for the assignment ledger's replace semantics.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

const PDF_BYTES: &[u8] = b"%PDF-1.4 assignment test document";

async fn setup() -> (helpers::TestApp, String, String, Vec<Uuid>) {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin@metro.test", "password123", "admin")
        .await;
    let e1 = app
        .create_test_user("e1@metro.test", "password123", "employee")
        .await;
    let e2 = app
        .create_test_user("e2@metro.test", "password123", "employee")
        .await;
    let e3 = app
        .create_test_user("e3@metro.test", "password123", "employee")
        .await;
    let admin = app.login("admin@metro.test", "password123").await;

    let upload = app
        .upload_document(
            &admin,
            "HR Circular",
            "hr",
            Some(("circular.pdf", PDF_BYTES)),
            &[],
        )
        .await;
    let doc_id = upload.body["data"]["document"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    (app, admin, doc_id, vec![e1, e2, e3])
}

fn ids_from(body: &serde_json::Value) -> Vec<Uuid> {
    body["data"]["employee_ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().parse().unwrap())
        .collect()
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_replace_leaves_exactly_the_new_set() {
    let (app, admin, doc_id, employees) = setup().await;
    let (e1, e2, e3) = (employees[0], employees[1], employees[2]);

    // First write: {e1, e2}.
    let first = app
        .request(
            "PUT",
            &format!("/api/documents/{doc_id}/assignees"),
            Some(serde_json::json!({ "employee_ids": [e1, e2] })),
            Some(&admin),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    let mut got = ids_from(&first.body);
    got.sort();
    let mut want = vec![e1, e2];
    want.sort();
    assert_eq!(got, want);

    // Second write: {e2, e3}. No residue from the first set survives.
    let second = app
        .request(
            "PUT",
            &format!("/api/documents/{doc_id}/assignees"),
            Some(serde_json::json!({ "employee_ids": [e2, e3] })),
            Some(&admin),
        )
        .await;
    let mut got = ids_from(&second.body);
    got.sort();
    let mut want = vec![e2, e3];
    want.sort();
    assert_eq!(got, want);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_empty_set_unassigns_everyone() {
    let (app, admin, doc_id, employees) = setup().await;

    app.request(
        "PUT",
        &format!("/api/documents/{doc_id}/assignees"),
        Some(serde_json::json!({ "employee_ids": [employees[0]] })),
        Some(&admin),
    )
    .await;

    let cleared = app
        .request(
            "PUT",
            &format!("/api/documents/{doc_id}/assignees"),
            Some(serde_json::json!({ "employee_ids": [] })),
            Some(&admin),
        )
        .await;
    assert_eq!(cleared.status, StatusCode::OK);
    assert!(ids_from(&cleared.body).is_empty());

    let listed = app
        .request(
            "GET",
            &format!("/api/documents/{doc_id}/assignees"),
            None,
            Some(&admin),
        )
        .await;
    assert!(ids_from(&listed.body).is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_replace_is_idempotent() {
    let (app, admin, doc_id, employees) = setup().await;
    let set = serde_json::json!({ "employee_ids": [employees[0], employees[1]] });

    for _ in 0..2 {
        let response = app
            .request(
                "PUT",
                &format!("/api/documents/{doc_id}/assignees"),
                Some(set.clone()),
                Some(&admin),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(ids_from(&response.body).len(), 2);
    }

    let edges: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM assignments WHERE document_id = $1::uuid",
    )
    .bind(&doc_id)
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(edges, 2);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_admin_cannot_be_assigned() {
    let (app, admin, doc_id, _) = setup().await;
    let admin_id: Uuid =
        sqlx::query_scalar("SELECT id FROM users WHERE email = 'admin@metro.test'")
            .fetch_one(&app.db_pool)
            .await
            .unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/documents/{doc_id}/assignees"),
            Some(serde_json::json!({ "employee_ids": [admin_id] })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_assigning_a_missing_document_is_not_found() {
    let (app, admin, _, employees) = setup().await;

    let response = app
        .request(
            "PUT",
            &format!("/api/documents/{}/assignees", Uuid::new_v4()),
            Some(serde_json::json!({ "employee_ids": [employees[0]] })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
