//! Document handlers — upload, review queue, employee list, read, download,
//! lifecycle transitions.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;
use chrono::NaiveDate;
use uuid::Uuid;

use docportal_core::error::AppError;
use docportal_core::types::pagination::PageResponse;
use docportal_entity::document::{DocumentCategory, DocumentPriority, DocumentStatus};
use docportal_service::document::UploadParams;

use crate::dto::request::DocumentListQuery;
use crate::dto::response::{ApiResponse, DocumentResponse, UploadResponse};
use crate::extractors::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

/// GET /api/documents/pending — admin review queue.
pub async fn list_pending(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DocumentListQuery>,
) -> Result<Json<ApiResponse<PageResponse<DocumentResponse>>>, AppError> {
    rbac::require_admin(&auth)?;

    let page = state
        .document_service
        .list_pending(&auth, query.page_request())
        .await?;

    Ok(Json(ApiResponse::ok(map_page(page))))
}

/// GET /api/documents/assigned — the caller's assigned documents.
pub async fn list_assigned(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DocumentListQuery>,
) -> Result<Json<ApiResponse<PageResponse<DocumentResponse>>>, AppError> {
    rbac::require_employee(&auth)?;

    let status = match &query.status {
        Some(s) => s.parse()?,
        None => DocumentStatus::Approved,
    };

    let page = state
        .document_service
        .list_assigned(&auth, status, query.page_request())
        .await?;

    Ok(Json(ApiResponse::ok(map_page(page))))
}

/// GET /api/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DocumentResponse>>, AppError> {
    let document = state.document_service.get_document(&auth, id).await?;
    Ok(Json(ApiResponse::ok(document.into())))
}

/// GET /api/documents/{id}/download
pub async fn download_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let (document, stream) = state.document_service.download(&auth, id).await?;

    let content_type = document
        .mime_type
        .unwrap_or_else(|| "application/octet-stream".to_string());

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.file_name),
        )
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))
}

/// POST /api/documents/{id}/approve
pub async fn approve_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DocumentResponse>>, AppError> {
    rbac::require_admin(&auth)?;

    let document = state
        .document_service
        .transition(&auth, id, DocumentStatus::Approved)
        .await?;

    Ok(Json(ApiResponse::ok(document.into())))
}

/// POST /api/documents/{id}/reject
pub async fn reject_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DocumentResponse>>, AppError> {
    rbac::require_admin(&auth)?;

    let document = state
        .document_service
        .transition(&auth, id, DocumentStatus::Rejected)
        .await?;

    Ok(Json(ApiResponse::ok(document.into())))
}

/// POST /api/documents/upload — multipart upload with metadata fields.
pub async fn upload_document(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadResponse>>, AppError> {
    rbac::require_admin(&auth)?;

    let mut title: Option<String> = None;
    let mut category: Option<DocumentCategory> = None;
    let mut description: Option<String> = None;
    let mut priority: Option<DocumentPriority> = None;
    let mut deadline: Option<NaiveDate> = None;
    let mut assignees: Vec<Uuid> = Vec::new();
    let mut file_name: Option<String> = None;
    let mut mime_type: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => title = Some(read_text(field).await?),
            "category" => category = Some(read_text(field).await?.parse()?),
            "description" => {
                let text = read_text(field).await?;
                if !text.trim().is_empty() {
                    description = Some(text);
                }
            }
            "priority" => {
                let text = read_text(field).await?;
                if !text.trim().is_empty() {
                    priority = Some(text.parse()?);
                }
            }
            "deadline" => {
                let text = read_text(field).await?;
                if !text.trim().is_empty() {
                    deadline = Some(
                        NaiveDate::parse_from_str(&text, "%Y-%m-%d")
                            .map_err(|_| AppError::validation("Invalid deadline date"))?,
                    );
                }
            }
            "assignees" => {
                let text = read_text(field).await?;
                assignees = serde_json::from_str(&text).map_err(|_| {
                    AppError::validation("assignees must be a JSON array of employee IDs")
                })?;
            }
            "file" => {
                file_name = field.file_name().map(String::from);
                mime_type = field.content_type().map(String::from);
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| AppError::validation("Title is required"))?;
    let category = category.ok_or_else(|| AppError::validation("Category is required"))?;
    let file_name = file_name.ok_or_else(|| AppError::validation("A document file is required"))?;
    let data = data.ok_or_else(|| AppError::validation("A document file is required"))?;

    let outcome = state
        .upload_service
        .upload(
            &auth,
            UploadParams {
                title,
                category,
                description,
                priority,
                deadline,
                file_name,
                mime_type,
                data,
                assignees,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(UploadResponse {
        document: outcome.document.into(),
        assigned_count: outcome.assigned_count,
        enrichment_queued: outcome.enrichment_queued,
        warning: outcome.warning,
    })))
}

/// Reads a multipart text field.
async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Read error: {e}")))
}

/// Maps a page of entities into response DTOs.
fn map_page(
    page: PageResponse<docportal_entity::document::Document>,
) -> PageResponse<DocumentResponse> {
    PageResponse::new(
        page.items.into_iter().map(DocumentResponse::from).collect(),
        page.page,
        page.page_size,
        page.total_items,
    )
}
