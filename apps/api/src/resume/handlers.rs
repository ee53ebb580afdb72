//! Axum route handlers for the resume flow.
//!
//! State machine per request pair:
//! RECEIVE_FORM → BUILD_PROMPT → GENERATE_PROSE → STAGE_TRANSIENT (POST), then
//! RENDER → PERSIST → RESPOND (GET download). Persistence happens before the
//! PDF is returned; the temporary image asset is deleted on every exit path of
//! the download request.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderMap},
    Json,
};
use anyhow::anyhow;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::assets;
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::render::render_resume;
use crate::resume::form::ResumeForm;
use crate::resume::prompts::build_prompt;
use crate::sessions::StagedResume;
use crate::state::AppState;
use crate::storage::upload_pdf;

/// Multipart field name carrying the optional profile image.
const PROFILE_PICTURE_FIELD: &str = "profile_picture";

#[derive(Debug, Serialize)]
pub struct StageResponse {
    pub session_id: Uuid,
    /// Prose preview shown to the user before they request the download.
    pub resume_text: String,
}

/// POST /api/v1/resumes
///
/// Accepts the multipart resume form, generates prose through the injected
/// `ProseGenerator`, and stages the result (plus any uploaded profile image)
/// under a fresh session id. Validation failures make no external call.
pub async fn handle_create_resume(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<StageResponse>, AppError> {
    let mut form = ResumeForm::default();
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        if field_name == PROFILE_PICTURE_FIELD {
            let content_type = field.content_type().unwrap_or_default().to_string();
            let file_name = field.file_name().unwrap_or("upload.img").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            if data.is_empty() {
                continue; // file input submitted without a selection
            }
            assets::validate_image(&content_type, data.len())
                .map_err(|e| AppError::Asset(e.to_string()))?;
            image = Some((file_name, data.to_vec()));
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::Validation(format!("Malformed field '{field_name}': {e}")))?;
            form.set(&field_name, value);
        }
    }

    form.validate()?;

    let prompt = build_prompt(&form);
    let resume_text = state.llm.generate(&prompt).await?;

    let image_path = match image {
        Some((file_name, data)) => Some(
            assets::save_temp_image(&state.config.tmp_image_dir, &file_name, &data)
                .await
                .map_err(|e| AppError::Asset(e.to_string()))?,
        ),
        None => None,
    };

    let staged = StagedResume {
        resume_text: resume_text.clone(),
        name: form.display_name(),
        email: form.email.clone(),
        user_id: authenticated_user_id(&headers),
        image_path,
    };
    let session_id = state.sessions.stage(staged).await;

    info!("Staged generated resume under session {session_id}");

    Ok(Json(StageResponse {
        session_id,
        resume_text,
    }))
}

/// GET /api/v1/resumes/download/:session_id
///
/// Consumes the staged session, renders the PDF, persists one record, and
/// returns the document as an attachment. The staged temp image is deleted
/// whether or not rendering and persistence succeed.
pub async fn handle_download(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(session_id): Path<Uuid>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let staged = state.sessions.take(session_id).await.ok_or_else(|| {
        AppError::Gone(format!("No staged resume for session {session_id}"))
    })?;

    let pdf_bytes = cleanup_after(
        staged.image_path.as_deref(),
        render_and_persist(&state, &headers, &staged),
    )
    .await?;
    let filename = attachment_filename(&staged.name);

    let response_headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((response_headers, pdf_bytes))
}

/// Awaits `op` and then deletes the staged temp image. The deletion runs on
/// every exit path, success or failure, before the result is propagated.
async fn cleanup_after<F>(image_path: Option<&std::path::Path>, op: F) -> Result<Vec<u8>, AppError>
where
    F: std::future::Future<Output = Result<Vec<u8>, AppError>>,
{
    let result = op.await;
    if let Some(path) = image_path {
        assets::delete_temp_image(path).await;
    }
    result
}

/// Builds the attachment filename from the display name, stripping characters
/// that would malform the quoted Content-Disposition value or make the header
/// unbuildable.
fn attachment_filename(name: &str) -> String {
    let safe: String = name
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    let safe = safe.trim();
    let base = if safe.is_empty() { "resume" } else { safe };
    format!("{base}_resume.pdf")
}

/// RENDER then PERSIST. The PDF is uploaded and the record inserted before the
/// bytes are handed back — a persistence failure means no document is returned.
async fn render_and_persist(
    state: &AppState,
    headers: &HeaderMap,
    staged: &StagedResume,
) -> Result<Vec<u8>, AppError> {
    let resume_text = staged.resume_text.clone();
    let name = staged.name.clone();
    let image_path = staged.image_path.clone();

    // The pipeline is CPU-bound; keep it off the async workers.
    let pdf_bytes = tokio::task::spawn_blocking(move || {
        render_resume(&resume_text, &name, image_path.as_deref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("render task failed: {e}")))??;

    let email = staged
        .email
        .clone()
        .or_else(|| authenticated_user_email(headers))
        .unwrap_or_default();

    let id = Uuid::new_v4();
    let pdf_key = format!("resumes/{id}.pdf");

    upload_pdf(&state.s3, &state.config.s3_bucket, &pdf_key, pdf_bytes.clone()).await?;

    sqlx::query(
        "INSERT INTO resumes (id, user_id, name, email, pdf_key, created_at)
         VALUES ($1, $2, $3, $4, $5, NOW())",
    )
    .bind(id)
    .bind(staged.user_id)
    .bind(&staged.name)
    .bind(&email)
    .bind(&pdf_key)
    .execute(&state.db)
    .await?;

    info!("Persisted resume record {id} ({} bytes)", pdf_bytes.len());

    Ok(pdf_bytes)
}

/// GET /api/v1/resumes/:id
///
/// Returns the persisted record row.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(resume_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    Ok(Json(resume))
}

/// Authentication is external to this service; an upstream proxy injects the
/// authenticated identity as headers. Both are optional.
fn authenticated_user_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
}

fn authenticated_user_email(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-user-email")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}
