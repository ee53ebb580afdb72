pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as job_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

/// Multipart bodies may carry a 5 MiB image plus form fields.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes", post(resume_handlers::handle_create_resume))
        .route(
            "/api/v1/resumes/download/:session_id",
            get(resume_handlers::handle_download),
        )
        .route("/api/v1/resumes/:id", get(resume_handlers::handle_get_resume))
        .route("/api/v1/jobs", get(job_handlers::handle_job_search))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
