//! Axum route handlers for the job-search lookup.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::jobs::{JobListing, JobSearch};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchParams {
    pub query: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobListing>,
    pub query: String,
}

/// Runs the lookup, degrading any transport error to an empty listing list.
/// The lookup is best-effort and never the reason a request fails.
pub async fn search_or_empty(client: &dyn JobSearch, query: &str, location: &str) -> Vec<JobListing> {
    match client.search(query, location).await {
        Ok(jobs) => jobs,
        Err(e) => {
            warn!("Job search request failed: {e}; returning empty list");
            Vec::new()
        }
    }
}

/// GET /api/v1/jobs?query=...&location=...
pub async fn handle_job_search(
    State(state): State<AppState>,
    Query(params): Query<JobSearchParams>,
) -> Result<Json<JobSearchResponse>, AppError> {
    if params.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let jobs = search_or_empty(state.jobs.as_ref(), &params.query, &params.location).await;

    Ok(Json(JobSearchResponse {
        jobs,
        query: params.query,
    }))
}
