use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::jobs::JobSearch;
use crate::llm_client::ProseGenerator;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both external APIs sit behind capability traits so tests can inject
/// deterministic stubs; the production impls are wired up in `main`.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3: S3Client,
    pub llm: Arc<dyn ProseGenerator>,
    pub jobs: Arc<dyn JobSearch>,
    /// Transient per-session state bridging the stage and download requests.
    pub sessions: SessionStore,
    pub config: Config,
}
