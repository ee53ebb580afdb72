use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted resume record. Created exactly once per successful render and
/// never mutated by this service; deletion is an administrative action.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    /// Owning user, when an authenticated identity was supplied.
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    /// Object-storage key of the rendered PDF.
    pub pdf_key: String,
    pub created_at: DateTime<Utc>,
}
