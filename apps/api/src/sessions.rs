//! Per-session transient state bridging the two requests of a user flow:
//! generate-and-stage, then render-and-download.
//!
//! Entries are keyed by a fresh UUIDv4 and scoped to one user's flow; no two
//! requests ever contend for the same key under normal use. The download
//! request consumes (removes) the entry. Abandoned entries are evicted after
//! `SESSION_TTL`, and eviction also discards the entry's temp image asset, so
//! a staged-but-never-downloaded resume cannot leak memory or disk.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::warn;
use uuid::Uuid;

use crate::assets;

/// How long a staged resume waits for its download request before eviction.
pub const SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// Staged output of a generation request, awaiting the download request.
#[derive(Debug, Clone)]
pub struct StagedResume {
    pub resume_text: String,
    pub name: String,
    pub email: Option<String>,
    pub user_id: Option<Uuid>,
    /// Location of the temporary profile-image asset, if one was uploaded.
    pub image_path: Option<PathBuf>,
}

struct Entry {
    staged: StagedResume,
    staged_at: Instant,
}

/// In-process transient store. Cloning shares the underlying map.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Entry>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Stages a resume under a fresh session id and returns the id.
    /// Each stage also sweeps out entries older than the TTL.
    pub async fn stage(&self, staged: StagedResume) -> Uuid {
        self.evict_expired().await;
        let session_id = Uuid::new_v4();
        let entry = Entry {
            staged,
            staged_at: Instant::now(),
        };
        self.inner.write().await.insert(session_id, entry);
        session_id
    }

    /// Consumes the staged entry for `session_id`, if present and still within
    /// its TTL. A second take for the same id returns `None`, as does a take
    /// after expiry (the expired entry's asset is discarded on the spot).
    pub async fn take(&self, session_id: Uuid) -> Option<StagedResume> {
        let entry = self.inner.write().await.remove(&session_id)?;
        if entry.staged_at.elapsed() > self.ttl {
            warn!("Session {session_id} expired before download; discarding");
            discard_asset(&entry.staged).await;
            return None;
        }
        Some(entry.staged)
    }

    async fn evict_expired(&self) {
        let expired: Vec<(Uuid, StagedResume)> = {
            let mut map = self.inner.write().await;
            let dead: Vec<Uuid> = map
                .iter()
                .filter(|(_, entry)| entry.staged_at.elapsed() > self.ttl)
                .map(|(id, _)| *id)
                .collect();
            dead.into_iter()
                .filter_map(|id| map.remove(&id).map(|entry| (id, entry.staged)))
                .collect()
        };
        for (id, staged) in expired {
            warn!("Evicting abandoned session {id}");
            discard_asset(&staged).await;
        }
    }
}

async fn discard_asset(staged: &StagedResume) {
    if let Some(path) = &staged.image_path {
        assets::delete_temp_image(path).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged(name: &str) -> StagedResume {
        StagedResume {
            resume_text: "**Summary**\nfine".to_string(),
            name: name.to_string(),
            email: None,
            user_id: None,
            image_path: None,
        }
    }

    #[tokio::test]
    async fn test_stage_then_take_returns_entry() {
        let store = SessionStore::new();
        let id = store.stage(staged("Ada")).await;
        let entry = store.take(id).await.unwrap();
        assert_eq!(entry.name, "Ada");
    }

    #[tokio::test]
    async fn test_take_is_consuming() {
        let store = SessionStore::new();
        let id = store.stage(staged("Ada")).await;
        assert!(store.take(id).await.is_some());
        assert!(store.take(id).await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_session_is_none() {
        let store = SessionStore::new();
        assert!(store.take(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_sessions_do_not_collide() {
        let store = SessionStore::new();
        let a = store.stage(staged("Ada")).await;
        let b = store.stage(staged("Grace")).await;
        assert_ne!(a, b);
        assert_eq!(store.take(a).await.unwrap().name, "Ada");
        assert_eq!(store.take(b).await.unwrap().name, "Grace");
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_session_cannot_be_taken() {
        let store = SessionStore::with_ttl(Duration::from_secs(60));
        let id = store.stage(staged("Ada")).await;
        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(store.take(id).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_within_ttl_survives() {
        let store = SessionStore::with_ttl(Duration::from_secs(60));
        let id = store.stage(staged("Ada")).await;
        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(store.take(id).await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stage_sweeps_abandoned_entries_and_assets() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("orphan.png");
        tokio::fs::write(&image_path, b"img").await.unwrap();

        let store = SessionStore::with_ttl(Duration::from_secs(60));
        let abandoned = store.stage(StagedResume {
            image_path: Some(image_path.clone()),
            ..staged("Ada")
        })
        .await;

        tokio::time::advance(Duration::from_secs(61)).await;
        store.stage(staged("Grace")).await;

        assert!(store.take(abandoned).await.is_none());
        assert!(
            !image_path.exists(),
            "abandoned session's temp image should be deleted on sweep"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_take_after_expiry_discards_asset() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("stale.png");
        tokio::fs::write(&image_path, b"img").await.unwrap();

        let store = SessionStore::with_ttl(Duration::from_secs(60));
        let id = store.stage(StagedResume {
            image_path: Some(image_path.clone()),
            ..staged("Ada")
        })
        .await;

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(store.take(id).await.is_none());
        assert!(!image_path.exists());
    }
}
