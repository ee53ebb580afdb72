//! Temporary profile-image assets.
//!
//! An uploaded image lives for a single request pair: created at staging, read
//! once during rendering, deleted on every exit path of the download request.
//! Filenames embed a UUIDv4 so concurrent uploads from different users never
//! collide on the shared temp directory.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// Upload size limit: 5 MiB.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Accepted upload content types.
pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Unsupported image format: {0}")]
    UnsupportedType(String),

    #[error("Image exceeds the 5 MiB size limit")]
    TooLarge,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validates an uploaded image's declared content type and size.
pub fn validate_image(content_type: &str, len: usize) -> Result<(), AssetError> {
    if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
        return Err(AssetError::UnsupportedType(content_type.to_string()));
    }
    if len > MAX_IMAGE_BYTES {
        return Err(AssetError::TooLarge);
    }
    Ok(())
}

/// Writes an uploaded image to `dir` under a collision-resistant unique name,
/// preserving the original file extension. Returns the asset path.
pub async fn save_temp_image(
    dir: &Path,
    original_name: &str,
    data: &[u8],
) -> Result<PathBuf, AssetError> {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("img");
    let path = dir.join(format!("{}.{ext}", Uuid::new_v4()));
    tokio::fs::write(&path, data).await?;
    Ok(path)
}

/// Deletes a temporary asset. Idempotent: deleting an already-absent file is a
/// no-op, and any other failure is logged rather than surfaced — cleanup must
/// never turn a successful download into an error.
pub async fn delete_temp_image(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to delete temp image {}: {e}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_known_types_within_limit() {
        for ty in ALLOWED_IMAGE_TYPES {
            assert!(validate_image(ty, 1024).is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_unknown_type() {
        let err = validate_image("application/pdf", 10).unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedType(_)));
    }

    #[test]
    fn test_validate_rejects_oversized() {
        let err = validate_image("image/png", MAX_IMAGE_BYTES + 1).unwrap_err();
        assert!(matches!(err, AssetError::TooLarge));
    }

    #[tokio::test]
    async fn test_save_then_delete_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_temp_image(dir.path(), "me.png", b"fake bytes")
            .await
            .unwrap();
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "png");

        delete_temp_image(&path).await;
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_delete_absent_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never-created.png");
        // must not panic or error
        delete_temp_image(&path).await;
    }

    #[tokio::test]
    async fn test_saved_names_never_collide() {
        let dir = tempfile::tempdir().unwrap();
        let a = save_temp_image(dir.path(), "me.png", b"a").await.unwrap();
        let b = save_temp_image(dir.path(), "me.png", b"b").await.unwrap();
        assert_ne!(a, b);
    }
}
