//! S3 storage for rendered resume PDFs.
//! The object key is recorded on the persisted resume record.

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use tracing::info;

use crate::errors::AppError;

/// Uploads rendered PDF bytes under `key`.
pub async fn upload_pdf(
    s3: &S3Client,
    bucket: &str,
    key: &str,
    bytes: Vec<u8>,
) -> Result<(), AppError> {
    s3.put_object()
        .bucket(bucket)
        .key(key)
        .content_type("application/pdf")
        .body(ByteStream::from(bytes))
        .send()
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    info!("Uploaded rendered PDF to s3://{bucket}/{key}");
    Ok(())
}
