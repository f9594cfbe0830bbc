use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;

use crate::export::{ExportError, ExportRequest, ExportTarget};

/// Uploads exports to an S3 / MinIO bucket.
#[derive(Clone)]
pub struct S3ExportTarget {
    client: S3Client,
    bucket: String,
}

impl S3ExportTarget {
    pub fn new(client: S3Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ExportTarget for S3ExportTarget {
    async fn export(&self, request: ExportRequest) -> Result<String, ExportError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&request.key)
            .body(ByteStream::from(request.body))
            .content_type(request.content_type)
            .send()
            .await
            .map_err(|e| ExportError::Upload(format!("S3 upload failed: {e}")))?;

        Ok(format!("s3://{}/{}", self.bucket, request.key))
    }

    fn backend(&self) -> &'static str {
        "s3"
    }
}
