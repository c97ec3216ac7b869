use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

use super::UploadError;

/// Minimal S3-compatible client for report uploads, using path-style
/// addressing. Built for LocalStack-style endpoints that accept anonymous
/// access; a signing proxy is expected in front of real S3.
#[derive(Debug, Clone)]
pub struct S3Client {
    client: reqwest::Client,
    endpoint: String,
}

impl S3Client {
    pub fn new(endpoint_url: &str) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(UploadError::Network)?;

        Ok(Self {
            client,
            endpoint: endpoint_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload a rendered report: make sure the bucket exists, then write the
    /// object.
    pub async fn upload_report(
        &self,
        bucket: &str,
        key: &str,
        report_json: &str,
    ) -> Result<(), UploadError> {
        self.ensure_bucket(bucket).await?;
        self.put_object(bucket, key, report_json.as_bytes().to_vec())
            .await?;

        tracing::info!(bucket, key, bytes = report_json.len(), "report uploaded");
        Ok(())
    }

    /// Verify the bucket exists, creating it when the endpoint reports 404.
    pub async fn ensure_bucket(&self, bucket: &str) -> Result<(), UploadError> {
        let response = self.client.head(self.bucket_url(bucket)).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::NOT_FOUND {
            return self.create_bucket(bucket).await;
        }

        Err(UploadError::Bucket {
            bucket: bucket.to_string(),
            message: format!("unexpected status {} while checking bucket", status.as_u16()),
        })
    }

    async fn create_bucket(&self, bucket: &str) -> Result<(), UploadError> {
        let response = self.client.put(self.bucket_url(bucket)).send().await?;
        let status = response.status();

        if status.is_success() {
            tracing::info!(bucket, "bucket created");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(UploadError::Bucket {
            bucket: bucket.to_string(),
            message: format!("create failed with status {}: {}", status.as_u16(), body),
        })
    }

    pub async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), UploadError> {
        let response = self
            .client
            .put(self.object_url(bucket, key))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(UploadError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn bucket_url(&self, bucket: &str) -> String {
        format!("{}/{}", self.endpoint, bucket)
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, bucket, key)
    }
}
