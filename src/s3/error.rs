use thiserror::Error;

/// Errors from the S3-compatible report upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Network-level error (connection refused, timeout, etc.)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered, but with a non-success status
    #[error("S3 API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Bucket could not be verified or created before the write
    #[error("unable to prepare bucket '{bucket}': {message}")]
    Bucket { bucket: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = UploadError::Api {
            status: 403,
            message: "AccessDenied".to_string(),
        };
        assert_eq!(err.to_string(), "S3 API error (403): AccessDenied");
    }

    #[test]
    fn test_bucket_error_display() {
        let err = UploadError::Bucket {
            bucket: "reports".to_string(),
            message: "unexpected status 500 while checking bucket".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unable to prepare bucket 'reports': unexpected status 500 while checking bucket"
        );
    }
}
