mod client;
mod error;

pub use client::S3Client;
pub use error::UploadError;

/// Default endpoint, aimed at LocalStack in local development.
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:4566";
