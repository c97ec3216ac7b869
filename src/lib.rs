//! driftscan
//!
//! A library for comparing observed cloud resources against IaC-declared
//! resources and producing a field-level drift report.

pub mod analyzer;
pub mod error;
pub mod loader;
pub mod report;
pub mod s3;

pub use analyzer::{MatchKeyError, analyze, detect_match_key, resolve_match_key};
pub use error::DriftError;
pub use loader::{LoaderError, extract_resources, load_json_file};
pub use report::{ChangeEntry, Report, ReportEntry, State};
pub use s3::{S3Client, UploadError};
