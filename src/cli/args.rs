use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use driftscan::s3::DEFAULT_ENDPOINT_URL;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the cloud resources JSON file
    #[arg(long, value_name = "PATH")]
    pub cloud: PathBuf,

    /// Path to the IaC resources JSON file
    #[arg(long, value_name = "PATH")]
    pub iac: PathBuf,

    /// Resource identifier key to match on. If omitted, auto-detection
    /// tries: id, resourceId, arn, name
    #[arg(long, value_name = "KEY")]
    pub match_key: Option<String>,

    /// Output format: 'wrapped' includes top-level metadata, 'array' prints
    /// only the resource comparison entries
    #[arg(long, value_enum, default_value = "wrapped")]
    pub format: OutputFormat,

    /// Write the report JSON to this file path instead of standard output
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Upload the generated report JSON to an S3-compatible endpoint
    #[arg(long, requires_all = ["bucket", "key"])]
    pub upload_s3: bool,

    /// S3 bucket name for the report upload
    #[arg(long, value_name = "BUCKET")]
    pub bucket: Option<String>,

    /// S3 object key for the report upload
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,

    /// S3 endpoint URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT_URL)]
    pub endpoint_url: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Wrapped,
    Array,
}
