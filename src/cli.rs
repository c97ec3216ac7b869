mod args;

pub use args::{Cli, OutputFormat};

use std::fs;

use driftscan::analyzer;
use driftscan::error::DriftError;
use driftscan::loader::{extract_resources, load_json_file};
use driftscan::report::{Report, render_json};
use driftscan::s3::S3Client;

/// Execute one report-generation run: load, match, diff, render, write, and
/// optionally upload. Upload runs strictly after local output so a failed
/// upload never affects an already-written report.
pub async fn run(cli: Cli) -> Result<(), DriftError> {
    let cloud_payload = load_json_file(&cli.cloud)?;
    let iac_payload = load_json_file(&cli.iac)?;

    let cloud_resources =
        extract_resources(cloud_payload, &format!("cloud ({})", cli.cloud.display()))?;
    let iac_resources = extract_resources(iac_payload, &format!("iac ({})", cli.iac.display()))?;

    tracing::info!(
        cloud = cloud_resources.len(),
        iac = iac_resources.len(),
        "resources loaded"
    );

    let match_key =
        analyzer::resolve_match_key(&cloud_resources, &iac_resources, cli.match_key.as_deref())?;
    tracing::info!(%match_key, "match key resolved");

    let entries = analyzer::analyze(&cloud_resources, &iac_resources, &match_key);
    let report = Report::new(match_key, entries);

    let report_json = match cli.format {
        OutputFormat::Wrapped => render_json(&report, cli.pretty)?,
        OutputFormat::Array => render_json(&report.resources, cli.pretty)?,
    };

    match &cli.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, format!("{report_json}\n"))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => println!("{report_json}"),
    }

    if cli.upload_s3 {
        // clap enforces this pairing; kept as a guard so run() stands alone
        let (Some(bucket), Some(key)) = (cli.bucket.as_deref(), cli.key.as_deref()) else {
            return Err(DriftError::Config(
                "--upload-s3 requires both --bucket and --key".to_string(),
            ));
        };

        let client = S3Client::new(&cli.endpoint_url)?;
        client.upload_report(bucket, key, &report_json).await?;
    }

    Ok(())
}
