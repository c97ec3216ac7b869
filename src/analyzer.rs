mod differ;
mod matcher;

pub use differ::{classify, diff};
pub use matcher::{
    MATCH_KEY_CANDIDATES, MatchKeyError, build_index, detect_match_key, match_all,
    resolve_match_key,
};

use serde_json::Value;

use crate::report::{ReportEntry, State};

/// Compare every cloud resource against the IaC collection and produce the
/// per-resource report entries, in cloud input order.
pub fn analyze(
    cloud_resources: &[Value],
    iac_resources: &[Value],
    match_key: &str,
) -> Vec<ReportEntry> {
    let entries: Vec<ReportEntry> = match_all(cloud_resources, iac_resources, match_key)
        .into_iter()
        .map(|(cloud_item, iac_item)| {
            let (state, change_log) = classify(cloud_item, iac_item);
            ReportEntry {
                cloud_resource_item: cloud_item.clone(),
                iac_resource_item: iac_item.cloned(),
                state,
                change_log,
            }
        })
        .collect();

    let mut missing = 0usize;
    let mut matched = 0usize;
    let mut modified = 0usize;
    for entry in &entries {
        match entry.state {
            State::Missing => missing += 1,
            State::Match => matched += 1,
            State::Modified => modified += 1,
        }
    }
    tracing::info!(
        total = entries.len(),
        missing,
        matched,
        modified,
        "analysis complete"
    );

    entries
}
