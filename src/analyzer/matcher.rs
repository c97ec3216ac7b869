use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// Candidate match keys tried by auto-detection, in precedence order.
pub const MATCH_KEY_CANDIDATES: [&str; 4] = ["id", "resourceId", "arn", "name"];

#[derive(Debug, Error)]
pub enum MatchKeyError {
    #[error(
        "match key '{key}' was not found in both datasets; provide a key that \
         exists in both cloud and IaC resources"
    )]
    RequestedKeyMissing { key: String },

    #[error(
        "could not auto-detect a match key (checked: id, resourceId, arn, name); \
         please provide --match-key"
    )]
    NoUsableKey,
}

/// Resolve the match key from an explicit request or auto-detection.
///
/// An explicitly requested key must exist in at least one record on each
/// non-empty side; an empty collection passes vacuously so that an empty IaC
/// file still yields an all-`Missing` report instead of an error.
pub fn resolve_match_key(
    cloud_resources: &[Value],
    iac_resources: &[Value],
    requested_key: Option<&str>,
) -> Result<String, MatchKeyError> {
    if let Some(key) = requested_key {
        let cloud_ok = cloud_resources.is_empty() || key_exists_in_dataset(cloud_resources, key);
        let iac_ok = iac_resources.is_empty() || key_exists_in_dataset(iac_resources, key);
        if cloud_ok && iac_ok {
            return Ok(key.to_string());
        }
        return Err(MatchKeyError::RequestedKeyMissing {
            key: key.to_string(),
        });
    }

    detect_match_key(cloud_resources, iac_resources).map(str::to_string)
}

/// Auto-detect a match key: the first candidate present in at least one record
/// of each collection wins.
pub fn detect_match_key(
    cloud_resources: &[Value],
    iac_resources: &[Value],
) -> Result<&'static str, MatchKeyError> {
    MATCH_KEY_CANDIDATES
        .into_iter()
        .find(|key| {
            key_exists_in_dataset(cloud_resources, key)
                && key_exists_in_dataset(iac_resources, key)
        })
        .ok_or(MatchKeyError::NoUsableKey)
}

/// Index IaC records by their match-key value for O(1) lookup.
///
/// Records lacking the key, or holding a non-scalar value under it, are
/// skipped. Duplicate key values resolve last-write-wins; matching stays
/// deterministic because IaC iteration order is the input order.
pub fn build_index<'a>(iac_resources: &'a [Value], match_key: &str) -> HashMap<String, &'a Value> {
    let mut index = HashMap::new();
    for resource in iac_resources {
        let Some(key_value) = resource.get(match_key) else {
            continue;
        };
        if let Some(lookup_key) = index_key(key_value) {
            index.insert(lookup_key, resource);
        }
    }
    index
}

/// Pair every cloud record with its IaC counterpart, preserving input order.
/// A cloud record without a usable match-key value pairs with `None`.
pub fn match_all<'a>(
    cloud_resources: &'a [Value],
    iac_resources: &'a [Value],
    match_key: &str,
) -> Vec<(&'a Value, Option<&'a Value>)> {
    let index = build_index(iac_resources, match_key);
    cloud_resources
        .iter()
        .map(|cloud_item| {
            let iac_item = cloud_item
                .get(match_key)
                .and_then(index_key)
                .and_then(|lookup_key| index.get(&lookup_key).copied());
            (cloud_item, iac_item)
        })
        .collect()
}

fn key_exists_in_dataset(resources: &[Value], key: &str) -> bool {
    resources.iter().any(|item| item.get(key).is_some())
}

/// Encode a scalar match-key value as a lookup key. The type tag keeps values
/// of different JSON types apart (`true` vs `"true"`). Arrays and objects are
/// not usable match-key values.
fn index_key(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null:".to_string()),
        Value::Bool(flag) => Some(format!("b:{flag}")),
        Value::Number(number) => Some(format!("n:{number}")),
        Value::String(text) => Some(format!("s:{text}")),
        Value::Array(_) | Value::Object(_) => None,
    }
}
