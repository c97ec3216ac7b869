use serde_json::Value;

use crate::report::{ChangeEntry, State};

/// Deeply compare two JSON-like values and collect every difference.
///
/// Objects are walked key by key: the cloud side's keys in their own order
/// first, then IaC-only keys in the IaC side's order. Arrays are compared
/// strictly by index, so a reordered element shows up as a change rather than
/// being silently realigned. A field held by only one side is compared against
/// null. Total over any pair of values; never fails.
pub fn diff(cloud_value: &Value, iac_value: &Value) -> Vec<ChangeEntry> {
    let mut differences = Vec::new();
    walk(cloud_value, iac_value, "", &mut differences);
    differences
}

/// Classify a matched pair: `Missing` when no IaC record resolved, `Match`
/// when the diff is empty, `Modified` otherwise with the diff as change log.
pub fn classify(cloud_value: &Value, iac_value: Option<&Value>) -> (State, Vec<ChangeEntry>) {
    match iac_value {
        None => (State::Missing, Vec::new()),
        Some(iac_value) => {
            let change_log = diff(cloud_value, iac_value);
            if change_log.is_empty() {
                (State::Match, change_log)
            } else {
                (State::Modified, change_log)
            }
        }
    }
}

fn walk(cloud_value: &Value, iac_value: &Value, path: &str, differences: &mut Vec<ChangeEntry>) {
    match (cloud_value, iac_value) {
        (Value::Object(cloud_map), Value::Object(iac_map)) => {
            for (key, cloud_child) in cloud_map {
                let iac_child = iac_map.get(key).unwrap_or(&Value::Null);
                walk(cloud_child, iac_child, &join_key(path, key), differences);
            }
            for (key, iac_child) in iac_map {
                if cloud_map.contains_key(key) {
                    continue;
                }
                walk(&Value::Null, iac_child, &join_key(path, key), differences);
            }
        }
        (Value::Array(cloud_items), Value::Array(iac_items)) => {
            let max_len = cloud_items.len().max(iac_items.len());
            for index in 0..max_len {
                let cloud_child = cloud_items.get(index).unwrap_or(&Value::Null);
                let iac_child = iac_items.get(index).unwrap_or(&Value::Null);
                let child_path = format!("{path}[{index}]");
                walk(cloud_child, iac_child, &child_path, differences);
            }
        }
        // Scalars, nulls, and kind mismatches: one entry, no recursion.
        _ => {
            if cloud_value != iac_value {
                differences.push(ChangeEntry {
                    path: if path.is_empty() { "$".to_string() } else { path.to_string() },
                    cloud_value: cloud_value.clone(),
                    iac_value: iac_value.clone(),
                });
            }
        }
    }
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
