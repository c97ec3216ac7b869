use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

/// Comparison outcome for a single cloud resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum State {
    /// No IaC record resolved for the cloud resource's match-key value.
    Missing,
    /// An IaC record resolved and both records are structurally equal.
    Match,
    /// An IaC record resolved but the records differ.
    Modified,
}

/// One field-level difference between a cloud record and its IaC counterpart.
///
/// `path` is a dotted-and-indexed locator such as `spec.containers[0].image`.
/// A side that does not carry the field at all is recorded as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeEntry {
    pub path: String,
    pub cloud_value: Value,
    pub iac_value: Value,
}

/// Per-resource report line: the matched pair, its state, and the change log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportEntry {
    pub cloud_resource_item: Value,
    pub iac_resource_item: Option<Value>,
    pub state: State,
    pub change_log: Vec<ChangeEntry>,
}

/// Top-level report. Entry order follows the cloud collection's input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    pub generated_at: String,
    pub match_key_used: String,
    pub total_resources: usize,
    pub resources: Vec<ReportEntry>,
}

impl Report {
    pub fn new(match_key_used: impl Into<String>, resources: Vec<ReportEntry>) -> Self {
        Self {
            generated_at: utc_now_iso8601(),
            match_key_used: match_key_used.into(),
            total_resources: resources.len(),
            resources,
        }
    }
}

/// Current UTC timestamp in ISO-8601 format with a trailing `Z`.
pub fn utc_now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Serialize any report payload to JSON text, compact unless `pretty`.
pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_entry() -> ReportEntry {
        ReportEntry {
            cloud_resource_item: json!({"id": "1", "image": "v1"}),
            iac_resource_item: Some(json!({"id": "1", "image": "v2"})),
            state: State::Modified,
            change_log: vec![ChangeEntry {
                path: "image".to_string(),
                cloud_value: json!("v1"),
                iac_value: json!("v2"),
            }],
        }
    }

    #[test]
    fn test_state_serializes_as_bare_string() {
        assert_eq!(serde_json::to_string(&State::Missing).unwrap(), "\"Missing\"");
        assert_eq!(serde_json::to_string(&State::Match).unwrap(), "\"Match\"");
        assert_eq!(serde_json::to_string(&State::Modified).unwrap(), "\"Modified\"");
    }

    #[test]
    fn test_report_entry_serializes_pascal_case() {
        let json = serde_json::to_string(&sample_entry()).unwrap();
        assert!(json.contains("\"CloudResourceItem\""));
        assert!(json.contains("\"IacResourceItem\""));
        assert!(json.contains("\"State\""));
        assert!(json.contains("\"ChangeLog\""));
        assert!(json.contains("\"Path\""));
        assert!(json.contains("\"CloudValue\""));
        assert!(json.contains("\"IacValue\""));
        assert!(!json.contains("cloud_resource_item"));
    }

    #[test]
    fn test_missing_entry_serializes_null_iac_item() {
        let entry = ReportEntry {
            cloud_resource_item: json!({"id": "3"}),
            iac_resource_item: None,
            state: State::Missing,
            change_log: Vec::new(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["IacResourceItem"], Value::Null);
        assert_eq!(value["State"], json!("Missing"));
        assert_eq!(value["ChangeLog"], json!([]));
    }

    #[test]
    fn test_report_wraps_entries_with_metadata() {
        let report = Report::new("id", vec![sample_entry()]);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["MatchKeyUsed"], json!("id"));
        assert_eq!(value["TotalResources"], json!(1));
        assert_eq!(value["Resources"].as_array().unwrap().len(), 1);
        assert!(value["GeneratedAt"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_timestamp_is_utc_with_trailing_z() {
        let stamp = utc_now_iso8601();
        assert!(stamp.ends_with('Z'), "expected trailing Z, got {stamp}");
        assert!(stamp.contains('T'));
        assert!(!stamp.contains("+00:00"));
    }

    #[test]
    fn test_render_json_compact_has_no_spaces() {
        let rendered = render_json(&json!({"a": 1, "b": [1, 2]}), false).unwrap();
        assert_eq!(rendered, r#"{"a":1,"b":[1,2]}"#);
    }

    #[test]
    fn test_render_json_pretty_is_indented() {
        let rendered = render_json(&json!({"a": 1}), true).unwrap();
        assert!(rendered.contains("\n  \"a\": 1"));
    }

    #[test]
    fn test_render_json_passes_non_ascii_through() {
        let rendered = render_json(&json!({"name": "café"}), false).unwrap();
        assert!(rendered.contains("café"));
        assert!(!rendered.contains("\\u"));
    }
}
