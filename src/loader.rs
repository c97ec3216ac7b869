use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Container keys probed, in order, when the top-level value is an object.
const RESOURCE_CONTAINER_KEYS: [&str; 3] = ["resources", "items", "data"];

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("JSON file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("invalid JSON in {}: {message} (line {line}, column {column})", path.display())]
    InvalidJson {
        path: PathBuf,
        message: String,
        line: usize,
        column: usize,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "could not find a resource list in {source_name}: expected a top-level \
         list or an object with one of: resources, items, data"
    )]
    NoResourceList { source_name: String },

    #[error("unsupported JSON structure in {source_name}: expected list or object, got {found}")]
    UnsupportedShape { source_name: String, found: &'static str },

    #[error("invalid resource at index {index} in {source_name}: expected object, got {found}")]
    InvalidResource {
        index: usize,
        source_name: String,
        found: &'static str,
    },
}

/// Load and parse a JSON file.
pub fn load_json_file(path: impl AsRef<Path>) -> Result<Value, LoaderError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoaderError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoaderError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    serde_json::from_str(&raw).map_err(|err| LoaderError::InvalidJson {
        path: path.to_path_buf(),
        message: err.to_string(),
        line: err.line(),
        column: err.column(),
    })
}

/// Normalize a parsed payload into an ordered list of resource objects.
///
/// Accepted shapes: a top-level list of objects, or a top-level object holding
/// such a list under `resources`, `items`, or `data` (checked in that order).
/// `source_name` is a human-readable label used in error messages, e.g.
/// `cloud (fixtures/cloud.json)`.
pub fn extract_resources(payload: Value, source_name: &str) -> Result<Vec<Value>, LoaderError> {
    match payload {
        Value::Array(items) => validate_resource_list(items, source_name),
        Value::Object(mut object) => {
            for key in RESOURCE_CONTAINER_KEYS {
                if let Some(Value::Array(items)) = object.remove(key) {
                    return validate_resource_list(items, source_name);
                }
            }
            Err(LoaderError::NoResourceList {
                source_name: source_name.to_string(),
            })
        }
        other => Err(LoaderError::UnsupportedShape {
            source_name: source_name.to_string(),
            found: json_type_name(&other),
        }),
    }
}

fn validate_resource_list(items: Vec<Value>, source_name: &str) -> Result<Vec<Value>, LoaderError> {
    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            return Err(LoaderError::InvalidResource {
                index,
                source_name: source_name.to_string(),
                found: json_type_name(item),
            });
        }
    }
    Ok(items)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
