/*!
 * Process List Persistence
 * JSON codec for the saved process list: `[{id, arrival, burst, priority}]`
 */

use super::registry::Registry;
use super::types::ProcessDescriptor;
use crate::core::errors::{SimError, SimResult};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

const REQUIRED_FIELDS: [&str; 3] = ["id", "arrival", "burst"];

/// Decode a saved process list into a validated registry
pub fn from_json_str(input: &str) -> SimResult<Registry> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| SimError::MalformedData(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(SimError::MalformedData(
            "top-level value is not an array".to_string(),
        ));
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| decode_record(index, item))
        .collect::<SimResult<Vec<_>>>()?;

    Registry::from_records(records)
}

fn decode_record(index: usize, item: Value) -> SimResult<ProcessDescriptor> {
    let Value::Object(ref fields) = item else {
        return Err(SimError::MalformedRecord {
            index,
            reason: "record is not an object".to_string(),
        });
    };

    if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !fields.contains_key(**f)) {
        return Err(SimError::MalformedRecord {
            index,
            reason: format!("missing field `{}`", missing),
        });
    }

    serde_json::from_value(item).map_err(|e| SimError::MalformedRecord {
        index,
        reason: e.to_string(),
    })
}

/// Encode the registry with four-space indentation
pub fn to_json_string(registry: &Registry) -> SimResult<String> {
    if registry.is_empty() {
        return Err(SimError::EmptyRegistry);
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    registry
        .list()
        .serialize(&mut ser)
        .map_err(|e| SimError::MalformedData(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| SimError::MalformedData(e.to_string()))
}

/// Load a saved process list from disk
pub fn load_file(path: impl AsRef<Path>) -> SimResult<Registry> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let registry = from_json_str(&contents)?;
    info!(path = %path.display(), processes = registry.len(), "Process list loaded");
    Ok(registry)
}

/// Save the process list to disk
pub fn save_file(registry: &Registry, path: impl AsRef<Path>) -> SimResult<()> {
    let path = path.as_ref();
    let json = to_json_string(registry)?;
    fs::write(path, json)?;
    info!(path = %path.display(), processes = registry.len(), "Process list saved");
    Ok(())
}
