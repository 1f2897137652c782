use crate::{FileNode, GenieError, Result};
use serde_json::Value;

/// Parse reply text from the completion model into a project tree.
///
/// The model is instructed to return only a JSON array of file nodes, and
/// this parser holds it to that: no markdown fence stripping, no recovery of
/// JSON embedded in prose. Each stage has its own error so callers can tell
/// an empty reply from garbled JSON from a well-formed reply of the wrong
/// shape.
pub fn parse_project_tree(text: &str) -> Result<Vec<FileNode>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GenieError::NoContent);
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| GenieError::MalformedJson(e.to_string()))?;

    if !value.is_array() {
        return Err(GenieError::UnexpectedShape(format!(
            "expected a JSON array of file nodes, got {}",
            json_kind(&value)
        )));
    }

    serde_json::from_value(value).map_err(|e| GenieError::UnexpectedShape(e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
