use serde::Deserialize;
use serde_json::{json, Value};

use super::decode_args;
use crate::protocol::{ToolError, ToolResult};
use crate::registry::{Arguments, Tool};

pub const NAME: &str = "formatJSON";

#[derive(Debug, Deserialize)]
pub struct FormatJsonParams {
    pub data: String,
}

pub fn descriptor() -> Tool {
    Tool::new(
        NAME,
        "Formats and validates JSON data",
        json!({
            "type": "object",
            "properties": {
                "data": {
                    "type": "string",
                    "description": "JSON string to format"
                }
            },
            "required": ["data"]
        }),
    )
}

/// Handle a `formatJSON` tool call.
///
/// Parses `data` and re-emits it with two-space indentation. Object keys come
/// out sorted. Text that is not JSON is an input error, reported with the
/// parser's message in `data`.
pub fn handle(arguments: Arguments) -> Result<ToolResult, ToolError> {
    let params: FormatJsonParams = decode_args(NAME, arguments)?;

    let parsed: Value = serde_json::from_str(&params.data)
        .map_err(|e| ToolError::invalid_params("Invalid JSON", Some(Value::String(e.to_string()))))?;

    let formatted = serde_json::to_string_pretty(&parsed)
        .map_err(|e| ToolError::Internal(format!("Serialization failed: {e}")))?;

    Ok(ToolResult::text(formatted))
}
