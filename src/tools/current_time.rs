use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::protocol::{ToolError, ToolResult};
use crate::registry::{Arguments, Tool};

pub const NAME: &str = "getCurrentTime";

pub fn descriptor() -> Tool {
    Tool::new(
        NAME,
        "Returns the current time in RFC3339 format",
        json!({
            "type": "object",
            "properties": {},
            "required": []
        }),
    )
}

/// Handle a `getCurrentTime` tool call.
///
/// Takes no arguments; anything supplied is ignored. Reads the wall clock,
/// so the output differs between calls.
pub fn handle(_arguments: Arguments) -> Result<ToolResult, ToolError> {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    Ok(ToolResult::text(now))
}
