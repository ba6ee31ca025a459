use serde::Deserialize;
use serde_json::json;

use super::decode_args;
use crate::protocol::{ToolError, ToolResult};
use crate::registry::{Arguments, Tool};

pub const NAME: &str = "add";

#[derive(Debug, Deserialize)]
pub struct AddParams {
    pub a: f64,
    pub b: f64,
}

pub fn descriptor() -> Tool {
    Tool::new(
        NAME,
        "Adds two numbers together",
        json!({
            "type": "object",
            "properties": {
                "a": {
                    "type": "number",
                    "description": "First number to add"
                },
                "b": {
                    "type": "number",
                    "description": "Second number to add"
                }
            },
            "required": ["a", "b"]
        }),
    )
}

/// Handle an `add` tool call.
pub fn handle(arguments: Arguments) -> Result<ToolResult, ToolError> {
    let params: AddParams = decode_args(NAME, arguments)?;
    let sum = params.a + params.b;
    Ok(ToolResult::text(format!("{:.2} + {:.2} = {:.2}", params.a, params.b, sum)))
}
