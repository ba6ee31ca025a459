use serde::Deserialize;
use serde_json::Value;

use crate::protocol::{JsonRpcError, ToolCallParams};
use crate::registry::ToolRegistry;

/// Handle `tools/call`.
///
/// Decodes the call envelope, looks the tool up by name, and runs it with
/// schema-checked arguments. The returned value is the serialized
/// `ToolResult`.
pub fn handle(params: Option<&Value>, registry: &ToolRegistry) -> Result<Value, JsonRpcError> {
    let params = match params {
        Some(v) => ToolCallParams::deserialize(v).map_err(|e| {
            JsonRpcError::invalid_params("Invalid params")
                .with_data(Value::String(format!("Invalid tools/call params: {e}")))
        })?,
        None => {
            return Err(JsonRpcError::invalid_params("Invalid params")
                .with_data(Value::String("Missing params for tools/call".into())));
        }
    };

    tracing::debug!(tool = %params.name, "tools/call");

    let arguments = params.arguments.unwrap_or_default();
    let outcome = registry
        .call(&params.name, arguments)
        .ok_or_else(|| JsonRpcError::unknown_tool(&params.name))?;

    let tool_result = outcome.map_err(|e| {
        tracing::warn!(tool = %params.name, error = %e, "tool call rejected");
        JsonRpcError::from(e)
    })?;

    serde_json::to_value(&tool_result).map_err(|e| {
        tracing::error!(tool = %params.name, error = %e, "tool result serialization failed");
        JsonRpcError::internal_error("Internal error")
    })
}
