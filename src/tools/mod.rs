//! Built-in tools.
//!
//! Each tool lives in its own module exposing a `NAME`, a `descriptor()` for
//! `tools/list`, and a `handle()` that decodes its arguments into a typed
//! struct before doing any work.

pub mod add;
pub mod current_time;
pub mod format_json;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::protocol::ToolError;
use crate::registry::{Arguments, ToolRegistry};

/// Registry holding every built-in tool.
pub fn builtin_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(current_time::descriptor(), current_time::handle);
    registry.register(add::descriptor(), add::handle);
    registry.register(format_json::descriptor(), format_json::handle);
    registry
}

/// Decode untyped call arguments into a tool's parameter struct.
pub fn decode_args<T: DeserializeOwned>(tool: &str, arguments: Arguments) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments)).map_err(|e| ToolError::InvalidArguments {
        tool: tool.to_string(),
        detail: e.to_string(),
    })
}
