use serde_json::{json, Value};

use crate::registry::ToolRegistry;

/// Handle `tools/list`: every registered descriptor, unordered.
pub fn handle(registry: &ToolRegistry) -> Value {
    json!({ "tools": registry.list() })
}
