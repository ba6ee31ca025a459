use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::protocol::{ToolError, ToolResult};
use crate::schema::{ArgumentSchema, SchemaError};

/// Arguments of a `tools/call`, as sent by the client.
pub type Arguments = Map<String, Value>;

/// Executable behavior behind a tool name.
pub type ToolHandler = Box<dyn Fn(Arguments) -> Result<ToolResult, ToolError> + Send + Sync>;

/// Tool descriptor advertised by `tools/list`.
///
/// The schema is opaque here: it is passed through to enumeration as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl Tool {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

struct Entry {
    tool: Tool,
    schema: Option<ArgumentSchema>,
    handler: ToolHandler,
}

/// Name-keyed table of tools and their handlers.
///
/// Built once before the server starts, then only read. Registering a name
/// twice replaces the earlier entry.
#[derive(Default)]
pub struct ToolRegistry {
    entries: HashMap<String, Entry>,
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, tool: Tool, handler: F)
    where
        F: Fn(Arguments) -> Result<ToolResult, ToolError> + Send + Sync + 'static,
    {
        // A schema that does not compile is still advertised; calls then rely
        // on the handler's own argument decoding.
        let schema = match ArgumentSchema::compile(&tool.input_schema) {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::warn!(tool = %tool.name, error = %e, "input schema not enforceable");
                None
            }
        };

        let name = tool.name.clone();
        let entry = Entry {
            tool,
            schema,
            handler: Box::new(handler),
        };

        if self.entries.insert(name.clone(), entry).is_some() {
            tracing::warn!(tool = %name, "tool re-registered; previous definition replaced");
        }
    }

    /// All registered tools, in no particular order.
    pub fn list(&self) -> Vec<&Tool> {
        self.entries.values().map(|e| &e.tool).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.entries.get(name).map(|e| &e.tool)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate `arguments` against the tool's schema and run its handler.
    ///
    /// Returns `None` when no tool is registered under `name`.
    pub fn call(&self, name: &str, arguments: Arguments) -> Option<Result<ToolResult, ToolError>> {
        let entry = self.entries.get(name)?;

        if let Some(schema) = &entry.schema {
            if let Err(err) = schema.validate(&Value::Object(arguments.clone())) {
                return Some(Err(schema_violation(name, err)));
            }
        }

        Some((entry.handler)(arguments))
    }
}

fn schema_violation(tool: &str, err: SchemaError) -> ToolError {
    match err {
        SchemaError::ValidationFailed(violations) => ToolError::invalid_params(
            format!("Invalid arguments for {tool}"),
            Some(Value::from(violations)),
        ),
        other => ToolError::InvalidArguments {
            tool: tool.to_string(),
            detail: other.to_string(),
        },
    }
}
