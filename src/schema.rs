use std::fmt;

use jsonschema::{validator_for, Validator};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Schema parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Schema compile error: {0}")]
    Compile(String),
    #[error("Instance validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}

/// A tool's `inputSchema`, compiled once at registration.
pub struct ArgumentSchema {
    validator: Validator,
}

impl fmt::Debug for ArgumentSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentSchema").finish_non_exhaustive()
    }
}

impl ArgumentSchema {
    pub fn compile(schema: &Value) -> Result<Self, SchemaError> {
        let validator =
            validator_for(schema).map_err(|e| SchemaError::Compile(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Check `instance` against the schema, collecting every violation.
    pub fn validate(&self, instance: &Value) -> Result<(), SchemaError> {
        let violations: Vec<String> = self
            .validator
            .iter_errors(instance)
            .map(|e| e.to_string())
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed(violations))
        }
    }
}

/// Validate a JSON instance against a JSON Schema (draft 2020-12).
/// Returns Ok(()) if valid, Err otherwise.
pub fn validate_json(schema_str: &str, instance_str: &str) -> Result<(), SchemaError> {
    let schema_json: Value = serde_json::from_str(schema_str)?;
    let instance_json: Value = serde_json::from_str(instance_str)?;

    ArgumentSchema::compile(&schema_json)?.validate(&instance_json)
}
