//! Tests for the tool registry and custom tool registration.

use mcp_tool_server::config::ServerConfig;
use mcp_tool_server::protocol::{ContentBlock, ToolError, ToolResult};
use mcp_tool_server::registry::{Arguments, Tool, ToolRegistry};
use mcp_tool_server::server::McpServer;
use mcp_tool_server::tools::{self, decode_args};
use serde::Deserialize;
use serde_json::{json, Value};

fn echo_tool(description: &str) -> Tool {
    Tool::new(
        "echo",
        description,
        json!({
            "type": "object",
            "properties": {
                "message": { "type": "string" }
            },
            "required": ["message"]
        }),
    )
}

#[derive(Deserialize)]
struct EchoParams {
    message: String,
}

fn echo(arguments: Arguments) -> Result<ToolResult, ToolError> {
    let params: EchoParams = decode_args("echo", arguments)?;
    Ok(ToolResult::text(params.message))
}

#[test]
fn empty_registry() {
    let registry = ToolRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.list().is_empty());
    assert!(registry.get("echo").is_none());
}

#[test]
fn register_then_get_and_list() {
    let mut registry = ToolRegistry::new();
    registry.register(echo_tool("Echo a message"), echo);

    assert_eq!(registry.len(), 1);
    let tool = registry.get("echo").unwrap();
    assert_eq!(tool.description, "Echo a message");
    assert_eq!(registry.list(), vec![tool]);
}

#[test]
fn duplicate_registration_last_wins() {
    let mut registry = ToolRegistry::new();
    registry.register(echo_tool("first"), |_args: Arguments| Ok(ToolResult::text("first")));
    registry.register(echo_tool("second"), |_args: Arguments| Ok(ToolResult::text("second")));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("echo").unwrap().description, "second");

    let mut args = Arguments::new();
    args.insert("message".into(), json!("hi"));
    let result = registry.call("echo", args).unwrap().unwrap();
    assert_eq!(result.content, vec![ContentBlock::text("second")]);
}

#[test]
fn call_unknown_tool_returns_none() {
    let registry = tools::builtin_registry();
    assert!(registry.call("doesNotExist", Arguments::new()).is_none());
}

#[test]
fn call_validates_against_schema_before_handler() {
    let mut registry = ToolRegistry::new();
    registry.register(echo_tool("Echo"), |_args: Arguments| -> Result<ToolResult, ToolError> {
        panic!("handler must not run on invalid arguments")
    });

    let mut args = Arguments::new();
    args.insert("message".into(), json!(12));

    let err = registry.call("echo", args).unwrap().unwrap_err();
    match err {
        ToolError::InvalidParams { message, data } => {
            assert_eq!(message, "Invalid arguments for echo");
            assert!(matches!(data, Some(Value::Array(ref v)) if !v.is_empty()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validated_arguments_reach_handler_unchanged() {
    let mut registry = ToolRegistry::new();
    registry.register(echo_tool("Echo"), |args: Arguments| {
        Ok(ToolResult::text(Value::Object(args).to_string()))
    });

    let mut args = Arguments::new();
    args.insert("message".into(), json!("hi"));
    args.insert("extra".into(), json!([1, { "k": null }]));
    let expected = Value::Object(args.clone());

    let result = registry.call("echo", args).unwrap().unwrap();
    let seen: Value = serde_json::from_str(result.content[0].as_text().unwrap()).unwrap();
    assert_eq!(seen, expected);
}

#[test]
fn tool_without_schema_receives_arguments_unvalidated() {
    let mut registry = ToolRegistry::new();
    registry.register(
        Tool::new("count", "Count arguments", json!({ "type": "not-a-type" })),
        |args: Arguments| Ok(ToolResult::text(args.len().to_string())),
    );

    let mut args = Arguments::new();
    args.insert("a".into(), json!(1));
    args.insert("b".into(), json!("two"));

    let result = registry.call("count", args).unwrap().unwrap();
    assert_eq!(result.content[0].as_text(), Some("2"));
}

#[test]
fn uncompilable_schema_falls_back_to_typed_decoding() {
    let mut registry = ToolRegistry::new();
    registry.register(
        Tool::new("echo", "Echo", json!({ "type": "not-a-type" })),
        echo,
    );

    // Still advertised verbatim.
    assert_eq!(registry.get("echo").unwrap().input_schema, json!({ "type": "not-a-type" }));

    let err = registry.call("echo", Arguments::new()).unwrap().unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments { ref tool, .. } if tool == "echo"));
    assert_eq!(err.json_rpc_code(), -32602);
}

#[test]
fn custom_registry_is_served() {
    let mut registry = ToolRegistry::new();
    registry.register(echo_tool("Echo a message"), echo);
    let server = McpServer::new(ServerConfig::default(), registry);

    let out = server.handle_request(
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"echo","arguments":{"message":"hello"}}}"#,
    );
    let resp: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(resp["result"]["content"][0]["text"], "hello");

    let out = server.handle_request(
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"getCurrentTime"}}"#,
    );
    let resp: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(resp["error"]["message"], "Unknown tool: getCurrentTime");
}

#[test]
fn internal_tool_failure_maps_to_internal_error() {
    let mut registry = ToolRegistry::new();
    registry.register(
        Tool::new("broken", "Always fails", json!({ "type": "object" })),
        |_args: Arguments| Err(ToolError::Internal("backend unavailable".into())),
    );
    let server = McpServer::new(ServerConfig::default(), registry);

    let out = server.handle_request(
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"broken","arguments":{}}}"#,
    );
    let resp: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(resp["error"]["code"], -32603);
    assert_eq!(resp["error"]["message"], "backend unavailable");
}
