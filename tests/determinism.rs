//! Stability of dispatcher output.
//!
//! Responses that depend only on constants must be byte-identical across
//! calls, every response must survive an encode/decode round trip, and a
//! failed call must not affect the next one.

use mcp_tool_server::config::ServerConfig;
use mcp_tool_server::protocol::JsonRpcResponse;
use mcp_tool_server::server::McpServer;
use mcp_tool_server::tools;

fn test_server() -> McpServer {
    McpServer::new(ServerConfig::default(), tools::builtin_registry())
}

const REQUESTS: &[&str] = &[
    "{broken",
    r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#,
    r#"{"jsonrpc":"2.0","id":"x","method":"ping"}"#,
    r#"{"jsonrpc":"2.0","id":"y"}"#,
    r#"{"id":"z","method":"initialize"}"#,
    r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
    r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"getCurrentTime","arguments":{}}}"#,
    r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"add","arguments":{"a":2,"b":2}}}"#,
    r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"add","arguments":{"a":true}}}"#,
    r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"name":"doesNotExist"}}"#,
    r#"{"jsonrpc":"2.0","id":7.5,"method":"unknown"}"#,
];

#[test]
fn initialize_is_byte_identical_across_calls() {
    let server = test_server();
    let req = r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#;

    let a = server.handle_request(req);
    let b = server.handle_request(req);
    assert_eq!(a, b, "initialize must be a pure function of constants");
}

#[test]
fn initialize_is_identical_across_servers() {
    let req = r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#;
    assert_eq!(test_server().handle_request(req), test_server().handle_request(req));
}

#[test]
fn responses_round_trip_without_field_loss() {
    let server = test_server();

    for raw in REQUESTS {
        let response = server.handle(raw);
        let encoded = response.to_json_string();
        let decoded: JsonRpcResponse = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, response, "round trip changed response to {raw}");
        assert_eq!(decoded.to_json_string(), encoded);
    }
}

#[test]
fn exactly_one_of_result_or_error() {
    let server = test_server();

    for raw in REQUESTS {
        let response = server.handle(raw);
        assert_eq!(response.jsonrpc, "2.0");
        assert!(
            response.result.is_some() ^ response.error.is_some(),
            "response to {raw} must carry exactly one of result/error"
        );
    }
}

#[test]
fn failures_do_not_poison_later_calls() {
    let server = test_server();
    let initialize = r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#;
    let baseline = server.handle_request(initialize);

    for raw in REQUESTS {
        server.handle_request(raw);
        assert_eq!(server.handle_request(initialize), baseline);
    }
    assert!(server.is_ready());
}
