//! Embeddable MCP tool server.
//!
//! Implements the tool-invocation subset of the Model Context Protocol
//! (`initialize`, `tools/list`, `tools/call`) behind a single
//! synchronous entry point: [`server::McpServer::handle_request`] takes one
//! JSON-RPC 2.0 request string and returns one response string.
//!
//! ```
//! use mcp_tool_server::{config::ServerConfig, server::McpServer, tools};
//!
//! let server = McpServer::new(ServerConfig::default(), tools::builtin_registry());
//! let reply = server.handle_request(r#"{"jsonrpc":"2.0","id":1,"method":"resources/list"}"#);
//! assert_eq!(
//!     reply,
//!     r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"Method not found: resources/list"}}"#
//! );
//! ```

pub mod config;
pub mod handlers;
pub mod logging;
pub mod protocol;
pub mod registry;
pub mod server;
pub mod stdio;
pub mod tools;

pub mod schema;
