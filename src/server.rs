use serde::Deserialize;
use serde_json::Value;

use crate::config::ServerConfig;
use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId};
use crate::registry::ToolRegistry;

/// MCP server behind a single string-in/string-out entry point.
///
/// Owns its configuration and tool registry. Each call to
/// [`handle_request`](Self::handle_request) is fully resolved before it
/// returns; no state carries over between calls. Hosts that call in from
/// several threads must serialize access themselves.
#[derive(Debug)]
pub struct McpServer {
    config: ServerConfig,
    registry: ToolRegistry,
    ready: bool,
}

impl McpServer {
    pub fn new(config: ServerConfig, registry: ToolRegistry) -> Self {
        tracing::debug!(
            server = %config.server_name,
            tools = registry.len(),
            "server constructed"
        );
        Self {
            config,
            registry,
            ready: true,
        }
    }

    /// Readiness flag for the host: set once the registry is installed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one raw JSON-RPC request and return the encoded response.
    pub fn handle_request(&self, raw: &str) -> String {
        self.handle(raw).to_json_string()
    }

    /// Handle one raw JSON-RPC request, returning the response unencoded.
    ///
    /// Only text that is not JSON, or not a JSON object, loses its id. Any
    /// other malformed request is answered with its id echoed.
    pub fn handle(&self, raw: &str) -> JsonRpcResponse {
        let value: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "parse error");
                return JsonRpcResponse::error(None, JsonRpcError::parse_error());
            }
        };

        if !value.is_object() {
            tracing::warn!("request is not a JSON object");
            return JsonRpcResponse::error(None, JsonRpcError::parse_error());
        }

        let req = match JsonRpcRequest::deserialize(&value) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "invalid request envelope");
                return JsonRpcResponse::error(RpcId::recover(&value), JsonRpcError::invalid_request());
            }
        };

        if req.jsonrpc != "2.0" {
            tracing::warn!(version = %req.jsonrpc, "unsupported jsonrpc version");
            return JsonRpcResponse::error(req.id.clone(), JsonRpcError::invalid_request());
        }

        tracing::debug!(method = %req.method, id = ?req.id, "request");

        let resp = handlers::dispatch(&req, &self.registry, &self.config);
        if let Some(err) = &resp.error {
            tracing::debug!(method = %req.method, code = err.code, error = %err.message, "request failed");
        }
        resp
    }
}
