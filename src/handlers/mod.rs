pub mod initialize;
pub mod tools_call;
pub mod tools_list;

use crate::config::ServerConfig;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, Method};
use crate::registry::ToolRegistry;

/// Dispatch a decoded JSON-RPC request to the appropriate handler.
///
/// Every request gets a response, notifications included: the caller is
/// always blocked waiting for one.
pub fn dispatch(
    req: &JsonRpcRequest,
    registry: &ToolRegistry,
    config: &ServerConfig,
) -> JsonRpcResponse {
    let id = req.id.clone();

    match req.method() {
        Method::Initialize => {
            JsonRpcResponse::success(id, initialize::handle(req.params.as_ref(), config))
        }

        Method::ToolsList => JsonRpcResponse::success(id, tools_list::handle(registry)),

        Method::ToolsCall => match tools_call::handle(req.params.as_ref(), registry) {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(err) => JsonRpcResponse::error(id, err),
        },

        Method::Unknown(method) => {
            JsonRpcResponse::error(id, JsonRpcError::method_not_found(method))
        }
    }
}
