pub mod request;
pub mod response;

pub use request::{ClientInfo, InitializeParams, JsonRpcRequest, Method, RpcId, ToolCallParams};
pub use response::{ContentBlock, JsonRpcError, JsonRpcResponse, ToolError, ToolResult};
