use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON-RPC 2.0 ID: a number or a string.
///
/// Numbers are kept as `serde_json::Number` so integer and fractional ids are
/// echoed back exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(serde_json::Number),
    Str(String),
}

impl RpcId {
    /// Read the `id` member of a request object that may not fit the full
    /// envelope. Ids of any other JSON type are unrecoverable.
    pub fn recover(request: &Value) -> Option<Self> {
        request
            .get("id")
            .and_then(|id| Self::deserialize(id).ok())
    }
}

impl From<i64> for RpcId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

/// JSON-RPC 2.0 request envelope.
///
/// An absent or `null` id decodes to `None`. A missing `jsonrpc` or `method`
/// decodes to the empty string so the id can still be echoed in the error.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<RpcId>,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn method(&self) -> Method<'_> {
        Method::parse(&self.method)
    }
}

/// The closed set of top-level methods the server routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method<'a> {
    Initialize,
    ToolsList,
    ToolsCall,
    Unknown(&'a str),
}

impl<'a> Method<'a> {
    pub fn parse(name: &'a str) -> Self {
        match name {
            "initialize" => Self::Initialize,
            "tools/list" => Self::ToolsList,
            "tools/call" => Self::ToolsCall,
            other => Self::Unknown(other),
        }
    }
}

/// MCP `initialize` params.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information sent during `initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parameters for `tools/call`.
///
/// `arguments` must be a JSON object when present; a missing value is
/// equivalent to `{}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Map<String, Value>>,
}
