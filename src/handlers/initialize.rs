use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::ServerConfig;
use crate::protocol::InitializeParams;

/// Handle `initialize`.
///
/// The result depends only on the configuration, so repeated handshakes are
/// byte-identical. Client params are read for logging and otherwise ignored.
pub fn handle(params: Option<&Value>, config: &ServerConfig) -> Value {
    if let Some(Ok(init)) = params.map(|v| InitializeParams::deserialize(v)) {
        let client = init.client_info.as_ref();
        tracing::info!(
            client_name = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
            client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("unknown"),
            requested_protocol = init.protocol_version.as_deref().unwrap_or("unspecified"),
            "initialize"
        );
    }

    json!({
        "capabilities": {
            "tools": {}
        },
        "protocolVersion": config.protocol_version,
        "serverInfo": {
            "name": config.server_name,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}
