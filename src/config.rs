/// Protocol revision advertised by `initialize` unless overridden.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// Default server name reported in `serverInfo`.
const DEFAULT_SERVER_NAME: &str = "mcp-tool-server";

/// Default maximum bytes per stdio message (1 MiB).
const DEFAULT_MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub server_name: String,
    pub protocol_version: String,
    pub max_message_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_name: DEFAULT_SERVER_NAME.to_string(),
            protocol_version: DEFAULT_PROTOCOL_VERSION.to_string(),
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `MCP_SERVER_NAME` (optional): name reported in `serverInfo`
    /// - `MCP_PROTOCOL_VERSION` (optional, default 2024-11-05)
    /// - `MCP_MAX_MESSAGE_BYTES` (optional, default 1 MiB): stdio line limit
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_name = match lookup("MCP_SERVER_NAME") {
            Some(val) if val.trim().is_empty() => {
                return Err("MCP_SERVER_NAME must not be empty".to_string());
            }
            Some(val) => val,
            None => defaults.server_name,
        };

        let protocol_version = lookup("MCP_PROTOCOL_VERSION").unwrap_or(defaults.protocol_version);

        let max_message_bytes = match lookup("MCP_MAX_MESSAGE_BYTES") {
            Some(val) => match val.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err("MCP_MAX_MESSAGE_BYTES must be a positive integer".to_string()),
            },
            None => defaults.max_message_bytes,
        };

        Ok(Self {
            server_name,
            protocol_version,
            max_message_bytes,
        })
    }
}
