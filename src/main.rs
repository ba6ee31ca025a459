use mcp_tool_server::config::ServerConfig;
use mcp_tool_server::logging::init_logging;
use mcp_tool_server::server::McpServer;
use mcp_tool_server::{stdio, tools};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let server = McpServer::new(config, tools::builtin_registry());
    if server.is_ready() {
        tracing::info!(tools = server.registry().len(), "MCP server initialized and ready");
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    if let Err(e) = stdio::serve(&server, stdin, stdout).await {
        tracing::error!("fatal error: {e}");
        std::process::exit(1);
    }
}
