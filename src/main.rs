use std::sync::Arc;

use stdio_mcp_server::{
    config::Config,
    domain::{
        register_defaults, registry::Registry, resources::PlaceholderResourceReader,
        tools::BuiltinToolExecutor,
    },
    logging,
    stdio::{server::McpServer, transport::StdioTransport},
    AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let mut registry = Registry::new();
    if config.register_defaults {
        register_defaults(&mut registry)?;
    }

    let state = AppState::new(
        config.server_info(),
        registry,
        Arc::new(BuiltinToolExecutor),
        Arc::new(PlaceholderResourceReader),
    );

    info!(
        server_name = %config.server_name,
        server_version = %config.server_version,
        "server starting"
    );

    let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
    McpServer::new(transport, state).run().await?;
    Ok(())
}
