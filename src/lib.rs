use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod mcp;
pub mod stdio;

use domain::{registry::Registry, resources::ResourceReader, tools::ToolExecutor};
use mcp::server::ServerInfo;

/// Everything a request handler may read. The registry is frozen once it is moved in here.
#[derive(Clone)]
pub struct AppState {
    pub server_info: ServerInfo,
    pub registry: Arc<Registry>,
    pub tool_executor: Arc<dyn ToolExecutor>,
    pub resource_reader: Arc<dyn ResourceReader>,
}

impl AppState {
    pub fn new(
        server_info: ServerInfo,
        registry: Registry,
        tool_executor: Arc<dyn ToolExecutor>,
        resource_reader: Arc<dyn ResourceReader>,
    ) -> Self {
        Self {
            server_info,
            registry: Arc::new(registry),
            tool_executor,
            resource_reader,
        }
    }
}
