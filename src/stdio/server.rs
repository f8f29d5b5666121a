//! MCP server loop over the stdio transport.
//!
//! Strictly sequential: a line is read, dispatched and answered before the next read, so
//! responses leave in request order. Lines that are not a JSON-RPC request get no reply.

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, error, info, warn};

use crate::errors::TransportError;
use crate::mcp::rpc::JsonRpcRequest;
use crate::mcp::server::dispatch;
use crate::stdio::transport::StdioTransport;
use crate::AppState;

pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    state: AppState,
}

impl<R, W> McpServer<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(transport: StdioTransport<R, W>, state: AppState) -> Self {
        Self { transport, state }
    }

    /// Runs until EOF (`Ok`) or a read/write failure on the transport (`Err`).
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!(
            tools = self.state.registry.tool_count(),
            resources = self.state.registry.resource_count(),
            "MCP server starting on stdio"
        );

        loop {
            let line = match self.transport.read_line().await {
                Ok(Some(line)) if line.is_empty() => continue,
                Ok(Some(line)) => line,
                Ok(None) => {
                    info!("stdin closed, shutting down");
                    return Ok(());
                }
                Err(TransportError::Parse(reason)) => {
                    warn!(error = %reason, "dropping unreadable line");
                    continue;
                }
                Err(err) => {
                    error!(error = %err, "transport read failed");
                    return Err(err);
                }
            };

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(request) => request,
                Err(err) => {
                    warn!(error = %err, "failed to parse JSON-RPC request");
                    continue;
                }
            };

            debug!(method = %request.method, id = %request.id, "received request");
            let response = dispatch(&self.state, &request).await;

            match response.to_line() {
                Ok(line) => self.transport.write_line(&line).await?,
                Err(err) => error!(error = %err, "failed to serialize response"),
            }
        }
    }

    pub fn into_transport(self) -> StdioTransport<R, W> {
        self.transport
    }
}
