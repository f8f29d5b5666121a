//! Tools exposed via Model Context Protocol
//!
//! `tools/list` and `tools/call`, plus the `ToolExecutor` seam that runs a registered tool.
//! Tool failures are reported inside a successful result as `{ "error": ... }`; only a
//! malformed call or an unregistered name becomes a JSON-RPC error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::domain::registry::Tool;
use crate::errors::AppError;
use crate::mcp::rpc::{app_error_to_failure, success, Outcome};
use crate::AppState;

pub const ECHO_TOOL_NAME: &str = "echo";

#[derive(Debug, Deserialize)]
pub struct ToolsCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Debug, Serialize)]
pub struct ToolsListResult<'a> {
    pub tools: Vec<&'a Tool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<ToolContent>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    Success(Value),
    ApplicationError(String),
}

impl ToolOutcome {
    pub fn application_error(message: impl Into<String>) -> Self {
        Self::ApplicationError(message.into())
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Success(payload) => payload,
            Self::ApplicationError(message) => json!({ "error": message }),
        }
    }
}

/// Runs a tool that is already known to be registered.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    async fn execute(&self, name: &str, arguments: &Value) -> ToolOutcome;
}

#[derive(Debug, Default)]
pub struct BuiltinToolExecutor;

#[async_trait]
impl ToolExecutor for BuiltinToolExecutor {
    async fn execute(&self, name: &str, arguments: &Value) -> ToolOutcome {
        match name {
            ECHO_TOOL_NAME => echo(arguments),
            _ => ToolOutcome::application_error("Unknown tool"),
        }
    }
}

pub fn echo_tool() -> Tool {
    Tool {
        name: ECHO_TOOL_NAME.to_string(),
        description: "Echoes back the given message".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "Message to echo"
                }
            },
            "required": ["message"]
        }),
    }
}

pub fn echo(arguments: &Value) -> ToolOutcome {
    let Some(arguments) = arguments.as_object() else {
        return ToolOutcome::application_error("Invalid arguments");
    };
    let Some(message) = arguments.get("message").and_then(Value::as_str) else {
        return ToolOutcome::application_error("Message is required");
    };

    let result = CallToolResult {
        content: vec![ToolContent::Text {
            text: format!("Echo: {message}"),
        }],
    };
    match serde_json::to_value(result) {
        Ok(payload) => ToolOutcome::Success(payload),
        Err(err) => ToolOutcome::application_error(err.to_string()),
    }
}

pub fn handle_tools_list(state: &AppState) -> Outcome {
    success(&ToolsListResult {
        tools: state.registry.tools().collect(),
    })
}

pub fn parse_tools_call_params(params: &Value) -> Result<ToolsCallParams, AppError> {
    if !params.is_object() {
        return Err(AppError::invalid_params("params must be an object"));
    }
    ToolsCallParams::deserialize(params)
        .map_err(|_| AppError::invalid_params("tool name is required"))
}

pub async fn handle_tools_call(state: &AppState, params: &Value) -> Outcome {
    let call = match parse_tools_call_params(params) {
        Ok(call) => call,
        Err(err) => return app_error_to_failure(err),
    };

    if state.registry.tool(&call.name).is_none() {
        return app_error_to_failure(AppError::tool_not_found(call.name));
    }

    debug!(tool = %call.name, "executing tool");
    let outcome = state
        .tool_executor
        .execute(&call.name, &call.arguments)
        .await;
    Outcome::Result(outcome.into_value())
}
