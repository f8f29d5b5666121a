//! The central Model Context Protocol engine
//!
//! Validates the JSON-RPC version, routes each request through a fixed method table and
//! answers `initialize` directly. Every dispatched request is audited with redacted params.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::domain::{
    resources::{handle_resources_list, handle_resources_read},
    tools::{handle_tools_call, handle_tools_list},
};
use crate::errors::AppError;
use crate::logging::redact_audit_params;
use crate::mcp::rpc::{
    app_error_to_failure, success, JsonRpcRequest, JsonRpcResponse, Outcome, JSONRPC_VERSION,
};
use crate::AppState;

pub const SUPPORTED_PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl ServerInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsCapability {
    pub list_changed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesCapability {
    pub subscribe: bool,
    pub list_changed: bool,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: ToolsCapability,
    pub resources: ResourcesCapability,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult<'a> {
    pub protocol_version: &'static str,
    pub capabilities: ServerCapabilities,
    pub server_info: &'a ServerInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Initialize,
    ToolsList,
    ToolsCall,
    ResourcesList,
    ResourcesRead,
}

/// Every method the dispatcher answers. Anything else is `Method not found`.
pub const METHOD_TABLE: [(&str, Method); 5] = [
    ("initialize", Method::Initialize),
    ("tools/list", Method::ToolsList),
    ("tools/call", Method::ToolsCall),
    ("resources/list", Method::ResourcesList),
    ("resources/read", Method::ResourcesRead),
];

impl Method {
    pub fn from_name(name: &str) -> Option<Self> {
        METHOD_TABLE
            .iter()
            .find(|(method_name, _)| *method_name == name)
            .map(|(_, method)| *method)
    }
}

pub async fn dispatch(state: &AppState, request: &JsonRpcRequest) -> JsonRpcResponse {
    let outcome = if request.jsonrpc != JSONRPC_VERSION {
        app_error_to_failure(AppError::InvalidRequest)
    } else {
        match Method::from_name(&request.method) {
            Some(method) => handle_method(state, method, &request.params).await,
            None => app_error_to_failure(AppError::MethodNotFound),
        }
    };

    info!(
        method = %request.method,
        params = %redact_audit_params(&request.params),
        outcome = if outcome.is_failure() { "failure" } else { "success" },
        "mcp action audited"
    );

    JsonRpcResponse::new(request.id.clone(), outcome)
}

async fn handle_method(state: &AppState, method: Method, params: &Value) -> Outcome {
    match method {
        Method::Initialize => handle_initialize(state),
        Method::ToolsList => handle_tools_list(state),
        Method::ToolsCall => handle_tools_call(state, params).await,
        Method::ResourcesList => handle_resources_list(state),
        Method::ResourcesRead => handle_resources_read(state, params).await,
    }
}

pub fn handle_initialize(state: &AppState) -> Outcome {
    success(&InitializeResult {
        protocol_version: SUPPORTED_PROTOCOL_VERSION,
        capabilities: ServerCapabilities {
            tools: ToolsCapability { list_changed: true },
            resources: ResourcesCapability {
                subscribe: true,
                list_changed: true,
            },
        },
        server_info: &state.server_info,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::mcp::rpc::{INVALID_REQUEST, METHOD_NOT_FOUND};
    use crate::test_support::test_state;

    fn request(jsonrpc: &str, method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: Value::from(jsonrpc),
            id: json!(1),
            method: method.to_string(),
            params,
        }
    }

    fn failure_code(response: &JsonRpcResponse) -> Option<i64> {
        match &response.outcome {
            Outcome::Failure(info) => Some(info.code),
            Outcome::Result(_) => None,
        }
    }

    #[tokio::test]
    async fn rejects_any_other_jsonrpc_version() {
        let state = test_state();
        for version in ["", "1.0", "2", "2.0 ", "3.0"] {
            for (method, _) in METHOD_TABLE {
                let response = dispatch(&state, &request(version, method, Value::Null)).await;
                assert_eq!(failure_code(&response), Some(INVALID_REQUEST), "{version} {method}");
            }
        }
    }

    #[tokio::test]
    async fn rejects_non_string_jsonrpc_version() {
        let state = test_state();
        for version in [Value::Null, json!(2.0), json!(2), json!(["2.0"]), json!({})] {
            let mut req = request("2.0", "initialize", Value::Null);
            req.jsonrpc = version.clone();
            let response = dispatch(&state, &req).await;
            assert_eq!(failure_code(&response), Some(INVALID_REQUEST), "{version}");
        }
    }

    #[tokio::test]
    async fn unknown_method_is_not_found() {
        let state = test_state();
        for method in ["", "ping", "tools/unknown", "Initialize"] {
            let response = dispatch(&state, &request("2.0", method, Value::Null)).await;
            assert_eq!(failure_code(&response), Some(METHOD_NOT_FOUND), "{method}");
        }
    }

    #[tokio::test]
    async fn every_table_entry_routes_to_a_handler() {
        let state = test_state();
        for (method, _) in METHOD_TABLE {
            let response = dispatch(&state, &request("2.0", method, Value::Null)).await;
            assert_ne!(failure_code(&response), Some(METHOD_NOT_FOUND), "{method}");
            assert_ne!(failure_code(&response), Some(INVALID_REQUEST), "{method}");
        }
    }

    #[test]
    fn method_lookup_is_exact() {
        assert_eq!(Method::from_name("tools/call"), Some(Method::ToolsCall));
        assert_eq!(Method::from_name("tools/call "), None);
        assert_eq!(Method::from_name("TOOLS/LIST"), None);
    }

    #[tokio::test]
    async fn initialize_advertises_capabilities() {
        let response = dispatch(&test_state(), &request("2.0", "initialize", json!({}))).await;
        let Outcome::Result(result) = response.outcome else {
            panic!("expected result");
        };

        assert_eq!(
            result,
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": { "listChanged": true },
                    "resources": { "subscribe": true, "listChanged": true }
                },
                "serverInfo": { "name": "test-server", "version": "0.0.1" }
            })
        );
    }

    #[tokio::test]
    async fn initialize_is_byte_identical_across_calls() {
        let state = test_state();
        let first = dispatch(&state, &request("2.0", "initialize", json!({"a": 1}))).await;
        let second = dispatch(&state, &request("2.0", "initialize", Value::Null)).await;

        assert_eq!(
            first.to_line().expect("serialize"),
            second.to_line().expect("serialize")
        );
    }

    #[tokio::test]
    async fn methods_do_not_require_prior_initialize() {
        let response = dispatch(&test_state(), &request("2.0", "tools/list", Value::Null)).await;
        assert!(!response.outcome.is_failure());
    }

    #[tokio::test]
    async fn response_echoes_request_id() {
        let state = test_state();
        for id in [json!("req-1"), json!(42), json!(1.5), Value::Null] {
            let mut req = request("2.0", "tools/list", Value::Null);
            req.id = id.clone();
            assert_eq!(dispatch(&state, &req).await.id, id);
        }
    }
}
