//! JSON-RPC 2.0 message representations
//!
//! Requests, responses and the single mapping from internal `AppError`s to
//! JSON-RPC error objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

pub const JSONRPC_VERSION: &str = "2.0";

pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// `jsonrpc` stays untyped so a wrong-typed version still gets an `Invalid Request` reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: Value,
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ErrorInfo {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Either branch of a response; serialized as a `result` or an `error` key.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Outcome {
    #[serde(rename = "result")]
    Result(Value),
    #[serde(rename = "error")]
    Failure(ErrorInfo),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl JsonRpcResponse {
    pub fn new(id: Value, outcome: Outcome) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            outcome,
        }
    }

    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn failure(code: i64, message: &str) -> Outcome {
    failure_with_data(code, message, None)
}

pub fn failure_with_data(code: i64, message: &str, data: Option<Value>) -> Outcome {
    Outcome::Failure(ErrorInfo {
        code,
        message: message.to_string(),
        data,
    })
}

/// Wraps any serializable result, degrading to an internal error if it cannot be encoded.
pub fn success<T: Serialize>(result: &T) -> Outcome {
    match serde_json::to_value(result) {
        Ok(value) => Outcome::Result(value),
        Err(err) => app_error_to_failure(AppError::internal(format!(
            "result serialization failed: {err}"
        ))),
    }
}

pub fn app_error_to_failure(err: AppError) -> Outcome {
    match err {
        AppError::InvalidRequest => failure(INVALID_REQUEST, "Invalid Request"),
        AppError::MethodNotFound => failure(METHOD_NOT_FOUND, "Method not found"),
        AppError::ToolNotFound { name } => failure_with_data(
            METHOD_NOT_FOUND,
            "Tool not found",
            Some(Value::String(name)),
        ),
        AppError::InvalidParams { detail } => failure_with_data(
            INVALID_PARAMS,
            "Invalid parameters",
            Some(Value::String(detail.to_string())),
        ),
        AppError::InvalidUriScheme => failure(INVALID_PARAMS, "Invalid URI scheme"),
        AppError::Internal { message } => {
            tracing::error!(error = %message, "request failed with internal error");
            failure_with_data(INTERNAL_ERROR, "Internal error", Some(Value::String(message)))
        }
    }
}
