use thiserror::Error;

/// Protocol-level failures raised while handling a single request.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request: unsupported jsonrpc version")]
    InvalidRequest,
    #[error("method not found")]
    MethodNotFound,
    #[error("tool not found: {name}")]
    ToolNotFound { name: String },
    #[error("invalid parameters: {detail}")]
    InvalidParams { detail: &'static str },
    #[error("invalid uri scheme")]
    InvalidUriScheme,
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound { name: name.into() }
    }

    pub fn invalid_params(detail: &'static str) -> Self {
        Self::InvalidParams { detail }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Setup-time rejections from the registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tool already registered: {0}")]
    DuplicateTool(String),
    #[error("resource already registered: {0}")]
    DuplicateResource(String),
}

/// Failures on the stdin/stdout channel. `Parse` drops one line; the others end the loop.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
}
