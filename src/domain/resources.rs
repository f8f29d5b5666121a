//! Model Context Protocol resource providers
//!
//! Lists registered resources and resolves `resources/read` through a `ResourceReader`
//! chosen by URI scheme. Only `file://` and `https://` URIs are accepted.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::registry::Resource;
use crate::errors::AppError;
use crate::mcp::rpc::{app_error_to_failure, success, Outcome};
use crate::AppState;

pub const TEXT_MIME_TYPE: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriScheme {
    File,
    Https,
}

impl UriScheme {
    pub fn from_uri(uri: &str) -> Option<Self> {
        if uri.starts_with("file://") {
            Some(Self::File)
        } else if uri.starts_with("https://") {
            Some(Self::Https)
        } else {
            None
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ResourcesReadParams {
    pub uri: String,
}

#[derive(Debug, Serialize)]
pub struct ResourcesListResult<'a> {
    pub resources: Vec<&'a Resource>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextResourceContents {
    pub uri: String,
    pub mime_type: &'static str,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ReadResourceResult {
    pub contents: Vec<TextResourceContents>,
}

/// Resolves the text behind a URI whose scheme has already been checked.
#[async_trait]
pub trait ResourceReader: Send + Sync {
    async fn read(&self, scheme: UriScheme, uri: &str) -> Result<String, AppError>;
}

/// Describes the URI instead of fetching it.
#[derive(Debug, Default)]
pub struct PlaceholderResourceReader;

#[async_trait]
impl ResourceReader for PlaceholderResourceReader {
    async fn read(&self, scheme: UriScheme, uri: &str) -> Result<String, AppError> {
        Ok(match scheme {
            UriScheme::File => format!("Content of {uri}"),
            UriScheme::Https => format!("Web content of {uri}"),
        })
    }
}

pub fn sample_resources() -> Vec<Resource> {
    vec![
        Resource {
            uri: "file:///README.md".to_string(),
            name: "README".to_string(),
            description: "Project readme".to_string(),
            mime_type: "text/markdown".to_string(),
        },
        Resource {
            uri: "https://modelcontextprotocol.io/introduction".to_string(),
            name: "MCP Introduction".to_string(),
            description: "Model Context Protocol overview".to_string(),
            mime_type: "text/html".to_string(),
        },
    ]
}

pub fn handle_resources_list(state: &AppState) -> Outcome {
    success(&ResourcesListResult {
        resources: state.registry.resources().collect(),
    })
}

pub fn parse_resources_read_params(params: &Value) -> Result<ResourcesReadParams, AppError> {
    if !params.is_object() {
        return Err(AppError::invalid_params("params must be an object"));
    }
    ResourcesReadParams::deserialize(params)
        .map_err(|_| AppError::invalid_params("URI is required"))
}

pub async fn handle_resources_read(state: &AppState, params: &Value) -> Outcome {
    let read = match parse_resources_read_params(params) {
        Ok(read) => read,
        Err(err) => return app_error_to_failure(err),
    };

    let Some(scheme) = UriScheme::from_uri(&read.uri) else {
        return app_error_to_failure(AppError::InvalidUriScheme);
    };

    match state.resource_reader.read(scheme, &read.uri).await {
        Ok(text) => success(&ReadResourceResult {
            contents: vec![TextResourceContents {
                uri: read.uri,
                mime_type: TEXT_MIME_TYPE,
                text,
            }],
        }),
        Err(err) => app_error_to_failure(err),
    }
}
