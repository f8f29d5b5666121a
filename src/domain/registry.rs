//! Tool and resource registry
//!
//! Filled during setup, then moved into `AppState` behind an `Arc` so request handling only
//! ever sees a shared reference. Both tables are `BTreeMap`s, so listing order is the sorted
//! key order and stays stable across calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::RegistryError;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
}

#[derive(Debug, Default)]
pub struct Registry {
    tools: BTreeMap<String, Tool>,
    resources: BTreeMap<String, Resource>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects a second tool with the same name, leaving the first in place.
    pub fn register_tool(&mut self, tool: Tool) -> Result<(), RegistryError> {
        if self.tools.contains_key(&tool.name) {
            return Err(RegistryError::DuplicateTool(tool.name));
        }
        self.tools.insert(tool.name.clone(), tool);
        Ok(())
    }

    /// Rejects a second resource with the same URI, leaving the first in place.
    pub fn register_resource(&mut self, resource: Resource) -> Result<(), RegistryError> {
        if self.resources.contains_key(&resource.uri) {
            return Err(RegistryError::DuplicateResource(resource.uri));
        }
        self.resources.insert(resource.uri.clone(), resource);
        Ok(())
    }

    pub fn tool(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}
