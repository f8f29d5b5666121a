//! Registry contents and the tool/resource handlers
//!
//! Holds what the server exposes over MCP and how each tool call or resource read resolves.

pub mod registry;
pub mod resources;
pub mod tools;

use crate::errors::RegistryError;
use registry::Registry;

/// Registers the reference `echo` tool and the sample resources.
pub fn register_defaults(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register_tool(tools::echo_tool())?;
    for resource in resources::sample_resources() {
        registry.register_resource(resource)?;
    }
    Ok(())
}
