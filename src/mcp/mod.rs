//! Model Context Protocol (MCP) message handling and JSON-RPC implementations
//!
//! Provides JSON-RPC message types, error mapping and method routing.

pub mod rpc;
pub mod server;
