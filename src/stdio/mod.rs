//! Stdio transport adapter and the server loop that drives it.

pub mod server;
pub mod transport;
