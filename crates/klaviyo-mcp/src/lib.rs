//! MCP front end: JSON-RPC message types and the stdio server loop
//! that publishes the operation catalog as callable tools.

pub mod server;
pub mod types;

pub use server::McpServer;
pub use types::{JsonRpcRequest, JsonRpcResponse, McpTool, ToolCallResult};
