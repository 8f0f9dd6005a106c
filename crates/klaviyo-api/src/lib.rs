//! The Klaviyo operation catalog: the descriptor table for ~250
//! endpoints (revision pinned in `klaviyo-core`), name-keyed registry
//! access and the tool surface the MCP server publishes.

pub mod endpoints;
pub mod registry;
pub mod tools;

pub use registry::{all, count, find};
pub use tools::{input_schema, list_tools, OperationTool, Tool};
