//! MCP server exposing Zephyr Scale operations as callable tools
//!
//! The surface is managed by a [`tool_registry::ToolRegistry`]: one
//! [`tool_registry::McpTool`] per capability, registered by family in
//! [`tools`], dispatched by [`server::ZephyrMcpServer`].

pub mod responses;
pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod types;

pub use server::ZephyrMcpServer;
pub use tool_registry::{McpTool, ToolContext, ToolRegistry, CONFIG_ERROR_MESSAGE};
