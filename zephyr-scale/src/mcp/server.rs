//! MCP server dispatching tool calls to the Zephyr Scale client

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, InitializeRequestParam, InitializeResult,
    ListToolsResult, PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    ToolsCapability,
};
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};

use crate::client::ZephyrClient;
use crate::error::ZephyrError;
use crate::mcp::responses;
use crate::mcp::tool_registry::{ToolContext, ToolRegistry, CONFIG_ERROR_MESSAGE};
use crate::mcp::tools;

const INSTRUCTIONS: &str = "Zephyr Scale Cloud test management server. Use the get_* tools to \
     browse priorities, statuses, folders, test cases, test cycles and test plans, and the \
     create_*/update_* tools to change them. Keys look like PROJ-T123 (test case), PROJ-R123 \
     (test cycle) and PROJ-P123 (test plan).";

/// MCP server exposing the Zephyr Scale tool surface over stdio
#[derive(Clone)]
pub struct ZephyrMcpServer {
    tool_registry: Arc<ToolRegistry>,
    tool_context: Arc<ToolContext>,
}

impl ZephyrMcpServer {
    /// Create a server around an optional client.
    ///
    /// Passing `None` starts the server in degraded mode: tools are
    /// still listed, but every call returns a configuration error
    /// envelope until the API token is provided and the process
    /// restarted.
    pub fn new(client: Option<Arc<ZephyrClient>>, default_project_key: Option<String>) -> Self {
        let mut registry = ToolRegistry::new();
        tools::register_all_tools(&mut registry);
        tracing::info!("Registered {} MCP tools", registry.len());

        Self {
            tool_registry: Arc::new(registry),
            tool_context: Arc::new(ToolContext::new(client, default_project_key)),
        }
    }

    fn server_info() -> (ServerCapabilities, Implementation) {
        (
            ServerCapabilities {
                prompts: None,
                tools: Some(ToolsCapability {
                    list_changed: Some(true),
                }),
                resources: None,
                logging: None,
                completions: None,
                experimental: None,
            },
            Implementation {
                name: "zephyr-scale-mcp".into(),
                version: crate::VERSION.into(),
            },
        )
    }
}

impl ServerHandler for ZephyrMcpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );
        if !self.tool_context.is_configured() {
            tracing::warn!("No API token configured; tool calls will return an error");
        }

        let (capabilities, server_info) = Self::server_info();
        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities,
            server_info,
            instructions: Some(INSTRUCTIONS.into()),
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let Some(tool) = self.tool_registry.get_tool(&request.name) else {
            return Err(McpError::invalid_request(
                format!("Unknown tool: {}", request.name),
                None,
            ));
        };
        if !self.tool_context.is_configured() {
            tracing::warn!("Rejecting '{}': no API token configured", request.name);
            return Ok(responses::error_response(&ZephyrError::Configuration(
                CONFIG_ERROR_MESSAGE.to_string(),
            )));
        }
        tracing::debug!("Dispatching tool call '{}'", request.name);
        tool.execute(request.arguments.unwrap_or_default(), &self.tool_context)
            .await
    }

    fn get_info(&self) -> ServerInfo {
        let (capabilities, server_info) = Self::server_info();
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities,
            server_info,
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}
