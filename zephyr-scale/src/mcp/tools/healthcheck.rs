//! Healthcheck tool

use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::error::Result;
use crate::mcp::responses::render;
use crate::mcp::tool_registry::{McpTool, ToolContext, ToolRegistry};

/// Register the healthcheck tool with the registry
pub fn register_healthcheck_tools(registry: &mut ToolRegistry) {
    registry.register(HealthcheckTool);
}

/// Tool for checking Zephyr Scale Cloud API availability
pub struct HealthcheckTool;

#[async_trait::async_trait]
impl McpTool for HealthcheckTool {
    fn name(&self) -> &'static str {
        "healthcheck"
    }

    fn description(&self) -> &'static str {
        "Check that the Zephyr Scale Cloud API is reachable and healthy"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        _arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(render(check(context).await))
    }
}

async fn check(context: &ToolContext) -> Result<serde_json::Value> {
    let client = context.client()?;
    client.healthcheck().await?;
    Ok(serde_json::json!({
        "status": "UP",
        "base_url": client.base_url(),
    }))
}
