//! Status tools: list, get, create, update

use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::error::Result;
use crate::mcp::responses::render;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types;
use crate::schemas;
use crate::schemas::status::StatusList;
use crate::validation;

/// Register all status tools with the registry
pub fn register_status_tools(registry: &mut ToolRegistry) {
    registry.register(GetStatusesTool);
    registry.register(GetStatusTool);
    registry.register(CreateStatusTool);
    registry.register(UpdateStatusTool);
}

/// Tool for listing statuses
pub struct GetStatusesTool;

#[async_trait::async_trait]
impl McpTool for GetStatusesTool {
    fn name(&self) -> &'static str {
        "get_statuses"
    }

    fn description(&self) -> &'static str {
        "List statuses, optionally filtered by project key and status type"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "project_key": {
                    "type": "string",
                    "description": "Jira project key to filter by"
                },
                "status_type": {
                    "type": "string",
                    "description": "Filter: TEST_CASE, TEST_PLAN, TEST_CYCLE, or TEST_EXECUTION"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Page size (1-1000, default 50)"
                },
                "start_at": {
                    "type": "integer",
                    "description": "Zero-based offset of the first result"
                }
            },
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::GetStatusesRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(list_statuses(context, request).await))
    }
}

async fn list_statuses(
    context: &ToolContext,
    request: types::GetStatusesRequest,
) -> Result<StatusList> {
    let page = validation::validate_offset_pagination(request.max_results, request.start_at)?;
    let status_type = request
        .status_type
        .map(|t| validation::validate_status_type(&validation::sanitize(&t)))
        .transpose()?;
    let project_key = context.optional_project_key(request.project_key);
    if let Some(key) = &project_key {
        validation::validate_project_key(&validation::sanitize(key))?;
    }
    context
        .client()?
        .list_statuses(project_key.as_deref(), status_type, page)
        .await
}

/// Tool for fetching one status by id
pub struct GetStatusTool;

#[async_trait::async_trait]
impl McpTool for GetStatusTool {
    fn name(&self) -> &'static str {
        "get_status"
    }

    fn description(&self) -> &'static str {
        "Get a status by its numeric ID"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "status_id": {
                    "type": "integer",
                    "description": "ID of the status to fetch"
                }
            },
            "required": ["status_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::GetStatusRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(get_status(context, request).await))
    }
}

async fn get_status(
    context: &ToolContext,
    request: types::GetStatusRequest,
) -> Result<schemas::Status> {
    let status_id = validation::validate_entity_id_value(&request.status_id, "Status ID")?;
    context.client()?.get_status(status_id).await
}

/// Tool for creating a status
pub struct CreateStatusTool;

#[async_trait::async_trait]
impl McpTool for CreateStatusTool {
    fn name(&self) -> &'static str {
        "create_status"
    }

    fn description(&self) -> &'static str {
        "Create a new status in a project"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "project_key": {
                    "type": "string",
                    "description": "Jira project key (falls back to the configured default)"
                },
                "name": {
                    "type": "string",
                    "description": "Status name (1-255 characters)"
                },
                "status_type": {
                    "type": "string",
                    "description": "TEST_CASE, TEST_PLAN, TEST_CYCLE, or TEST_EXECUTION"
                },
                "description": {
                    "type": "string",
                    "description": "Optional description (1-255 characters)"
                },
                "color": {
                    "type": "string",
                    "description": "Optional hex color, #RGB or #RRGGBB"
                }
            },
            "required": ["name", "status_type"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::CreateStatusRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_status(context, request).await))
    }
}

async fn create_status(
    context: &ToolContext,
    request: types::CreateStatusRequest,
) -> Result<schemas::CreatedResource> {
    let project_key = validation::sanitize(&context.resolve_project_key(request.project_key)?);
    validation::validate_project_key(&project_key)?;

    let name = validation::sanitize(&request.name);
    validation::validate_text_length("name", &name, 255)?;

    let status_type = validation::validate_status_type(&validation::sanitize(&request.status_type))?;

    let description = request.description.map(|d| validation::sanitize(&d));
    if let Some(description) = &description {
        validation::validate_text_length("description", description, 255)?;
    }
    if let Some(color) = &request.color {
        validation::validate_color(color)?;
    }

    let body = schemas::CreateStatusRequest {
        project_key,
        name,
        status_type,
        description,
        color: request.color,
    };
    context.client()?.create_status(&body).await
}

/// Tool for partially updating a status (fetch-merge-put)
pub struct UpdateStatusTool;

#[async_trait::async_trait]
impl McpTool for UpdateStatusTool {
    fn name(&self) -> &'static str {
        "update_status"
    }

    fn description(&self) -> &'static str {
        "Update a status; unspecified fields keep their current values"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "status_id": {
                    "type": "integer",
                    "description": "ID of the status to update"
                },
                "name": {
                    "type": "string",
                    "description": "New name (1-255 characters)"
                },
                "description": {
                    "type": "string",
                    "description": "New description (1-255 characters)"
                },
                "index": {
                    "type": "integer",
                    "description": "New display order index (zero-based)"
                },
                "archived": {
                    "type": "boolean",
                    "description": "Whether the status is archived"
                },
                "default": {
                    "type": "boolean",
                    "description": "Whether this is the default status"
                },
                "color": {
                    "type": "string",
                    "description": "New hex color, #RGB or #RRGGBB"
                }
            },
            "required": ["status_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::UpdateStatusRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(update_status(context, request).await))
    }
}

async fn update_status(
    context: &ToolContext,
    request: types::UpdateStatusRequest,
) -> Result<schemas::UpdateStatusRequest> {
    let status_id = validation::validate_entity_id_value(&request.status_id, "Status ID")?;

    let name = request.name.map(|n| validation::sanitize(&n));
    if let Some(name) = &name {
        validation::validate_text_length("name", name, 255)?;
    }
    let description = request.description.map(|d| validation::sanitize(&d));
    if let Some(description) = &description {
        validation::validate_text_length("description", description, 255)?;
    }
    if let Some(index) = request.index {
        if index < 0 {
            return Err(crate::error::ZephyrError::validation(
                "Field 'index': must be non-negative",
            ));
        }
    }
    if let Some(color) = &request.color {
        validation::validate_color(color)?;
    }

    context
        .client()?
        .update_status(
            status_id,
            name,
            description,
            request.index,
            request.archived,
            request.default,
            request.color,
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ZephyrClient;
    use crate::config::ZephyrConfig;
    use std::sync::Arc;

    fn context() -> ToolContext {
        let client = ZephyrClient::new(&ZephyrConfig::new("token")).unwrap();
        ToolContext::new(Some(Arc::new(client)), Some("PROJ".to_string()))
    }

    fn args(json: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match json {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn message(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => {
                let envelope: serde_json::Value = serde_json::from_str(&text.text).unwrap();
                envelope["message"].as_str().unwrap().to_string()
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_status_rejects_unknown_type() {
        let result = CreateStatusTool
            .execute(
                args(serde_json::json!({"name": "Blocked", "status_type": "TEST_RUN"})),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        let msg = message(&result);
        assert!(msg.contains("TEST_RUN"));
        assert!(msg.contains("TEST_EXECUTION"));
    }

    #[tokio::test]
    async fn test_list_statuses_rejects_bad_filter() {
        let result = GetStatusesTool
            .execute(args(serde_json::json!({"status_type": "nope"})), &context())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_get_status_rejects_zero_id() {
        let result = GetStatusTool
            .execute(args(serde_json::json!({"status_id": 0})), &context())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(message(&result).contains("positive integer"));
    }
}
