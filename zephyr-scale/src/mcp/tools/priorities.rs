//! Priority tools: list, get, create, update

use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::error::Result;
use crate::mcp::responses::render;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types;
use crate::schemas;
use crate::schemas::priority::PriorityList;
use crate::validation;

/// Register all priority tools with the registry
pub fn register_priority_tools(registry: &mut ToolRegistry) {
    registry.register(GetPrioritiesTool);
    registry.register(GetPriorityTool);
    registry.register(CreatePriorityTool);
    registry.register(UpdatePriorityTool);
}

/// Tool for listing priorities
pub struct GetPrioritiesTool;

#[async_trait::async_trait]
impl McpTool for GetPrioritiesTool {
    fn name(&self) -> &'static str {
        "get_priorities"
    }

    fn description(&self) -> &'static str {
        "List priorities, optionally filtered by project key"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "project_key": {
                    "type": "string",
                    "description": "Jira project key to filter by"
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
        let request: types::GetPrioritiesRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(list_priorities(context, request).await))
    }
}

async fn list_priorities(
    context: &ToolContext,
    request: types::GetPrioritiesRequest,
) -> Result<PriorityList> {
    let page = validation::validate_offset_pagination(request.max_results, request.start_at)?;
    let project_key = context.optional_project_key(request.project_key);
    if let Some(key) = &project_key {
        validation::validate_project_key(&validation::sanitize(key))?;
    }
    context
        .client()?
        .list_priorities(project_key.as_deref(), page)
        .await
}

/// Tool for fetching one priority by id
pub struct GetPriorityTool;

#[async_trait::async_trait]
impl McpTool for GetPriorityTool {
    fn name(&self) -> &'static str {
        "get_priority"
    }

    fn description(&self) -> &'static str {
        "Get a priority by its numeric ID"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "priority_id": {
                    "type": "integer",
                    "description": "ID of the priority to fetch"
                }
            },
            "required": ["priority_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::GetPriorityRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(get_priority(context, request).await))
    }
}

async fn get_priority(
    context: &ToolContext,
    request: types::GetPriorityRequest,
) -> Result<schemas::Priority> {
    let priority_id = validation::validate_entity_id_value(&request.priority_id, "Priority ID")?;
    context.client()?.get_priority(priority_id).await
}

/// Tool for creating a priority
pub struct CreatePriorityTool;

#[async_trait::async_trait]
impl McpTool for CreatePriorityTool {
    fn name(&self) -> &'static str {
        "create_priority"
    }

    fn description(&self) -> &'static str {
        "Create a new priority in a project"
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
                    "description": "Priority name (1-255 characters)"
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
            "required": ["name"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::CreatePriorityRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_priority(context, request).await))
    }
}

async fn create_priority(
    context: &ToolContext,
    request: types::CreatePriorityRequest,
) -> Result<schemas::CreatedResource> {
    let project_key = validation::sanitize(&context.resolve_project_key(request.project_key)?);
    validation::validate_project_key(&project_key)?;

    let name = validation::sanitize(&request.name);
    validation::validate_text_length("name", &name, 255)?;

    let description = request.description.map(|d| validation::sanitize(&d));
    if let Some(description) = &description {
        validation::validate_text_length("description", description, 255)?;
    }
    if let Some(color) = &request.color {
        validation::validate_color(color)?;
    }

    let body = schemas::CreatePriorityRequest {
        project_key,
        name,
        description,
        color: request.color,
    };
    context.client()?.create_priority(&body).await
}

/// Tool for partially updating a priority (fetch-merge-put)
pub struct UpdatePriorityTool;

#[async_trait::async_trait]
impl McpTool for UpdatePriorityTool {
    fn name(&self) -> &'static str {
        "update_priority"
    }

    fn description(&self) -> &'static str {
        "Update a priority; unspecified fields keep their current values"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "priority_id": {
                    "type": "integer",
                    "description": "ID of the priority to update"
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
                "default": {
                    "type": "boolean",
                    "description": "Whether this is the project default priority"
                },
                "color": {
                    "type": "string",
                    "description": "New hex color, #RGB or #RRGGBB"
                }
            },
            "required": ["priority_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::UpdatePriorityRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(update_priority(context, request).await))
    }
}

async fn update_priority(
    context: &ToolContext,
    request: types::UpdatePriorityRequest,
) -> Result<schemas::UpdatePriorityRequest> {
    let priority_id = validation::validate_entity_id_value(&request.priority_id, "Priority ID")?;

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
        .update_priority(
            priority_id,
            name,
            description,
            request.index,
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

    fn envelope(result: &CallToolResult) -> serde_json::Value {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => serde_json::from_str(&text.text).unwrap(),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_priority_rejects_non_numeric_id() {
        let result = GetPriorityTool
            .execute(args(serde_json::json!({"priority_id": "abc"})), &context())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        let envelope = envelope(&result);
        assert_eq!(envelope["errorCode"], 400);
        assert!(envelope["message"]
            .as_str()
            .unwrap()
            .contains("valid integer"));
    }

    #[tokio::test]
    async fn test_create_priority_rejects_bad_color() {
        let result = CreatePriorityTool
            .execute(
                args(serde_json::json!({"name": "Critical", "color": "red"})),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        let envelope = envelope(&result);
        assert_eq!(envelope["errorCode"], 400);
        assert!(envelope["message"].as_str().unwrap().contains("red"));
    }

    #[tokio::test]
    async fn test_create_priority_requires_name_argument() {
        let result = CreatePriorityTool
            .execute(args(serde_json::json!({})), &context())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_update_priority_rejects_negative_index() {
        let result = UpdatePriorityTool
            .execute(
                args(serde_json::json!({"priority_id": 1, "index": -2})),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(envelope(&result)["message"]
            .as_str()
            .unwrap()
            .contains("index"));
    }
}
