//! Test cycle tools: list, get, create, update, links

use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::error::{Result, ZephyrError};
use crate::mcp::responses::render;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types;
use crate::schemas;
use crate::schemas::TestCycleUpdate;
use crate::validation;

/// Register all test cycle tools with the registry
pub fn register_test_cycle_tools(registry: &mut ToolRegistry) {
    registry.register(GetTestCyclesTool);
    registry.register(GetTestCycleTool);
    registry.register(CreateTestCycleTool);
    registry.register(UpdateTestCycleTool);
    registry.register(GetTestCycleLinksTool);
    registry.register(CreateTestCycleIssueLinkTool);
    registry.register(CreateTestCycleWebLinkTool);
}

/// Tool for listing test cycles
pub struct GetTestCyclesTool;

#[async_trait::async_trait]
impl McpTool for GetTestCyclesTool {
    fn name(&self) -> &'static str {
        "get_test_cycles"
    }

    fn description(&self) -> &'static str {
        "List test cycles, optionally filtered by project key and folder"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "project_key": {
                    "type": "string",
                    "description": "Jira project key to filter by"
                },
                "folder_id": {
                    "type": "integer",
                    "description": "Folder ID to filter by"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Page size (1-1000, default 10)"
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
        let request: types::GetTestCyclesRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(list_test_cycles(context, request).await))
    }
}

async fn list_test_cycles(
    context: &ToolContext,
    request: types::GetTestCyclesRequest,
) -> Result<schemas::TestCyclePage> {
    let page = validation::validate_cursor_pagination(request.max_results, request.start_at)?;
    let folder_id = request
        .folder_id
        .as_ref()
        .map(|id| validation::validate_entity_id_value(id, "Folder ID"))
        .transpose()?;
    let project_key = context.optional_project_key(request.project_key);
    if let Some(key) = &project_key {
        validation::validate_project_key(&validation::sanitize(key))?;
    }
    context
        .client()?
        .list_test_cycles(project_key.as_deref(), folder_id, page)
        .await
}

/// Tool for fetching one test cycle by key or id
pub struct GetTestCycleTool;

#[async_trait::async_trait]
impl McpTool for GetTestCycleTool {
    fn name(&self) -> &'static str {
        "get_test_cycle"
    }

    fn description(&self) -> &'static str {
        "Get a test cycle by its key (e.g. PROJ-R123) or numeric ID"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_cycle_id_or_key": {
                    "type": "string",
                    "description": "Test cycle key (PROJ-R123) or numeric ID"
                }
            },
            "required": ["test_cycle_id_or_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::GetTestCycleRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(get_test_cycle(context, request).await))
    }
}

async fn get_test_cycle(
    context: &ToolContext,
    request: types::GetTestCycleRequest,
) -> Result<schemas::TestCycle> {
    let id_or_key = validation::sanitize(&request.test_cycle_id_or_key);
    validation::validate_test_cycle_id_or_key(&id_or_key)?;
    context.client()?.get_test_cycle(&id_or_key).await
}

/// Tool for creating a test cycle
pub struct CreateTestCycleTool;

#[async_trait::async_trait]
impl McpTool for CreateTestCycleTool {
    fn name(&self) -> &'static str {
        "create_test_cycle"
    }

    fn description(&self) -> &'static str {
        "Create a new test cycle"
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
                    "description": "Test cycle name (1-255 characters)"
                },
                "description": {
                    "type": "string",
                    "description": "Free-text description"
                },
                "planned_start_date": {
                    "type": "string",
                    "description": "Planned start, RFC 3339 (e.g. 2024-03-01T09:00:00Z)"
                },
                "planned_end_date": {
                    "type": "string",
                    "description": "Planned end, RFC 3339"
                },
                "jira_project_version": {
                    "type": "integer",
                    "description": "Jira project version ID"
                },
                "status_name": {
                    "type": "string",
                    "description": "Name of the status to assign"
                },
                "folder_id": {
                    "type": "integer",
                    "description": "ID of the containing folder"
                },
                "owner_id": {
                    "type": "string",
                    "description": "Jira account ID of the owner"
                },
                "custom_fields": {
                    "description": "Custom fields: JSON object or JSON object string"
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
        let request: types::CreateTestCycleRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_test_cycle(context, request).await))
    }
}

async fn create_test_cycle(
    context: &ToolContext,
    request: types::CreateTestCycleRequest,
) -> Result<schemas::CreatedResource> {
    let project_key = validation::sanitize(&context.resolve_project_key(request.project_key)?);
    validation::validate_project_key(&project_key)?;

    let name = validation::sanitize(&request.name);
    validation::validate_text_length("name", &name, 255)?;

    if let Some(date) = &request.planned_start_date {
        validation::validate_iso_datetime("planned_start_date", date)?;
    }
    if let Some(date) = &request.planned_end_date {
        validation::validate_iso_datetime("planned_end_date", date)?;
    }
    let folder_id = request
        .folder_id
        .as_ref()
        .map(|id| validation::validate_entity_id_value(id, "Folder ID"))
        .transpose()?;
    let custom_fields = request
        .custom_fields
        .as_ref()
        .map(validation::normalize_custom_fields)
        .transpose()?;

    let body = schemas::CreateTestCycleRequest {
        project_key,
        name,
        description: request.description,
        planned_start_date: request.planned_start_date,
        planned_end_date: request.planned_end_date,
        jira_project_version: request.jira_project_version,
        status_name: request.status_name.map(|n| validation::sanitize(&n)),
        folder_id,
        owner_id: request.owner_id,
        custom_fields,
    };
    context.client()?.create_test_cycle(&body).await
}

/// Tool for partially updating a test cycle (fetch-merge-put)
pub struct UpdateTestCycleTool;

#[async_trait::async_trait]
impl McpTool for UpdateTestCycleTool {
    fn name(&self) -> &'static str {
        "update_test_cycle"
    }

    fn description(&self) -> &'static str {
        "Update a test cycle; unspecified fields keep their current values"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_cycle_key": {
                    "type": "string",
                    "description": "Key of the test cycle to update, e.g. PROJ-R123"
                },
                "name": {
                    "type": "string",
                    "description": "New name (1-255 characters)"
                },
                "description": {
                    "type": "string",
                    "description": "New description"
                },
                "planned_start_date": {
                    "type": "string",
                    "description": "New planned start, RFC 3339"
                },
                "planned_end_date": {
                    "type": "string",
                    "description": "New planned end, RFC 3339"
                },
                "status_id": {
                    "type": "integer",
                    "description": "New status ID"
                },
                "folder_id": {
                    "type": "integer",
                    "description": "New containing folder ID"
                },
                "owner_id": {
                    "type": "string",
                    "description": "New owner account ID"
                },
                "custom_fields": {
                    "description": "Custom fields to overwrite: JSON object or JSON object string"
                }
            },
            "required": ["test_cycle_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::UpdateTestCycleRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(update_test_cycle(context, request).await))
    }
}

async fn update_test_cycle(
    context: &ToolContext,
    request: types::UpdateTestCycleRequest,
) -> Result<schemas::TestCycle> {
    let key = validation::sanitize(&request.test_cycle_key);
    validation::validate_test_cycle_key(&key)?;

    let name = request.name.map(|n| validation::sanitize(&n));
    if let Some(name) = &name {
        validation::validate_text_length("name", name, 255)?;
    }
    if let Some(date) = &request.planned_start_date {
        validation::validate_iso_datetime("planned_start_date", date)?;
    }
    if let Some(date) = &request.planned_end_date {
        validation::validate_iso_datetime("planned_end_date", date)?;
    }
    let update = TestCycleUpdate {
        name,
        description: request.description,
        planned_start_date: request.planned_start_date,
        planned_end_date: request.planned_end_date,
        status_id: request
            .status_id
            .as_ref()
            .map(|id| validation::validate_entity_id_value(id, "Status ID"))
            .transpose()?,
        folder_id: request
            .folder_id
            .as_ref()
            .map(|id| validation::validate_entity_id_value(id, "Folder ID"))
            .transpose()?,
        owner_id: request.owner_id,
        custom_fields: request
            .custom_fields
            .as_ref()
            .map(validation::normalize_custom_fields)
            .transpose()?,
    };
    if update.is_empty() {
        return Err(ZephyrError::validation("No fields to update were provided"));
    }
    context.client()?.update_test_cycle(&key, update).await
}

/// Tool for listing the issue and web links of a test cycle
pub struct GetTestCycleLinksTool;

#[async_trait::async_trait]
impl McpTool for GetTestCycleLinksTool {
    fn name(&self) -> &'static str {
        "get_test_cycle_links"
    }

    fn description(&self) -> &'static str {
        "List the issue links and web links of a test cycle"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_cycle_id_or_key": {
                    "type": "string",
                    "description": "Test cycle key (PROJ-R123) or numeric ID"
                }
            },
            "required": ["test_cycle_id_or_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::GetTestCycleLinksRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(get_cycle_links(context, request).await))
    }
}

async fn get_cycle_links(
    context: &ToolContext,
    request: types::GetTestCycleLinksRequest,
) -> Result<schemas::TestCaseLinks> {
    let id_or_key = validation::sanitize(&request.test_cycle_id_or_key);
    validation::validate_test_cycle_id_or_key(&id_or_key)?;
    let cycle = context.client()?.get_test_cycle(&id_or_key).await?;
    Ok(cycle.links.unwrap_or_default())
}

/// Tool for linking a test cycle to a Jira issue
pub struct CreateTestCycleIssueLinkTool;

#[async_trait::async_trait]
impl McpTool for CreateTestCycleIssueLinkTool {
    fn name(&self) -> &'static str {
        "create_test_cycle_issue_link"
    }

    fn description(&self) -> &'static str {
        "Link a test cycle to a Jira issue by its numeric issue ID"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_cycle_id_or_key": {
                    "type": "string",
                    "description": "Test cycle key (PROJ-R123) or numeric ID"
                },
                "issue_id": {
                    "type": "integer",
                    "description": "Numeric Jira issue ID (not the PROJ-123 issue key)"
                }
            },
            "required": ["test_cycle_id_or_key", "issue_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::CreateTestCycleIssueLinkRequest =
            BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_cycle_issue_link(context, request).await))
    }
}

async fn create_cycle_issue_link(
    context: &ToolContext,
    request: types::CreateTestCycleIssueLinkRequest,
) -> Result<schemas::CreatedResource> {
    let id_or_key = validation::sanitize(&request.test_cycle_id_or_key);
    validation::validate_test_cycle_id_or_key(&id_or_key)?;
    let issue_id = validation::validate_issue_id(&request.issue_id)?;
    context
        .client()?
        .create_test_cycle_issue_link(&id_or_key, issue_id)
        .await
}

/// Tool for attaching a web link to a test cycle
pub struct CreateTestCycleWebLinkTool;

#[async_trait::async_trait]
impl McpTool for CreateTestCycleWebLinkTool {
    fn name(&self) -> &'static str {
        "create_test_cycle_web_link"
    }

    fn description(&self) -> &'static str {
        "Attach a web link to a test cycle"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_cycle_id_or_key": {
                    "type": "string",
                    "description": "Test cycle key (PROJ-R123) or numeric ID"
                },
                "url": {
                    "type": "string",
                    "description": "The URL to link (http or https)"
                },
                "description": {
                    "type": "string",
                    "description": "Optional description of the link"
                }
            },
            "required": ["test_cycle_id_or_key", "url"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::CreateTestCycleWebLinkRequest =
            BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_cycle_web_link(context, request).await))
    }
}

async fn create_cycle_web_link(
    context: &ToolContext,
    request: types::CreateTestCycleWebLinkRequest,
) -> Result<schemas::CreatedResource> {
    let id_or_key = validation::sanitize(&request.test_cycle_id_or_key);
    validation::validate_test_cycle_id_or_key(&id_or_key)?;
    let url = validation::sanitize(&request.url);
    validation::validate_url(&url)?;

    let body = schemas::CreateWebLinkRequest {
        url,
        description: request.description,
    };
    context
        .client()?
        .create_test_cycle_web_link(&id_or_key, &body)
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

    #[test]
    fn test_numeric_id_passes_key_validation() {
        assert!(crate::validation::validate_test_cycle_id_or_key("123").is_ok());
        assert!(crate::validation::validate_test_cycle_id_or_key("PROJ-R42").is_ok());
    }

    #[tokio::test]
    async fn test_get_test_cycle_rejects_test_case_key() {
        let result = GetTestCycleTool
            .execute(
                args(serde_json::json!({"test_cycle_id_or_key": "PROJ-T5"})),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(message(&result).contains("PROJECT-R123"));
    }

    #[tokio::test]
    async fn test_create_test_cycle_rejects_bad_date() {
        let result = CreateTestCycleTool
            .execute(
                args(serde_json::json!({
                    "name": "Sprint 12 regression",
                    "planned_start_date": "next tuesday"
                })),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(message(&result).contains("planned_start_date"));
    }

    #[tokio::test]
    async fn test_update_with_no_fields_is_rejected() {
        let result = UpdateTestCycleTool
            .execute(
                args(serde_json::json!({"test_cycle_key": "PROJ-R1"})),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(message(&result).contains("No fields to update"));
    }
}
