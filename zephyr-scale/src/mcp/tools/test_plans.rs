//! Test plan tools: list, get, create, links

use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::error::Result;
use crate::mcp::responses::render;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types;
use crate::schemas;
use crate::validation;

/// Register all test plan tools with the registry
pub fn register_test_plan_tools(registry: &mut ToolRegistry) {
    registry.register(GetTestPlansTool);
    registry.register(GetTestPlanTool);
    registry.register(CreateTestPlanTool);
    registry.register(CreateTestPlanIssueLinkTool);
    registry.register(CreateTestPlanWebLinkTool);
    registry.register(CreateTestPlanCycleLinkTool);
}

/// Tool for listing test plans
pub struct GetTestPlansTool;

#[async_trait::async_trait]
impl McpTool for GetTestPlansTool {
    fn name(&self) -> &'static str {
        "get_test_plans"
    }

    fn description(&self) -> &'static str {
        "List test plans, optionally filtered by project key"
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
        let request: types::GetTestPlansRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(list_test_plans(context, request).await))
    }
}

async fn list_test_plans(
    context: &ToolContext,
    request: types::GetTestPlansRequest,
) -> Result<schemas::TestPlanPage> {
    let page = validation::validate_cursor_pagination(request.max_results, request.start_at)?;
    let project_key = context.optional_project_key(request.project_key);
    if let Some(key) = &project_key {
        validation::validate_project_key(&validation::sanitize(key))?;
    }
    context
        .client()?
        .list_test_plans(project_key.as_deref(), page)
        .await
}

/// Tool for fetching one test plan by key or id
pub struct GetTestPlanTool;

#[async_trait::async_trait]
impl McpTool for GetTestPlanTool {
    fn name(&self) -> &'static str {
        "get_test_plan"
    }

    fn description(&self) -> &'static str {
        "Get a test plan by its key (e.g. PROJ-P123) or numeric ID"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_plan_id_or_key": {
                    "type": "string",
                    "description": "Test plan key (PROJ-P123) or numeric ID"
                }
            },
            "required": ["test_plan_id_or_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::GetTestPlanRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(get_test_plan(context, request).await))
    }
}

async fn get_test_plan(
    context: &ToolContext,
    request: types::GetTestPlanRequest,
) -> Result<schemas::TestPlan> {
    let id_or_key = validation::sanitize(&request.test_plan_id_or_key);
    validation::validate_test_plan_id_or_key(&id_or_key)?;
    context.client()?.get_test_plan(&id_or_key).await
}

/// Tool for creating a test plan
pub struct CreateTestPlanTool;

#[async_trait::async_trait]
impl McpTool for CreateTestPlanTool {
    fn name(&self) -> &'static str {
        "create_test_plan"
    }

    fn description(&self) -> &'static str {
        "Create a new test plan"
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
                    "description": "Test plan name (1-255 characters)"
                },
                "objective": {
                    "type": "string",
                    "description": "Objective of the plan"
                },
                "folder_id": {
                    "type": "integer",
                    "description": "ID of the containing folder"
                },
                "status_name": {
                    "type": "string",
                    "description": "Name of the status to assign"
                },
                "owner_id": {
                    "type": "string",
                    "description": "Jira account ID of the owner"
                },
                "labels": {
                    "description": "Labels: array of strings, JSON array string, or comma-separated string"
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
        let request: types::CreateTestPlanRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_test_plan(context, request).await))
    }
}

async fn create_test_plan(
    context: &ToolContext,
    request: types::CreateTestPlanRequest,
) -> Result<schemas::CreatedResource> {
    let project_key = validation::sanitize(&context.resolve_project_key(request.project_key)?);
    validation::validate_project_key(&project_key)?;

    let name = validation::sanitize(&request.name);
    validation::validate_text_length("name", &name, 255)?;

    let folder_id = request
        .folder_id
        .as_ref()
        .map(|id| validation::validate_entity_id_value(id, "Folder ID"))
        .transpose()?;
    let labels = request
        .labels
        .as_ref()
        .map(validation::normalize_labels)
        .transpose()?;
    let custom_fields = request
        .custom_fields
        .as_ref()
        .map(validation::normalize_custom_fields)
        .transpose()?;

    let body = schemas::CreateTestPlanRequest {
        project_key,
        name,
        objective: request.objective,
        folder_id,
        status_name: request.status_name.map(|n| validation::sanitize(&n)),
        owner_id: request.owner_id,
        labels,
        custom_fields,
    };
    context.client()?.create_test_plan(&body).await
}

/// Tool for linking a test plan to a Jira issue
pub struct CreateTestPlanIssueLinkTool;

#[async_trait::async_trait]
impl McpTool for CreateTestPlanIssueLinkTool {
    fn name(&self) -> &'static str {
        "create_test_plan_issue_link"
    }

    fn description(&self) -> &'static str {
        "Link a test plan to a Jira issue by its numeric issue ID"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_plan_id_or_key": {
                    "type": "string",
                    "description": "Test plan key (PROJ-P123) or numeric ID"
                },
                "issue_id": {
                    "type": "integer",
                    "description": "Numeric Jira issue ID (not the PROJ-123 issue key)"
                }
            },
            "required": ["test_plan_id_or_key", "issue_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::CreateTestPlanIssueLinkRequest =
            BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_plan_issue_link(context, request).await))
    }
}

async fn create_plan_issue_link(
    context: &ToolContext,
    request: types::CreateTestPlanIssueLinkRequest,
) -> Result<schemas::CreatedResource> {
    let id_or_key = validation::sanitize(&request.test_plan_id_or_key);
    validation::validate_test_plan_id_or_key(&id_or_key)?;
    let issue_id = validation::validate_issue_id(&request.issue_id)?;
    context
        .client()?
        .create_test_plan_issue_link(&id_or_key, issue_id)
        .await
}

/// Tool for attaching a web link to a test plan
pub struct CreateTestPlanWebLinkTool;

#[async_trait::async_trait]
impl McpTool for CreateTestPlanWebLinkTool {
    fn name(&self) -> &'static str {
        "create_test_plan_web_link"
    }

    fn description(&self) -> &'static str {
        "Attach a web link to a test plan"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_plan_id_or_key": {
                    "type": "string",
                    "description": "Test plan key (PROJ-P123) or numeric ID"
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
            "required": ["test_plan_id_or_key", "url"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::CreateTestPlanWebLinkRequest =
            BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_plan_web_link(context, request).await))
    }
}

async fn create_plan_web_link(
    context: &ToolContext,
    request: types::CreateTestPlanWebLinkRequest,
) -> Result<schemas::CreatedResource> {
    let id_or_key = validation::sanitize(&request.test_plan_id_or_key);
    validation::validate_test_plan_id_or_key(&id_or_key)?;
    let url = validation::sanitize(&request.url);
    validation::validate_url(&url)?;

    let body = schemas::CreateWebLinkRequest {
        url,
        description: request.description,
    };
    context
        .client()?
        .create_test_plan_web_link(&id_or_key, &body)
        .await
}

/// Tool for linking a test cycle to a test plan
pub struct CreateTestPlanCycleLinkTool;

#[async_trait::async_trait]
impl McpTool for CreateTestPlanCycleLinkTool {
    fn name(&self) -> &'static str {
        "create_test_plan_test_cycle_link"
    }

    fn description(&self) -> &'static str {
        "Link an existing test cycle to a test plan"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_plan_id_or_key": {
                    "type": "string",
                    "description": "Test plan key (PROJ-P123) or numeric ID"
                },
                "test_cycle_id_or_key": {
                    "type": "string",
                    "description": "Test cycle key (PROJ-R123) or numeric ID to link"
                }
            },
            "required": ["test_plan_id_or_key", "test_cycle_id_or_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::CreateTestPlanCycleLinkRequest =
            BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_plan_cycle_link(context, request).await))
    }
}

async fn create_plan_cycle_link(
    context: &ToolContext,
    request: types::CreateTestPlanCycleLinkRequest,
) -> Result<schemas::CreatedResource> {
    let plan = validation::sanitize(&request.test_plan_id_or_key);
    validation::validate_test_plan_id_or_key(&plan)?;
    let cycle = validation::sanitize(&request.test_cycle_id_or_key);
    validation::validate_test_cycle_id_or_key(&cycle)?;

    let body = schemas::CreateTestCycleLinkRequest {
        test_cycle_id_or_key: cycle,
    };
    context
        .client()?
        .create_test_plan_test_cycle_link(&plan, &body)
        .await
}
