//! Test case tools: list, get, create, update, versions, links

use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::error::{Result, ZephyrError};
use crate::mcp::responses::render;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types;
use crate::schemas;
use crate::schemas::{PagedList, TestCaseUpdate, TestCaseVersionLink};
use crate::validation;

/// Register all test case tools with the registry
pub fn register_test_case_tools(registry: &mut ToolRegistry) {
    registry.register(GetTestCasesTool);
    registry.register(GetTestCaseTool);
    registry.register(CreateTestCaseTool);
    registry.register(UpdateTestCaseTool);
    registry.register(GetTestCaseVersionsTool);
    registry.register(GetTestCaseVersionTool);
    registry.register(GetTestCaseLinksTool);
    registry.register(CreateIssueLinkTool);
    registry.register(CreateWebLinkTool);
}

/// Tool for listing test cases
pub struct GetTestCasesTool;

#[async_trait::async_trait]
impl McpTool for GetTestCasesTool {
    fn name(&self) -> &'static str {
        "get_test_cases"
    }

    fn description(&self) -> &'static str {
        "List test cases, optionally filtered by project key and folder"
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
        let request: types::GetTestCasesRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(list_test_cases(context, request).await))
    }
}

async fn list_test_cases(
    context: &ToolContext,
    request: types::GetTestCasesRequest,
) -> Result<schemas::TestCasePage> {
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
        .list_test_cases(project_key.as_deref(), folder_id, page)
        .await
}

/// Tool for fetching one test case by key
pub struct GetTestCaseTool;

#[async_trait::async_trait]
impl McpTool for GetTestCaseTool {
    fn name(&self) -> &'static str {
        "get_test_case"
    }

    fn description(&self) -> &'static str {
        "Get a test case by its key (e.g. PROJ-T123)"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_case_key": {
                    "type": "string",
                    "description": "Test case key, e.g. PROJ-T123"
                }
            },
            "required": ["test_case_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::GetTestCaseRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(get_test_case(context, request).await))
    }
}

async fn get_test_case(
    context: &ToolContext,
    request: types::GetTestCaseRequest,
) -> Result<schemas::TestCase> {
    let key = validation::sanitize(&request.test_case_key);
    validation::validate_test_case_key(&key)?;
    context.client()?.get_test_case(&key).await
}

/// Tool for creating a test case
pub struct CreateTestCaseTool;

#[async_trait::async_trait]
impl McpTool for CreateTestCaseTool {
    fn name(&self) -> &'static str {
        "create_test_case"
    }

    fn description(&self) -> &'static str {
        "Create a new test case"
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
                    "description": "Test case name (1-255 characters)"
                },
                "objective": {
                    "type": "string",
                    "description": "Objective of the test"
                },
                "precondition": {
                    "type": "string",
                    "description": "Preconditions for the test"
                },
                "estimated_time": {
                    "type": "integer",
                    "description": "Estimated duration in milliseconds"
                },
                "component_id": {
                    "type": "integer",
                    "description": "Jira component ID"
                },
                "priority_name": {
                    "type": "string",
                    "description": "Name of the priority to assign"
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
        let request: types::CreateTestCaseRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_test_case(context, request).await))
    }
}

async fn create_test_case(
    context: &ToolContext,
    request: types::CreateTestCaseRequest,
) -> Result<schemas::CreatedResource> {
    let project_key = validation::sanitize(&context.resolve_project_key(request.project_key)?);
    validation::validate_project_key(&project_key)?;

    let name = validation::sanitize(&request.name);
    validation::validate_text_length("name", &name, 255)?;

    if let Some(estimated_time) = request.estimated_time {
        if estimated_time < 0 {
            return Err(ZephyrError::validation(
                "Field 'estimated_time': must be non-negative",
            ));
        }
    }
    let component_id = request
        .component_id
        .as_ref()
        .map(|id| validation::validate_entity_id_value(id, "Component ID"))
        .transpose()?;
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

    let body = schemas::CreateTestCaseRequest {
        project_key,
        name,
        objective: request.objective,
        precondition: request.precondition,
        estimated_time: request.estimated_time,
        component_id,
        priority_name: request.priority_name.map(|n| validation::sanitize(&n)),
        status_name: request.status_name.map(|n| validation::sanitize(&n)),
        folder_id,
        owner_id: request.owner_id,
        labels,
        custom_fields,
    };
    context.client()?.create_test_case(&body).await
}

/// Tool for partially updating a test case (fetch-merge-put)
pub struct UpdateTestCaseTool;

#[async_trait::async_trait]
impl McpTool for UpdateTestCaseTool {
    fn name(&self) -> &'static str {
        "update_test_case"
    }

    fn description(&self) -> &'static str {
        "Update a test case; unspecified fields keep their current values"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_case_key": {
                    "type": "string",
                    "description": "Key of the test case to update, e.g. PROJ-T123"
                },
                "name": {
                    "type": "string",
                    "description": "New name (1-255 characters)"
                },
                "objective": {
                    "type": "string",
                    "description": "New objective"
                },
                "precondition": {
                    "type": "string",
                    "description": "New precondition"
                },
                "estimated_time": {
                    "type": "integer",
                    "description": "New estimated duration in milliseconds"
                },
                "priority_id": {
                    "type": "integer",
                    "description": "New priority ID"
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
                "labels": {
                    "description": "Replacement labels: array, JSON array string, or comma-separated string"
                },
                "custom_fields": {
                    "description": "Custom fields to overwrite: JSON object or JSON object string"
                }
            },
            "required": ["test_case_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::UpdateTestCaseRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(update_test_case(context, request).await))
    }
}

async fn update_test_case(
    context: &ToolContext,
    request: types::UpdateTestCaseRequest,
) -> Result<schemas::TestCase> {
    let key = validation::sanitize(&request.test_case_key);
    validation::validate_test_case_key(&key)?;

    let name = request.name.map(|n| validation::sanitize(&n));
    if let Some(name) = &name {
        validation::validate_text_length("name", name, 255)?;
    }
    let update = TestCaseUpdate {
        name,
        objective: request.objective,
        precondition: request.precondition,
        estimated_time: request.estimated_time,
        priority_id: request
            .priority_id
            .as_ref()
            .map(|id| validation::validate_entity_id_value(id, "Priority ID"))
            .transpose()?,
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
        labels: request
            .labels
            .as_ref()
            .map(validation::normalize_labels)
            .transpose()?,
        custom_fields: request
            .custom_fields
            .as_ref()
            .map(validation::normalize_custom_fields)
            .transpose()?,
    };
    if update.is_empty() {
        return Err(ZephyrError::validation("No fields to update were provided"));
    }
    context.client()?.update_test_case(&key, update).await
}

/// Tool for listing versions of a test case
pub struct GetTestCaseVersionsTool;

#[async_trait::async_trait]
impl McpTool for GetTestCaseVersionsTool {
    fn name(&self) -> &'static str {
        "get_test_case_versions"
    }

    fn description(&self) -> &'static str {
        "List all versions of a test case"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_case_key": {
                    "type": "string",
                    "description": "Test case key, e.g. PROJ-T123"
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
            "required": ["test_case_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::GetTestCaseVersionsRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(list_versions(context, request).await))
    }
}

async fn list_versions(
    context: &ToolContext,
    request: types::GetTestCaseVersionsRequest,
) -> Result<PagedList<TestCaseVersionLink>> {
    let key = validation::sanitize(&request.test_case_key);
    validation::validate_test_case_key(&key)?;
    let page = validation::validate_offset_pagination(request.max_results, request.start_at)?;
    context.client()?.list_test_case_versions(&key, page).await
}

/// Tool for fetching a specific version of a test case
pub struct GetTestCaseVersionTool;

#[async_trait::async_trait]
impl McpTool for GetTestCaseVersionTool {
    fn name(&self) -> &'static str {
        "get_test_case_version"
    }

    fn description(&self) -> &'static str {
        "Get a specific version of a test case"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_case_key": {
                    "type": "string",
                    "description": "Test case key, e.g. PROJ-T123"
                },
                "version": {
                    "type": "integer",
                    "description": "Version number to fetch"
                }
            },
            "required": ["test_case_key", "version"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::GetTestCaseVersionRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(get_version(context, request).await))
    }
}

async fn get_version(
    context: &ToolContext,
    request: types::GetTestCaseVersionRequest,
) -> Result<schemas::TestCase> {
    let key = validation::sanitize(&request.test_case_key);
    validation::validate_test_case_key(&key)?;
    let version = validation::validate_entity_id_value(&request.version, "Version")?;
    context.client()?.get_test_case_version(&key, version).await
}

/// Tool for listing the issue and web links of a test case
pub struct GetTestCaseLinksTool;

#[async_trait::async_trait]
impl McpTool for GetTestCaseLinksTool {
    fn name(&self) -> &'static str {
        "get_test_case_links"
    }

    fn description(&self) -> &'static str {
        "List the issue links and web links of a test case"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_case_key": {
                    "type": "string",
                    "description": "Test case key, e.g. PROJ-T123"
                }
            },
            "required": ["test_case_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::GetTestCaseLinksRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(get_links(context, request).await))
    }
}

async fn get_links(
    context: &ToolContext,
    request: types::GetTestCaseLinksRequest,
) -> Result<schemas::TestCaseLinks> {
    let key = validation::sanitize(&request.test_case_key);
    validation::validate_test_case_key(&key)?;
    context.client()?.get_test_case_links(&key).await
}

/// Tool for linking a test case to a Jira issue
pub struct CreateIssueLinkTool;

#[async_trait::async_trait]
impl McpTool for CreateIssueLinkTool {
    fn name(&self) -> &'static str {
        "create_issue_link"
    }

    fn description(&self) -> &'static str {
        "Link a test case to a Jira issue by its numeric issue ID"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_case_key": {
                    "type": "string",
                    "description": "Test case key, e.g. PROJ-T123"
                },
                "issue_id": {
                    "type": "integer",
                    "description": "Numeric Jira issue ID (not the PROJ-123 issue key)"
                }
            },
            "required": ["test_case_key", "issue_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::CreateIssueLinkRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_issue_link(context, request).await))
    }
}

async fn create_issue_link(
    context: &ToolContext,
    request: types::CreateIssueLinkRequest,
) -> Result<schemas::CreatedResource> {
    let key = validation::sanitize(&request.test_case_key);
    validation::validate_test_case_key(&key)?;
    let issue_id = validation::validate_issue_id(&request.issue_id)?;
    context
        .client()?
        .create_test_case_issue_link(&key, issue_id)
        .await
}

/// Tool for attaching a web link to a test case
pub struct CreateWebLinkTool;

#[async_trait::async_trait]
impl McpTool for CreateWebLinkTool {
    fn name(&self) -> &'static str {
        "create_web_link"
    }

    fn description(&self) -> &'static str {
        "Attach a web link to a test case"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_case_key": {
                    "type": "string",
                    "description": "Test case key, e.g. PROJ-T123"
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
            "required": ["test_case_key", "url"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::CreateWebLinkRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_web_link(context, request).await))
    }
}

async fn create_web_link(
    context: &ToolContext,
    request: types::CreateWebLinkRequest,
) -> Result<schemas::CreatedResource> {
    let key = validation::sanitize(&request.test_case_key);
    validation::validate_test_case_key(&key)?;
    let url = validation::sanitize(&request.url);
    validation::validate_url(&url)?;

    let body = schemas::CreateWebLinkRequest {
        url,
        description: request.description,
    };
    context.client()?.create_test_case_web_link(&key, &body).await
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
    async fn test_get_test_case_rejects_malformed_key() {
        let result = GetTestCaseTool
            .execute(args(serde_json::json!({"test_case_key": "PROJ-123"})), &context())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        let envelope = envelope(&result);
        assert_eq!(envelope["errorCode"], 400);
        assert!(envelope["message"]
            .as_str()
            .unwrap()
            .contains("PROJECT-T123"));
    }

    #[tokio::test]
    async fn test_issue_link_rejects_issue_key_with_hint() {
        let result = CreateIssueLinkTool
            .execute(
                args(serde_json::json!({
                    "test_case_key": "PROJ-T1",
                    "issue_id": "PROJ-1234"
                })),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        let message = envelope(&result)["message"].as_str().unwrap().to_string();
        assert!(message.contains("issue key"));
        assert!(message.contains("PROJ-1234"));
        assert!(message.contains("Atlassian/Jira MCP tool"));
    }

    #[tokio::test]
    async fn test_update_with_no_fields_is_rejected() {
        let result = UpdateTestCaseTool
            .execute(args(serde_json::json!({"test_case_key": "PROJ-T1"})), &context())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(envelope(&result)["message"]
            .as_str()
            .unwrap()
            .contains("No fields to update"));
    }

    #[tokio::test]
    async fn test_create_test_case_rejects_malformed_labels_json() {
        let result = CreateTestCaseTool
            .execute(
                args(serde_json::json!({
                    "name": "Check login",
                    "labels": "[\"unterminated"
                })),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(envelope(&result)["errorCode"], 400);
    }

    #[tokio::test]
    async fn test_web_link_rejects_non_http_url() {
        let result = CreateWebLinkTool
            .execute(
                args(serde_json::json!({
                    "test_case_key": "PROJ-T1",
                    "url": "ftp://example.com"
                })),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }
}
