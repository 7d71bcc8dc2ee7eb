//! Folder tools: list, get, create

use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::error::Result;
use crate::mcp::responses::render;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types;
use crate::schemas;
use crate::schemas::folder::FolderList;
use crate::validation;

/// Register all folder tools with the registry
pub fn register_folder_tools(registry: &mut ToolRegistry) {
    registry.register(GetFoldersTool);
    registry.register(GetFolderTool);
    registry.register(CreateFolderTool);
}

/// Tool for listing folders
pub struct GetFoldersTool;

#[async_trait::async_trait]
impl McpTool for GetFoldersTool {
    fn name(&self) -> &'static str {
        "get_folders"
    }

    fn description(&self) -> &'static str {
        "List folders, optionally filtered by project key and folder type"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "project_key": {
                    "type": "string",
                    "description": "Jira project key to filter by"
                },
                "folder_type": {
                    "type": "string",
                    "description": "Filter: TEST_CASE, TEST_PLAN, or TEST_CYCLE"
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
        let request: types::GetFoldersRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(list_folders(context, request).await))
    }
}

async fn list_folders(
    context: &ToolContext,
    request: types::GetFoldersRequest,
) -> Result<FolderList> {
    let page = validation::validate_offset_pagination(request.max_results, request.start_at)?;
    let folder_type = request
        .folder_type
        .map(|t| validation::validate_folder_type(&validation::sanitize(&t)))
        .transpose()?;
    let project_key = context.optional_project_key(request.project_key);
    if let Some(key) = &project_key {
        validation::validate_project_key(&validation::sanitize(key))?;
    }
    context
        .client()?
        .list_folders(project_key.as_deref(), folder_type, page)
        .await
}

/// Tool for fetching one folder by id
pub struct GetFolderTool;

#[async_trait::async_trait]
impl McpTool for GetFolderTool {
    fn name(&self) -> &'static str {
        "get_folder"
    }

    fn description(&self) -> &'static str {
        "Get a folder by its numeric ID"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "folder_id": {
                    "type": "integer",
                    "description": "ID of the folder to fetch"
                }
            },
            "required": ["folder_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::GetFolderRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(get_folder(context, request).await))
    }
}

async fn get_folder(
    context: &ToolContext,
    request: types::GetFolderRequest,
) -> Result<schemas::Folder> {
    let folder_id = validation::validate_entity_id_value(&request.folder_id, "Folder ID")?;
    context.client()?.get_folder(folder_id).await
}

/// Tool for creating a folder
pub struct CreateFolderTool;

#[async_trait::async_trait]
impl McpTool for CreateFolderTool {
    fn name(&self) -> &'static str {
        "create_folder"
    }

    fn description(&self) -> &'static str {
        "Create a folder for test cases, test plans, or test cycles"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Folder name (1-255 characters)"
                },
                "project_key": {
                    "type": "string",
                    "description": "Jira project key (falls back to the configured default)"
                },
                "folder_type": {
                    "type": "string",
                    "description": "TEST_CASE, TEST_PLAN, or TEST_CYCLE"
                },
                "parent_id": {
                    "type": "integer",
                    "description": "ID of the parent folder; omit for a root folder"
                }
            },
            "required": ["name", "folder_type"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::CreateFolderRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_folder(context, request).await))
    }
}

async fn create_folder(
    context: &ToolContext,
    request: types::CreateFolderRequest,
) -> Result<schemas::CreatedResource> {
    let project_key = validation::sanitize(&context.resolve_project_key(request.project_key)?);
    validation::validate_project_key(&project_key)?;

    let name = validation::sanitize(&request.name);
    validation::validate_text_length("name", &name, 255)?;

    let folder_type = validation::validate_folder_type(&validation::sanitize(&request.folder_type))?;

    let parent_id = request
        .parent_id
        .as_ref()
        .map(|id| validation::validate_entity_id_value(id, "Parent ID"))
        .transpose()?;

    let body = schemas::CreateFolderRequest {
        parent_id,
        name,
        project_key,
        folder_type,
    };
    context.client()?.create_folder(&body).await
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
    async fn test_create_folder_rejects_non_numeric_parent() {
        let result = CreateFolderTool
            .execute(
                args(serde_json::json!({
                    "name": "Regression",
                    "folder_type": "TEST_CASE",
                    "parent_id": "invalid"
                })),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(message(&result).contains("valid integer"));
    }

    #[tokio::test]
    async fn test_create_folder_rejects_zero_parent() {
        let result = CreateFolderTool
            .execute(
                args(serde_json::json!({
                    "name": "Regression",
                    "folder_type": "TEST_CASE",
                    "parent_id": "0"
                })),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(message(&result).contains("positive integer"));
    }

    #[tokio::test]
    async fn test_create_folder_rejects_execution_type() {
        // TEST_EXECUTION is a status type, not a folder type
        let result = CreateFolderTool
            .execute(
                args(serde_json::json!({
                    "name": "Runs",
                    "folder_type": "TEST_EXECUTION"
                })),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(message(&result).contains("Valid types:"));
    }
}
