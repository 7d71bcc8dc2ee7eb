//! Test script tools: get and create/replace

use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::error::Result;
use crate::mcp::responses::render;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types;
use crate::schemas;
use crate::validation;

/// Register all test script tools with the registry
pub fn register_test_script_tools(registry: &mut ToolRegistry) {
    registry.register(GetTestScriptTool);
    registry.register(CreateTestScriptTool);
}

/// Tool for fetching the script of a test case
pub struct GetTestScriptTool;

#[async_trait::async_trait]
impl McpTool for GetTestScriptTool {
    fn name(&self) -> &'static str {
        "get_test_script"
    }

    fn description(&self) -> &'static str {
        "Get the test script of a test case"
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
        let request: types::GetTestScriptRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(get_script(context, request).await))
    }
}

async fn get_script(
    context: &ToolContext,
    request: types::GetTestScriptRequest,
) -> Result<schemas::TestScript> {
    let key = validation::sanitize(&request.test_case_key);
    validation::validate_test_case_key(&key)?;
    context.client()?.get_test_script(&key).await
}

/// Tool for creating or replacing the script of a test case
pub struct CreateTestScriptTool;

#[async_trait::async_trait]
impl McpTool for CreateTestScriptTool {
    fn name(&self) -> &'static str {
        "create_test_script"
    }

    fn description(&self) -> &'static str {
        "Create or replace the test script of a test case"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_case_key": {
                    "type": "string",
                    "description": "Test case key, e.g. PROJ-T123"
                },
                "script_type": {
                    "type": "string",
                    "description": "Script format: plain or bdd"
                },
                "text": {
                    "type": "string",
                    "description": "The script content"
                }
            },
            "required": ["test_case_key", "script_type", "text"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::CreateTestScriptRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_script(context, request).await))
    }
}

async fn create_script(
    context: &ToolContext,
    request: types::CreateTestScriptRequest,
) -> Result<schemas::CreatedResource> {
    let key = validation::sanitize(&request.test_case_key);
    validation::validate_test_case_key(&key)?;
    let script_type = validation::validate_script_type(&validation::sanitize(&request.script_type))?;
    if request.text.is_empty() {
        return Err(crate::error::ZephyrError::validation(
            "Field 'text': must not be empty",
        ));
    }

    let body = schemas::CreateTestScriptRequest {
        script_type,
        text: request.text,
    };
    context.client()?.create_test_script(&key, &body).await
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
    async fn test_create_script_rejects_uppercase_type() {
        // the wire format is lowercase: "plain" or "bdd"
        let result = CreateTestScriptTool
            .execute(
                args(serde_json::json!({
                    "test_case_key": "PROJ-T1",
                    "script_type": "BDD",
                    "text": "Given a user"
                })),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(message(&result).contains("bdd"));
    }

    #[tokio::test]
    async fn test_create_script_rejects_empty_text() {
        let result = CreateTestScriptTool
            .execute(
                args(serde_json::json!({
                    "test_case_key": "PROJ-T1",
                    "script_type": "plain",
                    "text": ""
                })),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(message(&result).contains("text"));
    }
}
