//! Test step tools: list and bulk create

use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::error::{Result, ZephyrError};
use crate::mcp::responses::render;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types;
use crate::schemas;
use crate::schemas::test_step::TestStepsList;
use crate::schemas::TestStep;
use crate::validation;

/// Register all test step tools with the registry
pub fn register_test_step_tools(registry: &mut ToolRegistry) {
    registry.register(GetTestStepsTool);
    registry.register(CreateTestStepsTool);
}

/// Tool for listing the steps of a test case
pub struct GetTestStepsTool;

#[async_trait::async_trait]
impl McpTool for GetTestStepsTool {
    fn name(&self) -> &'static str {
        "get_test_steps"
    }

    fn description(&self) -> &'static str {
        "List the steps of a test case"
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
        let request: types::GetTestStepsRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(list_steps(context, request).await))
    }
}

async fn list_steps(
    context: &ToolContext,
    request: types::GetTestStepsRequest,
) -> Result<TestStepsList> {
    let key = validation::sanitize(&request.test_case_key);
    validation::validate_test_case_key(&key)?;
    let page = validation::validate_offset_pagination(request.max_results, request.start_at)?;
    context.client()?.get_test_steps(&key, page).await
}

/// Tool for appending or overwriting the steps of a test case
pub struct CreateTestStepsTool;

#[async_trait::async_trait]
impl McpTool for CreateTestStepsTool {
    fn name(&self) -> &'static str {
        "create_test_steps"
    }

    fn description(&self) -> &'static str {
        "Add steps to a test case, either appending to or overwriting the existing ones"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "test_case_key": {
                    "type": "string",
                    "description": "Test case key, e.g. PROJ-T123"
                },
                "mode": {
                    "type": "string",
                    "description": "APPEND or OVERWRITE"
                },
                "steps": {
                    "description": "Array of step objects (or a JSON array string); each step has either an 'inline' instruction or a 'testCase' delegation"
                }
            },
            "required": ["test_case_key", "mode", "steps"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: types::CreateTestStepsRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(render(create_steps(context, request).await))
    }
}

async fn create_steps(
    context: &ToolContext,
    request: types::CreateTestStepsRequest,
) -> Result<TestStepsList> {
    let key = validation::sanitize(&request.test_case_key);
    validation::validate_test_case_key(&key)?;
    let mode = validation::validate_steps_mode(&validation::sanitize(&request.mode))?;
    let items = parse_steps(&request.steps)?;

    let body = schemas::CreateTestStepsRequest { mode, items };
    context.client()?.create_test_steps(&key, &body).await
}

/// Accept steps as a native JSON array or as a JSON array string, and
/// enforce the inline-XOR-delegate shape of each step.
fn parse_steps(value: &serde_json::Value) -> Result<Vec<TestStep>> {
    let value = match value {
        serde_json::Value::String(raw) => serde_json::from_str(raw).map_err(|e| {
            ZephyrError::validation(format!("Field 'steps': invalid JSON array: {e}"))
        })?,
        other => other.clone(),
    };
    if !value.is_array() {
        return Err(ZephyrError::validation(
            "Field 'steps': expected an array of step objects",
        ));
    }
    let steps: Vec<TestStep> = serde_json::from_value(value)
        .map_err(|e| ZephyrError::validation(format!("Field 'steps': {e}")))?;
    if steps.is_empty() {
        return Err(ZephyrError::validation(
            "Field 'steps': at least one step is required",
        ));
    }
    for (position, step) in steps.iter().enumerate() {
        if !step.is_well_formed() {
            return Err(ZephyrError::validation(format!(
                "Field 'steps': step {} must have exactly one of 'inline' or 'testCase'",
                position + 1
            )));
        }
    }
    Ok(steps)
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
    fn test_parse_steps_accepts_json_string_encoding() {
        let steps = parse_steps(&serde_json::json!(
            "[{\"inline\": {\"description\": \"Open the login page\"}}]"
        ))
        .unwrap();
        assert_eq!(steps.len(), 1);
        assert!(steps[0].inline.is_some());
    }

    #[test]
    fn test_parse_steps_rejects_empty_array() {
        let error = parse_steps(&serde_json::json!([])).unwrap_err();
        assert!(error.to_string().contains("at least one step"));
    }

    #[test]
    fn test_parse_steps_rejects_step_with_both_variants() {
        let error = parse_steps(&serde_json::json!([{
            "inline": {"description": "do a thing"},
            "testCase": {"testCaseKey": "PROJ-T1"}
        }]))
        .unwrap_err();
        assert!(error.to_string().contains("exactly one of"));
    }

    #[tokio::test]
    async fn test_create_steps_rejects_unknown_mode() {
        let result = CreateTestStepsTool
            .execute(
                args(serde_json::json!({
                    "test_case_key": "PROJ-T1",
                    "mode": "REPLACE",
                    "steps": [{"inline": {"description": "step"}}]
                })),
                &context(),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        let msg = message(&result);
        assert!(msg.contains("REPLACE"));
        assert!(msg.contains("OVERWRITE"));
    }
}
