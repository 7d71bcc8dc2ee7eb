//! Tool registry for MCP operations
//!
//! Registry pattern for managing MCP tools: one boxed [`McpTool`] per
//! exposed capability, looked up by name in a single dispatch path
//! instead of a large match statement.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use rmcp::Error as McpError;

use crate::client::ZephyrClient;
use crate::error::{Result, ZephyrError};

/// Fixed message returned by every tool when the process started without
/// a usable configuration
pub const CONFIG_ERROR_MESSAGE: &str = "Zephyr Scale configuration not found. \
     Please set the ZEPHYR_SCALE_API_TOKEN environment variable.";

/// Context shared by all tools during execution.
///
/// The client is `None` when the process started without a valid
/// configuration (degraded mode); the dispatcher short-circuits every
/// call in that state, so tools can rely on [`ToolContext::client`].
#[derive(Clone)]
pub struct ToolContext {
    client: Option<Arc<ZephyrClient>>,
    default_project_key: Option<String>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(client: Option<Arc<ZephyrClient>>, default_project_key: Option<String>) -> Self {
        Self {
            client,
            default_project_key,
        }
    }

    /// Whether a configured client is available
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Get the configured client
    pub fn client(&self) -> Result<&ZephyrClient> {
        self.client
            .as_deref()
            .ok_or_else(|| ZephyrError::Configuration(CONFIG_ERROR_MESSAGE.to_string()))
    }

    /// Resolve a project key: the explicit argument wins, falling back
    /// to the configured default.
    pub fn resolve_project_key(&self, explicit: Option<String>) -> Result<String> {
        explicit
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.default_project_key.clone())
            .ok_or_else(|| {
                ZephyrError::validation(
                    "project_key is required (no default project key is configured)",
                )
            })
    }

    /// Resolve an optional project key filter: the explicit argument
    /// wins, falling back to the configured default, else `None`.
    pub fn optional_project_key(&self, explicit: Option<String>) -> Option<String> {
        explicit
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.default_project_key.clone())
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all registered tools as Tool objects for the MCP list_tools
    /// response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let serde_json::Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_request(format!("Invalid arguments: {e}"), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZephyrConfig;
    use rmcp::model::{Annotated, RawContent, RawTextContent};

    struct MockTool {
        name: &'static str,
        description: &'static str,
    }

    #[async_trait::async_trait]
    impl McpTool for MockTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            self.description
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
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            Ok(CallToolResult {
                content: vec![Annotated::new(
                    RawContent::Text(RawTextContent {
                        text: format!("Mock tool {} executed", self.name),
                    }),
                    None,
                )],
                is_error: Some(false),
            })
        }
    }

    fn configured_context() -> ToolContext {
        let config = ZephyrConfig::new("test-token");
        let client = ZephyrClient::new(&config).unwrap();
        ToolContext::new(Some(Arc::new(client)), Some("PROJ".to_string()))
    }

    #[test]
    fn test_tool_registry_creation() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_tool_registration_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "test_tool",
            description: "A test tool",
        });

        assert_eq!(registry.len(), 1);
        let tool = registry.get_tool("test_tool").unwrap();
        assert_eq!(tool.name(), "test_tool");
        assert_eq!(tool.description(), "A test tool");
        assert!(registry.get_tool("nonexistent").is_none());
    }

    #[test]
    fn test_list_tools_exposes_schema() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "tool1",
            description: "First tool",
        });
        registry.register(MockTool {
            name: "tool2",
            description: "Second tool",
        });

        let tools = registry.list_tools();
        assert_eq!(tools.len(), 2);
        assert!(tools.iter().all(|t| t.description.is_some()));

        let names = registry.list_tool_names();
        assert!(names.contains(&"tool1".to_string()));
        assert!(names.contains(&"tool2".to_string()));
    }

    #[tokio::test]
    async fn test_tool_execution() {
        let context = configured_context();
        let tool = MockTool {
            name: "exec_test",
            description: "Execution test tool",
        };

        let result = tool.execute(serde_json::Map::new(), &context).await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert!(!result.content.is_empty());
    }

    #[test]
    fn test_unconfigured_context_reports_configuration_error() {
        let context = ToolContext::new(None, None);
        assert!(!context.is_configured());
        let err = context.client().unwrap_err();
        assert!(err.to_string().contains("ZEPHYR_SCALE_API_TOKEN"));
    }

    #[test]
    fn test_resolve_project_key_prefers_explicit() {
        let context = configured_context();
        assert_eq!(
            context.resolve_project_key(Some("OTHER".to_string())).unwrap(),
            "OTHER"
        );
        assert_eq!(context.resolve_project_key(None).unwrap(), "PROJ");
        assert_eq!(context.resolve_project_key(Some(String::new())).unwrap(), "PROJ");

        let bare = ToolContext::new(None, None);
        assert!(bare.resolve_project_key(None).is_err());
    }

    #[test]
    fn test_parse_arguments() {
        use serde::Deserialize;

        #[derive(Deserialize, PartialEq, Debug)]
        struct TestArgs {
            name: String,
            count: Option<i32>,
        }

        let mut args = serde_json::Map::new();
        args.insert(
            "name".to_string(),
            serde_json::Value::String("test".to_string()),
        );
        args.insert(
            "count".to_string(),
            serde_json::Value::Number(serde_json::Number::from(42)),
        );

        let parsed: TestArgs = BaseToolImpl::parse_arguments(args).unwrap();
        assert_eq!(parsed.name, "test");
        assert_eq!(parsed.count, Some(42));
    }

    #[test]
    fn test_parse_arguments_missing_required_field() {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct TestArgs {
            #[serde(rename = "required_field")]
            _required_field: String,
        }

        let result: std::result::Result<TestArgs, McpError> =
            BaseToolImpl::parse_arguments(serde_json::Map::new());
        assert!(result.is_err());
    }
}
