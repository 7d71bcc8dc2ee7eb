//! MCP tool implementations, one module per entity family

pub mod folders;
pub mod healthcheck;
pub mod priorities;
pub mod statuses;
pub mod test_cases;
pub mod test_cycles;
pub mod test_plans;
pub mod test_scripts;
pub mod test_steps;

use super::tool_registry::ToolRegistry;

/// Register every Zephyr Scale tool with the registry
pub fn register_all_tools(registry: &mut ToolRegistry) {
    healthcheck::register_healthcheck_tools(registry);
    priorities::register_priority_tools(registry);
    statuses::register_status_tools(registry);
    folders::register_folder_tools(registry);
    test_cases::register_test_case_tools(registry);
    test_steps::register_test_step_tools(registry);
    test_scripts::register_test_script_tools(registry);
    test_cycles::register_test_cycle_tools(registry);
    test_plans::register_test_plan_tools(registry);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_advertised_tool_is_registered() {
        let mut registry = ToolRegistry::new();
        register_all_tools(&mut registry);

        let expected = [
            "healthcheck",
            "get_priorities",
            "get_priority",
            "create_priority",
            "update_priority",
            "get_statuses",
            "get_status",
            "create_status",
            "update_status",
            "get_folders",
            "get_folder",
            "create_folder",
            "get_test_cases",
            "get_test_case",
            "create_test_case",
            "update_test_case",
            "get_test_case_versions",
            "get_test_case_version",
            "get_test_case_links",
            "create_issue_link",
            "create_web_link",
            "get_test_steps",
            "create_test_steps",
            "get_test_script",
            "create_test_script",
            "get_test_cycles",
            "get_test_cycle",
            "create_test_cycle",
            "update_test_cycle",
            "get_test_cycle_links",
            "create_test_cycle_issue_link",
            "create_test_cycle_web_link",
            "get_test_plans",
            "get_test_plan",
            "create_test_plan",
            "create_test_plan_issue_link",
            "create_test_plan_web_link",
            "create_test_plan_test_cycle_link",
        ];
        for name in expected {
            assert!(registry.get_tool(name).is_some(), "missing tool {name}");
        }
        assert_eq!(registry.len(), expected.len());
    }

    #[test]
    fn test_every_tool_schema_is_an_object() {
        let mut registry = ToolRegistry::new();
        register_all_tools(&mut registry);

        for name in registry.list_tool_names() {
            let tool = registry.get_tool(&name).unwrap();
            let schema = tool.schema();
            assert_eq!(schema["type"], "object", "schema of {name}");
            assert!(schema["properties"].is_object(), "schema of {name}");
            assert!(!tool.description().is_empty(), "description of {name}");
        }
    }
}
