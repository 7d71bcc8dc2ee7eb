//! Argument structs for MCP tool requests
//!
//! One struct per tool, deserialized from the raw argument map by
//! `BaseToolImpl::parse_arguments`. Fields that callers habitually pass
//! in more than one encoding (ids as strings, labels as CSV or JSON)
//! stay as `serde_json::Value` here and go through the normalizers in
//! [`crate::validation`] before any network call.

use serde::Deserialize;
use serde_json::Value;

// ---- priorities ----

/// Arguments for the `get_priorities` tool
#[derive(Debug, Default, Deserialize)]
pub struct GetPrioritiesRequest {
    /// Project key filter
    pub project_key: Option<String>,
    /// Page size (1-1000, default 50)
    pub max_results: Option<i64>,
    /// Zero-based offset (default 0)
    pub start_at: Option<i64>,
}

/// Arguments for the `get_priority` tool
#[derive(Debug, Deserialize)]
pub struct GetPriorityRequest {
    /// Id of the priority to fetch
    pub priority_id: Value,
}

/// Arguments for the `create_priority` tool
#[derive(Debug, Deserialize)]
pub struct CreatePriorityRequest {
    /// Project key; falls back to the configured default
    pub project_key: Option<String>,
    /// Priority name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional hex color (`#RGB` or `#RRGGBB`)
    pub color: Option<String>,
}

/// Arguments for the `update_priority` tool
#[derive(Debug, Deserialize)]
pub struct UpdatePriorityRequest {
    /// Id of the priority to update
    pub priority_id: Value,
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New display order index
    pub index: Option<i64>,
    /// New default flag
    pub default: Option<bool>,
    /// New hex color
    pub color: Option<String>,
}

// ---- statuses ----

/// Arguments for the `get_statuses` tool
#[derive(Debug, Default, Deserialize)]
pub struct GetStatusesRequest {
    /// Project key filter
    pub project_key: Option<String>,
    /// Status type filter (TEST_CASE, TEST_PLAN, TEST_CYCLE, TEST_EXECUTION)
    pub status_type: Option<String>,
    /// Page size (1-1000, default 50)
    pub max_results: Option<i64>,
    /// Zero-based offset (default 0)
    pub start_at: Option<i64>,
}

/// Arguments for the `get_status` tool
#[derive(Debug, Deserialize)]
pub struct GetStatusRequest {
    /// Id of the status to fetch
    pub status_id: Value,
}

/// Arguments for the `create_status` tool
#[derive(Debug, Deserialize)]
pub struct CreateStatusRequest {
    /// Project key; falls back to the configured default
    pub project_key: Option<String>,
    /// Status name
    pub name: String,
    /// Entity family the status applies to
    pub status_type: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional hex color
    pub color: Option<String>,
}

/// Arguments for the `update_status` tool
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// Id of the status to update
    pub status_id: Value,
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New display order index
    pub index: Option<i64>,
    /// New archived flag
    pub archived: Option<bool>,
    /// New default flag
    pub default: Option<bool>,
    /// New hex color
    pub color: Option<String>,
}

// ---- folders ----

/// Arguments for the `get_folders` tool
#[derive(Debug, Default, Deserialize)]
pub struct GetFoldersRequest {
    /// Project key filter
    pub project_key: Option<String>,
    /// Folder type filter (TEST_CASE, TEST_PLAN, TEST_CYCLE)
    pub folder_type: Option<String>,
    /// Page size (1-1000, default 50)
    pub max_results: Option<i64>,
    /// Zero-based offset (default 0)
    pub start_at: Option<i64>,
}

/// Arguments for the `get_folder` tool
#[derive(Debug, Deserialize)]
pub struct GetFolderRequest {
    /// Id of the folder to fetch
    pub folder_id: Value,
}

/// Arguments for the `create_folder` tool
#[derive(Debug, Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name
    pub name: String,
    /// Project key; falls back to the configured default
    pub project_key: Option<String>,
    /// Entity family the folder will contain
    pub folder_type: String,
    /// Id of the parent folder; omit for a root folder
    pub parent_id: Option<Value>,
}

// ---- test cases ----

/// Arguments for the `get_test_cases` tool
#[derive(Debug, Default, Deserialize)]
pub struct GetTestCasesRequest {
    /// Project key filter
    pub project_key: Option<String>,
    /// Folder filter
    pub folder_id: Option<Value>,
    /// Page size (1-1000, default 10)
    pub max_results: Option<i64>,
    /// Zero-based offset (default 0)
    pub start_at: Option<i64>,
}

/// Arguments for the `get_test_case` tool
#[derive(Debug, Deserialize)]
pub struct GetTestCaseRequest {
    /// Test case key, e.g. `PROJ-T123`
    pub test_case_key: String,
}

/// Arguments for the `create_test_case` tool
#[derive(Debug, Deserialize)]
pub struct CreateTestCaseRequest {
    /// Project key; falls back to the configured default
    pub project_key: Option<String>,
    /// Test case name
    pub name: String,
    /// Objective of the test
    pub objective: Option<String>,
    /// Preconditions for the test
    pub precondition: Option<String>,
    /// Estimated duration in milliseconds
    pub estimated_time: Option<i64>,
    /// Jira component id
    pub component_id: Option<Value>,
    /// Name of the priority to assign
    pub priority_name: Option<String>,
    /// Name of the status to assign
    pub status_name: Option<String>,
    /// Containing folder id
    pub folder_id: Option<Value>,
    /// Jira account id of the owner
    pub owner_id: Option<String>,
    /// Labels: native array, JSON array string, or CSV string
    pub labels: Option<Value>,
    /// Custom fields: native object or JSON object string
    pub custom_fields: Option<Value>,
}

/// Arguments for the `update_test_case` tool
#[derive(Debug, Deserialize)]
pub struct UpdateTestCaseRequest {
    /// Key of the test case to update
    pub test_case_key: String,
    /// New name
    pub name: Option<String>,
    /// New objective
    pub objective: Option<String>,
    /// New precondition
    pub precondition: Option<String>,
    /// New estimated duration in milliseconds
    pub estimated_time: Option<i64>,
    /// New priority id
    pub priority_id: Option<Value>,
    /// New status id
    pub status_id: Option<Value>,
    /// New containing folder id
    pub folder_id: Option<Value>,
    /// New owner account id
    pub owner_id: Option<String>,
    /// Replacement labels: native array, JSON array string, or CSV string
    pub labels: Option<Value>,
    /// Custom fields to overwrite: native object or JSON object string
    pub custom_fields: Option<Value>,
}

/// Arguments for the `get_test_case_versions` tool
#[derive(Debug, Deserialize)]
pub struct GetTestCaseVersionsRequest {
    /// Test case key
    pub test_case_key: String,
    /// Page size (1-1000, default 50)
    pub max_results: Option<i64>,
    /// Zero-based offset (default 0)
    pub start_at: Option<i64>,
}

/// Arguments for the `get_test_case_version` tool
#[derive(Debug, Deserialize)]
pub struct GetTestCaseVersionRequest {
    /// Test case key
    pub test_case_key: String,
    /// Version number to fetch
    pub version: Value,
}

/// Arguments for the `get_test_case_links` tool
#[derive(Debug, Deserialize)]
pub struct GetTestCaseLinksRequest {
    /// Test case key
    pub test_case_key: String,
}

/// Arguments for the `create_issue_link` tool
#[derive(Debug, Deserialize)]
pub struct CreateIssueLinkRequest {
    /// Test case key
    pub test_case_key: String,
    /// Numeric Jira issue id (not the "PROJ-123" key)
    pub issue_id: Value,
}

/// Arguments for the `create_web_link` tool
#[derive(Debug, Deserialize)]
pub struct CreateWebLinkRequest {
    /// Test case key
    pub test_case_key: String,
    /// The link URL
    pub url: String,
    /// Optional human-readable description
    pub description: Option<String>,
}

// ---- test steps ----

/// Arguments for the `get_test_steps` tool
#[derive(Debug, Deserialize)]
pub struct GetTestStepsRequest {
    /// Test case key
    pub test_case_key: String,
    /// Page size (1-1000, default 50)
    pub max_results: Option<i64>,
    /// Zero-based offset (default 0)
    pub start_at: Option<i64>,
}

/// Arguments for the `create_test_steps` tool
#[derive(Debug, Deserialize)]
pub struct CreateTestStepsRequest {
    /// Test case key
    pub test_case_key: String,
    /// APPEND or OVERWRITE
    pub mode: String,
    /// Steps: native array of step objects or a JSON array string
    pub steps: Value,
}

// ---- test scripts ----

/// Arguments for the `get_test_script` tool
#[derive(Debug, Deserialize)]
pub struct GetTestScriptRequest {
    /// Test case key
    pub test_case_key: String,
}

/// Arguments for the `create_test_script` tool
#[derive(Debug, Deserialize)]
pub struct CreateTestScriptRequest {
    /// Test case key
    pub test_case_key: String,
    /// Script format: plain or bdd
    pub script_type: String,
    /// Script content
    pub text: String,
}

// ---- test cycles ----

/// Arguments for the `get_test_cycles` tool
#[derive(Debug, Default, Deserialize)]
pub struct GetTestCyclesRequest {
    /// Project key filter
    pub project_key: Option<String>,
    /// Folder filter
    pub folder_id: Option<Value>,
    /// Page size (1-1000, default 10)
    pub max_results: Option<i64>,
    /// Zero-based offset (default 0)
    pub start_at: Option<i64>,
}

/// Arguments for the `get_test_cycle` tool
#[derive(Debug, Deserialize)]
pub struct GetTestCycleRequest {
    /// Test cycle key (`PROJ-R123`) or numeric id
    pub test_cycle_id_or_key: String,
}

/// Arguments for the `create_test_cycle` tool
#[derive(Debug, Deserialize)]
pub struct CreateTestCycleRequest {
    /// Project key; falls back to the configured default
    pub project_key: Option<String>,
    /// Test cycle name
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Planned start date, RFC 3339
    pub planned_start_date: Option<String>,
    /// Planned end date, RFC 3339
    pub planned_end_date: Option<String>,
    /// Jira project version id
    pub jira_project_version: Option<i64>,
    /// Name of the status to assign
    pub status_name: Option<String>,
    /// Containing folder id
    pub folder_id: Option<Value>,
    /// Jira account id of the owner
    pub owner_id: Option<String>,
    /// Custom fields: native object or JSON object string
    pub custom_fields: Option<Value>,
}

/// Arguments for the `update_test_cycle` tool
#[derive(Debug, Deserialize)]
pub struct UpdateTestCycleRequest {
    /// Key of the test cycle to update
    pub test_cycle_key: String,
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New planned start date, RFC 3339
    pub planned_start_date: Option<String>,
    /// New planned end date, RFC 3339
    pub planned_end_date: Option<String>,
    /// New status id
    pub status_id: Option<Value>,
    /// New containing folder id
    pub folder_id: Option<Value>,
    /// New owner account id
    pub owner_id: Option<String>,
    /// Custom fields to overwrite: native object or JSON object string
    pub custom_fields: Option<Value>,
}

/// Arguments for the `get_test_cycle_links` tool
#[derive(Debug, Deserialize)]
pub struct GetTestCycleLinksRequest {
    /// Test cycle key or numeric id
    pub test_cycle_id_or_key: String,
}

/// Arguments for the `create_test_cycle_issue_link` tool
#[derive(Debug, Deserialize)]
pub struct CreateTestCycleIssueLinkRequest {
    /// Test cycle key or numeric id
    pub test_cycle_id_or_key: String,
    /// Numeric Jira issue id (not the "PROJ-123" key)
    pub issue_id: Value,
}

/// Arguments for the `create_test_cycle_web_link` tool
#[derive(Debug, Deserialize)]
pub struct CreateTestCycleWebLinkRequest {
    /// Test cycle key or numeric id
    pub test_cycle_id_or_key: String,
    /// The link URL
    pub url: String,
    /// Optional human-readable description
    pub description: Option<String>,
}

// ---- test plans ----

/// Arguments for the `get_test_plans` tool
#[derive(Debug, Default, Deserialize)]
pub struct GetTestPlansRequest {
    /// Project key filter
    pub project_key: Option<String>,
    /// Page size (1-1000, default 10)
    pub max_results: Option<i64>,
    /// Zero-based offset (default 0)
    pub start_at: Option<i64>,
}

/// Arguments for the `get_test_plan` tool
#[derive(Debug, Deserialize)]
pub struct GetTestPlanRequest {
    /// Test plan key (`PROJ-P123`) or numeric id
    pub test_plan_id_or_key: String,
}

/// Arguments for the `create_test_plan` tool
#[derive(Debug, Deserialize)]
pub struct CreateTestPlanRequest {
    /// Project key; falls back to the configured default
    pub project_key: Option<String>,
    /// Test plan name
    pub name: String,
    /// Objective of the plan
    pub objective: Option<String>,
    /// Containing folder id
    pub folder_id: Option<Value>,
    /// Name of the status to assign
    pub status_name: Option<String>,
    /// Jira account id of the owner
    pub owner_id: Option<String>,
    /// Labels: native array, JSON array string, or CSV string
    pub labels: Option<Value>,
    /// Custom fields: native object or JSON object string
    pub custom_fields: Option<Value>,
}

/// Arguments for the `create_test_plan_issue_link` tool
#[derive(Debug, Deserialize)]
pub struct CreateTestPlanIssueLinkRequest {
    /// Test plan key or numeric id
    pub test_plan_id_or_key: String,
    /// Numeric Jira issue id (not the "PROJ-123" key)
    pub issue_id: Value,
}

/// Arguments for the `create_test_plan_web_link` tool
#[derive(Debug, Deserialize)]
pub struct CreateTestPlanWebLinkRequest {
    /// Test plan key or numeric id
    pub test_plan_id_or_key: String,
    /// The link URL
    pub url: String,
    /// Optional human-readable description
    pub description: Option<String>,
}

/// Arguments for the `create_test_plan_test_cycle_link` tool
#[derive(Debug, Deserialize)]
pub struct CreateTestPlanCycleLinkRequest {
    /// Test plan key or numeric id
    pub test_plan_id_or_key: String,
    /// Test cycle key or numeric id to link
    pub test_cycle_id_or_key: String,
}
