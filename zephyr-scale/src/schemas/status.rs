//! Status resources, the status type enum, and requests

use serde::{Deserialize, Serialize};

use super::common::{PagedList, ProjectLink};

/// Entity families a status can apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusType {
    /// Status for test cases
    TestCase,
    /// Status for test plans
    TestPlan,
    /// Status for test cycles
    TestCycle,
    /// Status for test executions
    TestExecution,
}

impl StatusType {
    /// Wire-format value of this status type
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusType::TestCase => "TEST_CASE",
            StatusType::TestPlan => "TEST_PLAN",
            StatusType::TestCycle => "TEST_CYCLE",
            StatusType::TestExecution => "TEST_EXECUTION",
        }
    }

    /// All accepted wire-format values, for validation messages
    pub const VALUES: [&'static str; 4] =
        ["TEST_CASE", "TEST_PLAN", "TEST_CYCLE", "TEST_EXECUTION"];
}

/// A status as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Status {
    /// Status id
    pub id: i64,
    /// Owning project
    pub project: ProjectLink,
    /// Status name (1-255 characters)
    pub name: String,
    /// Optional description (1-255 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display order index, zero-based
    pub index: i64,
    /// Hex color code (`#RGB` or `#RRGGBB`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether the status is archived
    #[serde(default)]
    pub archived: bool,
    /// Whether this is the default status
    #[serde(default)]
    pub default: bool,
    /// REST API URL of this status
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Paged list of statuses
pub type StatusList = PagedList<Status>;

/// Body for `POST /statuses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateStatusRequest {
    /// Jira project key
    pub project_key: String,
    /// Status name (1-255 characters)
    pub name: String,
    /// Entity family the status applies to
    #[serde(rename = "type")]
    pub status_type: StatusType,
    /// Optional description (1-255 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional hex color code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Body for `PUT /statuses/{id}` — the API requires the full resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateStatusRequest {
    /// Status id, must match the path parameter
    pub id: i64,
    /// Owning project
    pub project: ProjectLink,
    /// Status name (1-255 characters)
    pub name: String,
    /// Optional description (1-255 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display order index, zero-based
    pub index: i64,
    /// Whether the status is archived
    pub archived: bool,
    /// Whether this is the default status
    pub default: bool,
    /// Optional hex color code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Status {
    /// Build the full-resource update body from this fetched status,
    /// overlaying the caller-supplied fields.
    pub fn into_update(
        self,
        name: Option<String>,
        description: Option<String>,
        index: Option<i64>,
        archived: Option<bool>,
        default: Option<bool>,
        color: Option<String>,
    ) -> UpdateStatusRequest {
        UpdateStatusRequest {
            id: self.id,
            project: self.project,
            name: name.unwrap_or(self.name),
            description: description.or(self.description),
            index: index.unwrap_or(self.index),
            archived: archived.unwrap_or(self.archived),
            default: default.unwrap_or(self.default),
            color: color.or(self.color),
        }
    }
}
