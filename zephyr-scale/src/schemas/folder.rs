//! Folder resources, the folder type enum, and requests

use serde::{Deserialize, Serialize};

use super::common::{PagedList, ProjectLink};

/// Entity families a folder can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FolderType {
    /// Folder holding test cases
    TestCase,
    /// Folder holding test plans
    TestPlan,
    /// Folder holding test cycles
    TestCycle,
}

impl FolderType {
    /// Wire-format value of this folder type
    pub fn as_str(&self) -> &'static str {
        match self {
            FolderType::TestCase => "TEST_CASE",
            FolderType::TestPlan => "TEST_PLAN",
            FolderType::TestCycle => "TEST_CYCLE",
        }
    }

    /// All accepted wire-format values, for validation messages
    pub const VALUES: [&'static str; 3] = ["TEST_CASE", "TEST_PLAN", "TEST_CYCLE"];
}

/// A folder as returned by the API. Folders form a tree via `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Folder id
    pub id: i64,
    /// Id of the parent folder; `None` for root folders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    /// Folder name (1-255 characters)
    pub name: String,
    /// Display order index
    #[serde(default)]
    pub index: i64,
    /// Entity family this folder contains
    pub folder_type: FolderType,
    /// Owning project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectLink>,
    /// REST API URL of this folder
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Paged list of folders
pub type FolderList = PagedList<Folder>;

/// Body for `POST /folders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateFolderRequest {
    /// Id of the parent folder; omit for a root folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    /// Folder name (1-255 characters)
    pub name: String,
    /// Jira project key
    pub project_key: String,
    /// Entity family this folder will contain
    pub folder_type: FolderType,
}
