//! Test case resources and create/update requests
//!
//! The remote API has no PATCH endpoint for test cases: updates PUT the
//! full resource. [`TestCase::apply_update`] implements the merge step of
//! the fetch-merge-put pattern the client uses for partial updates.

use serde::{Deserialize, Serialize};

use super::common::{CursorPage, ProjectLink, ResourceLink};
use super::link::{IssueLink, WebLink};
use super::CustomFields;

/// Jira component reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JiraComponent {
    /// Component id
    pub id: i64,
    /// Component self URL
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Jira user reference by account id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUserLink {
    /// Jira user account id
    pub account_id: String,
}

/// Issue and web links attached to a test case
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseLinks {
    /// Jira issues linked to this test case
    #[serde(default = "Vec::new")]
    pub issues: Vec<IssueLink>,
    /// Web links attached to this test case
    #[serde(default = "Vec::new")]
    pub web_links: Vec<WebLink>,
    /// REST API URL of the links collection
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// A test case as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// Test case id
    pub id: i64,
    /// Test case key, `<PROJECT>-T<digits>`
    pub key: String,
    /// Test case name
    pub name: String,
    /// Owning project
    pub project: ProjectLink,
    /// Priority reference
    pub priority: ResourceLink,
    /// Status reference
    pub status: ResourceLink,
    /// Creation timestamp, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    /// Objective of the test
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    /// Preconditions for the test
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precondition: Option<String>,
    /// Estimated duration in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<i64>,
    /// Labels attached to this test case
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Jira component reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<JiraComponent>,
    /// Containing folder reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<ResourceLink>,
    /// Test case owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<JiraUserLink>,
    /// Reference to the attached test script
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_script: Option<ResourceLink>,
    /// Custom field values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
    /// Links collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<TestCaseLinks>,
    /// REST API URL of this test case
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Cursor-paginated page of test cases
pub type TestCasePage = CursorPage<TestCase>;

/// Version reference from `GET /testcases/{key}/versions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCaseVersionLink {
    /// Version id
    pub id: i64,
    /// REST API URL of the version
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Body for `POST /testcases`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTestCaseRequest {
    /// Jira project key
    pub project_key: String,
    /// Test case name
    pub name: String,
    /// Objective of the test
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    /// Preconditions for the test
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precondition: Option<String>,
    /// Estimated duration in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<i64>,
    /// Jira component id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<i64>,
    /// Name of the priority to assign
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_name: Option<String>,
    /// Name of the status to assign
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    /// Containing folder id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    /// Jira account id of the owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Labels to attach
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Custom field values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// Caller-supplied partial update for a test case. `None` fields keep
/// the fetched value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestCaseUpdate {
    /// New name
    pub name: Option<String>,
    /// New objective
    pub objective: Option<String>,
    /// New precondition
    pub precondition: Option<String>,
    /// New estimated duration in milliseconds
    pub estimated_time: Option<i64>,
    /// New priority id
    pub priority_id: Option<i64>,
    /// New status id
    pub status_id: Option<i64>,
    /// New containing folder id
    pub folder_id: Option<i64>,
    /// New owner account id
    pub owner_id: Option<String>,
    /// Replacement label set
    pub labels: Option<Vec<String>>,
    /// Custom field values to overwrite
    pub custom_fields: Option<CustomFields>,
}

impl TestCaseUpdate {
    /// Whether the update changes anything at all
    pub fn is_empty(&self) -> bool {
        self == &TestCaseUpdate::default()
    }
}

impl TestCase {
    /// Overlay a partial update onto this fetched test case, producing
    /// the full PUT body. Caller fields win; unspecified fields retain
    /// their current values. Custom fields are merged key-by-key.
    pub fn apply_update(&mut self, update: TestCaseUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if update.objective.is_some() {
            self.objective = update.objective;
        }
        if update.precondition.is_some() {
            self.precondition = update.precondition;
        }
        if update.estimated_time.is_some() {
            self.estimated_time = update.estimated_time;
        }
        if let Some(priority_id) = update.priority_id {
            self.priority = ResourceLink::new(priority_id);
        }
        if let Some(status_id) = update.status_id {
            self.status = ResourceLink::new(status_id);
        }
        if let Some(folder_id) = update.folder_id {
            self.folder = Some(ResourceLink::new(folder_id));
        }
        if let Some(owner_id) = update.owner_id {
            self.owner = Some(JiraUserLink {
                account_id: owner_id,
            });
        }
        if update.labels.is_some() {
            self.labels = update.labels;
        }
        if let Some(incoming) = update.custom_fields {
            let fields = self.custom_fields.get_or_insert_with(CustomFields::new);
            for (key, value) in incoming {
                fields.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> TestCase {
        serde_json::from_value(serde_json::json!({
            "id": 42,
            "key": "PROJ-T42",
            "name": "Check axial pump",
            "project": {"id": 123},
            "priority": {"id": 1},
            "status": {"id": 5},
            "objective": "Ensure the axial pump can be enabled",
            "estimatedTime": 138000,
            "labels": ["Regression"],
            "customFields": {"Component": "pump"}
        }))
        .unwrap()
    }

    #[test]
    fn test_test_case_fixture_parses() {
        let case = fixture();
        assert_eq!(case.key, "PROJ-T42");
        assert_eq!(case.estimated_time, Some(138000));
        assert_eq!(case.priority.id, 1);
    }

    #[test]
    fn test_wire_round_trip_is_lossless() {
        let case = fixture();
        let json = serde_json::to_value(&case).unwrap();
        assert_eq!(json["estimatedTime"], 138000);
        assert!(json.get("estimated_time").is_none());

        let back: TestCase = serde_json::from_value(json).unwrap();
        assert_eq!(back, case);
    }

    #[test]
    fn test_apply_update_overlays_caller_fields() {
        let mut case = fixture();
        case.apply_update(TestCaseUpdate {
            name: Some("Check radial pump".to_string()),
            priority_id: Some(2),
            labels: Some(vec!["Smoke".to_string()]),
            ..Default::default()
        });

        assert_eq!(case.name, "Check radial pump");
        assert_eq!(case.priority.id, 2);
        assert_eq!(case.labels, Some(vec!["Smoke".to_string()]));
        // Unspecified fields keep the fetched values
        assert_eq!(case.status.id, 5);
        assert_eq!(
            case.objective.as_deref(),
            Some("Ensure the axial pump can be enabled")
        );
        assert_eq!(case.estimated_time, Some(138000));
    }

    #[test]
    fn test_apply_update_merges_custom_fields() {
        let mut case = fixture();
        let mut fields = CustomFields::new();
        fields.insert("Sprint".to_string(), serde_json::json!("12"));
        case.apply_update(TestCaseUpdate {
            custom_fields: Some(fields),
            ..Default::default()
        });

        let merged = case.custom_fields.unwrap();
        assert_eq!(merged["Component"], "pump");
        assert_eq!(merged["Sprint"], "12");
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let mut case = fixture();
        let original = case.clone();
        assert!(TestCaseUpdate::default().is_empty());
        case.apply_update(TestCaseUpdate::default());
        assert_eq!(case, original);
    }
}
