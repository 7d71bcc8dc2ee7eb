//! Test plan resources and requests

use serde::{Deserialize, Serialize};

use super::common::{CursorPage, ProjectLink, ResourceLink};
use super::link::{IssueLink, TestCycleLink, WebLink};
use super::test_case::JiraUserLink;
use super::CustomFields;

/// Issue, web, and test cycle links attached to a test plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPlanLinks {
    /// Jira issues linked to this test plan
    #[serde(default = "Vec::new")]
    pub issues: Vec<IssueLink>,
    /// Web links attached to this test plan
    #[serde(default = "Vec::new")]
    pub web_links: Vec<WebLink>,
    /// Test cycles linked to this test plan
    #[serde(default = "Vec::new")]
    pub test_cycles: Vec<TestCycleLink>,
    /// REST API URL of the links collection
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// A test plan as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPlan {
    /// Test plan id
    pub id: i64,
    /// Test plan key, `<PROJECT>-P<digits>`
    pub key: String,
    /// Test plan name
    pub name: String,
    /// Owning project
    pub project: ProjectLink,
    /// Objective of the plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    /// Status reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceLink>,
    /// Containing folder reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<ResourceLink>,
    /// Plan owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<JiraUserLink>,
    /// Labels attached to this test plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Custom field values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
    /// Links collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<TestPlanLinks>,
    /// REST API URL of this test plan
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Cursor-paginated page of test plans
pub type TestPlanPage = CursorPage<TestPlan>;

/// Body for `POST /testplans`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTestPlanRequest {
    /// Jira project key
    pub project_key: String,
    /// Test plan name
    pub name: String,
    /// Objective of the plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    /// Containing folder id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    /// Name of the status to assign
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_plan_parses_with_links() {
        let plan: TestPlan = serde_json::from_value(serde_json::json!({
            "id": 3,
            "key": "PROJ-P3",
            "name": "Release 2.0 verification",
            "project": {"id": 123},
            "objective": "Verify all release-blocking features",
            "labels": ["release"],
            "links": {
                "issues": [{"id": 1, "issueId": 10000}],
                "webLinks": [],
                "testCycles": [{"id": 4, "testCycleId": 9}]
            }
        }))
        .unwrap();
        assert_eq!(plan.key, "PROJ-P3");
        let links = plan.links.as_ref().unwrap();
        assert_eq!(links.issues[0].issue_id, 10000);
        assert_eq!(links.test_cycles[0].test_cycle_id, Some(9));
    }

    #[test]
    fn test_create_request_wire_format() {
        let request = CreateTestPlanRequest {
            project_key: "PROJ".to_string(),
            name: "Release 2.0 verification".to_string(),
            folder_id: Some(12),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["projectKey"], "PROJ");
        assert_eq!(json["folderId"], 12);
        assert!(json.get("objective").is_none());
    }

    #[test]
    fn test_wire_round_trip_is_lossless() {
        let plan: TestPlan = serde_json::from_value(serde_json::json!({
            "id": 3,
            "key": "PROJ-P3",
            "name": "Release 2.0 verification",
            "project": {"id": 123}
        }))
        .unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        let back: TestPlan = serde_json::from_value(json).unwrap();
        assert_eq!(back, plan);
    }
}
