//! Test cycle resources and create/update requests
//!
//! Like test cases, cycles have no PATCH endpoint; updates PUT the full
//! resource assembled by [`TestCycle::apply_update`].

use serde::{Deserialize, Serialize};

use super::common::{CursorPage, ProjectLink, ResourceLink};
use super::test_case::{JiraUserLink, TestCaseLinks};
use super::CustomFields;

/// A test cycle as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCycle {
    /// Test cycle id
    pub id: i64,
    /// Test cycle key, `<PROJECT>-R<digits>`
    pub key: String,
    /// Test cycle name
    pub name: String,
    /// Owning project
    pub project: ProjectLink,
    /// Jira project version id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira_project_version: Option<ResourceLink>,
    /// Status reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceLink>,
    /// Containing folder reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<ResourceLink>,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Planned start date, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<String>,
    /// Planned end date, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_end_date: Option<String>,
    /// Cycle owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<JiraUserLink>,
    /// Custom field values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
    /// Links collection (issues and web links)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<TestCaseLinks>,
    /// REST API URL of this cycle
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Cursor-paginated page of test cycles
pub type TestCyclePage = CursorPage<TestCycle>;

/// Body for `POST /testcycles`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTestCycleRequest {
    /// Jira project key
    pub project_key: String,
    /// Test cycle name
    pub name: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Planned start date, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<String>,
    /// Planned end date, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_end_date: Option<String>,
    /// Jira project version id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira_project_version: Option<i64>,
    /// Name of the status to assign
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    /// Containing folder id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    /// Jira account id of the owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Custom field values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// Caller-supplied partial update for a test cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestCycleUpdate {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New planned start date, RFC 3339
    pub planned_start_date: Option<String>,
    /// New planned end date, RFC 3339
    pub planned_end_date: Option<String>,
    /// New status id
    pub status_id: Option<i64>,
    /// New containing folder id
    pub folder_id: Option<i64>,
    /// New owner account id
    pub owner_id: Option<String>,
    /// Custom field values to overwrite
    pub custom_fields: Option<CustomFields>,
}

impl TestCycleUpdate {
    /// Whether the update changes anything at all
    pub fn is_empty(&self) -> bool {
        self == &TestCycleUpdate::default()
    }
}

impl TestCycle {
    /// Overlay a partial update onto this fetched cycle, producing the
    /// full PUT body. Caller fields win; unspecified fields retain their
    /// current values. Custom fields are merged key-by-key.
    pub fn apply_update(&mut self, update: TestCycleUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        if update.planned_start_date.is_some() {
            self.planned_start_date = update.planned_start_date;
        }
        if update.planned_end_date.is_some() {
            self.planned_end_date = update.planned_end_date;
        }
        if let Some(status_id) = update.status_id {
            self.status = Some(ResourceLink::new(status_id));
        }
        if let Some(folder_id) = update.folder_id {
            self.folder = Some(ResourceLink::new(folder_id));
        }
        if let Some(owner_id) = update.owner_id {
            self.owner = Some(JiraUserLink {
                account_id: owner_id,
            });
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

    fn fixture() -> TestCycle {
        serde_json::from_value(serde_json::json!({
            "id": 9,
            "key": "PROJ-R9",
            "name": "Sprint 12 regression",
            "project": {"id": 123},
            "status": {"id": 4},
            "plannedStartDate": "2024-03-01T09:00:00Z",
            "plannedEndDate": "2024-03-08T17:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_cycle_fixture_parses() {
        let cycle = fixture();
        assert_eq!(cycle.key, "PROJ-R9");
        assert_eq!(
            cycle.planned_start_date.as_deref(),
            Some("2024-03-01T09:00:00Z")
        );
    }

    #[test]
    fn test_apply_update_preserves_unspecified_fields() {
        let mut cycle = fixture();
        cycle.apply_update(TestCycleUpdate {
            description: Some("Full regression pass".to_string()),
            status_id: Some(6),
            ..Default::default()
        });

        assert_eq!(cycle.name, "Sprint 12 regression");
        assert_eq!(cycle.description.as_deref(), Some("Full regression pass"));
        assert_eq!(cycle.status.as_ref().unwrap().id, 6);
        assert_eq!(
            cycle.planned_end_date.as_deref(),
            Some("2024-03-08T17:00:00Z")
        );
    }

    #[test]
    fn test_wire_round_trip_is_lossless() {
        let cycle = fixture();
        let json = serde_json::to_value(&cycle).unwrap();
        let back: TestCycle = serde_json::from_value(json).unwrap();
        assert_eq!(back, cycle);
    }
}
