//! Priority resources and requests

use serde::{Deserialize, Serialize};

use super::common::{PagedList, ProjectLink};

/// A priority as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Priority {
    /// Priority id
    pub id: i64,
    /// Owning project
    pub project: ProjectLink,
    /// Priority name (1-255 characters)
    pub name: String,
    /// Optional description (1-255 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display order index, zero-based
    pub index: i64,
    /// Whether this is the project default priority
    #[serde(default)]
    pub default: bool,
    /// Hex color code (`#RGB` or `#RRGGBB`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// REST API URL of this priority
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Paged list of priorities
pub type PriorityList = PagedList<Priority>;

/// Body for `POST /priorities`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePriorityRequest {
    /// Jira project key
    pub project_key: String,
    /// Priority name (1-255 characters)
    pub name: String,
    /// Optional description (1-255 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional hex color code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Body for `PUT /priorities/{id}` — the API requires the full resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdatePriorityRequest {
    /// Priority id, must match the path parameter
    pub id: i64,
    /// Owning project
    pub project: ProjectLink,
    /// Priority name (1-255 characters)
    pub name: String,
    /// Optional description (1-255 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display order index, zero-based
    pub index: i64,
    /// Whether this is the project default priority
    pub default: bool,
    /// Optional hex color code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Priority {
    /// Build the full-resource update body from this fetched priority,
    /// overlaying the caller-supplied fields. `None` fields keep the
    /// current value; `Some` fields win.
    pub fn into_update(
        self,
        name: Option<String>,
        description: Option<String>,
        index: Option<i64>,
        default: Option<bool>,
        color: Option<String>,
    ) -> UpdatePriorityRequest {
        UpdatePriorityRequest {
            id: self.id,
            project: self.project,
            name: name.unwrap_or(self.name),
            description: description.or(self.description),
            index: index.unwrap_or(self.index),
            default: default.unwrap_or(self.default),
            color: color.or(self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Priority {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "High",
            "index": 0,
            "default": false,
            "color": "#FF0000",
            "project": {"id": 123, "self": "https://api.example.com/v2/projects/123"}
        }))
        .unwrap()
    }

    #[test]
    fn test_priority_fixture_parses() {
        let priority = fixture();
        assert_eq!(priority.id, 1);
        assert_eq!(priority.name, "High");
        assert_eq!(priority.project.id, 123);
        assert_eq!(priority.color.as_deref(), Some("#FF0000"));
    }

    #[test]
    fn test_priority_rejects_unknown_fields() {
        let result: Result<Priority, _> = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "High",
            "index": 0,
            "project": {"id": 123},
            "bogus": true
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_wire_format() {
        let request = CreatePriorityRequest {
            project_key: "PROJ".to_string(),
            name: "Critical".to_string(),
            description: None,
            color: Some("#FF0000".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["projectKey"], "PROJ");
        assert!(json.get("description").is_none());

        let back: CreatePriorityRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_into_update_merges_partial_fields() {
        let update = fixture().into_update(
            Some("Highest".to_string()),
            None,
            None,
            Some(true),
            None,
        );
        assert_eq!(update.name, "Highest");
        assert_eq!(update.index, 0);
        assert!(update.default);
        assert_eq!(update.color.as_deref(), Some("#FF0000"));
        assert_eq!(update.project.id, 123);
    }
}
