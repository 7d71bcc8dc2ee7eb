//! Issue, web, and test cycle link resources and requests
//!
//! Links attach to test cases, test cycles, and test plans. Issue links
//! reference a Jira issue by its numeric id (never by its "PROJ-123"
//! key); web links carry a free-form URL.

use serde::{Deserialize, Serialize};

/// Relationship type of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueLinkType {
    /// The linked issue is covered by the test artifact
    Coverage,
    /// The linked issue blocks the test artifact
    Blocks,
    /// General relation
    Related,
}

/// A link to a Jira issue, as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLink {
    /// Link id
    pub id: i64,
    /// Numeric Jira issue id
    pub issue_id: i64,
    /// Jira Cloud REST API endpoint for the issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Relationship type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<IssueLinkType>,
    /// REST API URL of this link
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// A web link, as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebLink {
    /// Link id
    pub id: i64,
    /// The link URL
    pub url: String,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Relationship type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<IssueLinkType>,
    /// REST API URL of this link
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// A link from a test plan to a test cycle, as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCycleLink {
    /// Link id
    pub id: i64,
    /// Id of the linked test cycle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_cycle_id: Option<i64>,
    /// REST API URL of this link
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Body for the `POST .../links/issues` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateIssueLinkRequest {
    /// Numeric Jira issue id (not the "PROJ-123" key)
    pub issue_id: i64,
}

/// Body for the `POST .../links/weblinks` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateWebLinkRequest {
    /// The link URL
    pub url: String,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for `POST /testplans/{key}/links/testcycles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTestCycleLinkRequest {
    /// Id or key of the test cycle to link
    pub test_cycle_id_or_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_link_parses() {
        let link: IssueLink = serde_json::from_value(serde_json::json!({
            "id": 1,
            "issueId": 10000,
            "target": "https://jira.atlassian.net/rest/api/2/issue/10000",
            "type": "COVERAGE"
        }))
        .unwrap();
        assert_eq!(link.issue_id, 10000);
        assert_eq!(link.link_type, Some(IssueLinkType::Coverage));
    }

    #[test]
    fn test_issue_link_request_wire_format() {
        let request = CreateIssueLinkRequest { issue_id: 12345 };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"issueId": 12345}));
    }

    #[test]
    fn test_web_link_round_trip() {
        let request = CreateWebLinkRequest {
            url: "https://atlassian.com".to_string(),
            description: Some("A link to atlassian.com".to_string()),
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: CreateWebLinkRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_link_type_rejects_unknown_value() {
        let result: Result<IssueLinkType, _> = serde_json::from_str("\"DUPLICATES\"");
        assert!(result.is_err());
    }
}
