//! Schemas shared across resource families

use serde::{Deserialize, Serialize};

/// Reference to another resource by id, with an optional self link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLink {
    /// Resource id
    pub id: i64,
    /// REST API URL of the referenced resource
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

impl ResourceLink {
    /// Reference a resource by id alone
    pub fn new(id: i64) -> Self {
        Self {
            id,
            self_link: None,
        }
    }
}

/// Reference to the owning Jira project
pub type ProjectLink = ResourceLink;

/// Offset-paginated list envelope (`startAt`/`maxResults` family)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
    /// Zero-indexed offset of the first item
    pub start_at: i64,
    /// Page size the server applied
    pub max_results: i64,
    /// Total number of matching items
    #[serde(default)]
    pub total: i64,
    /// Whether this is the final page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_last: Option<bool>,
    /// URL of the next page, when the server provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Cursor-paginated list envelope (`startAtId` family used by the
/// newer list endpoints; the `next` URL carries the opaque cursor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPage<T> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
    /// URL of the next page; absent on the final page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Page size the server applied, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
}

/// Minimal response body returned by create endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedResource {
    /// Id of the created resource
    pub id: i64,
    /// Key of the created resource, for keyed entities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// REST API URL of the created resource
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_link_self_field_rename() {
        let json = r#"{"id": 123, "self": "https://api.example.com/v2/projects/123"}"#;
        let link: ResourceLink = serde_json::from_str(json).unwrap();
        assert_eq!(link.id, 123);
        assert_eq!(
            link.self_link.as_deref(),
            Some("https://api.example.com/v2/projects/123")
        );

        let back = serde_json::to_value(&link).unwrap();
        assert!(back.get("self").is_some());
        assert!(back.get("self_link").is_none());
    }

    #[test]
    fn test_paged_list_defaults() {
        let json = r#"{"startAt": 0, "maxResults": 50}"#;
        let page: PagedList<ResourceLink> = serde_json::from_str(json).unwrap();
        assert!(page.values.is_empty());
        assert_eq!(page.total, 0);
        assert!(page.is_last.is_none());
    }

    #[test]
    fn test_cursor_page_next_link() {
        let json = r#"{"values": [{"id": 1}], "next": "https://api.example.com/v2/testcases?startAtId=7"}"#;
        let page: CursorPage<ResourceLink> = serde_json::from_str(json).unwrap();
        assert_eq!(page.values.len(), 1);
        assert!(page.next.as_deref().unwrap().contains("startAtId=7"));
    }

    #[test]
    fn test_created_resource_round_trip() {
        let created = CreatedResource {
            id: 42,
            key: Some("PROJ-T42".to_string()),
            self_link: None,
        };
        let json = serde_json::to_string(&created).unwrap();
        let back: CreatedResource = serde_json::from_str(&json).unwrap();
        assert_eq!(created, back);
    }
}
