//! Input validation and normalization for tool arguments
//!
//! Every caller-facing constraint lives here, enforced before any network
//! call is made. Validators return [`ZephyrError::Validation`] with
//! field-qualified messages; normalizers additionally map the several
//! accepted wire encodings of a parameter (CSV string, JSON-encoded
//! string, native value) onto one internal type.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::{Result, ZephyrError};
use crate::schemas::{CustomFields, FolderType, ScriptType, StatusType, TestStepsMode};

/// Default page size for offset-paginated endpoints
pub const OFFSET_DEFAULT_MAX_RESULTS: u32 = 50;
/// Default page size for cursor-paginated endpoints
pub const CURSOR_DEFAULT_MAX_RESULTS: u32 = 10;
/// Upper bound on `max_results` for every list endpoint
pub const MAX_RESULTS_LIMIT: u32 = 1000;
/// Upper bound on `start_at` for offset-paginated endpoints
pub const START_AT_LIMIT: u32 = 1_000_000;

static PROJECT_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Z0-9_]*$").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

static TEST_CASE_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Z0-9_]*-T[0-9]+$").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

static TEST_CYCLE_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Z0-9_]*-R[0-9]+$").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

static TEST_PLAN_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Z0-9_]*-P[0-9]+$").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

static ISSUE_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*-[0-9]+$").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$")
        .unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

/// Validated pagination window, ready to use as query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page size
    pub max_results: u32,
    /// Zero-based offset of the first result
    pub start_at: u32,
}

/// Strip surrounding whitespace and embedded NUL bytes from user input
pub fn sanitize(value: &str) -> String {
    value.trim().replace('\0', "")
}

/// Validate a Jira project key: uppercase alphanumeric plus underscore,
/// starting with a letter, at most 10 characters
pub fn validate_project_key(project_key: &str) -> Result<()> {
    if project_key.is_empty() {
        return Err(ZephyrError::validation("Project key is required"));
    }
    if !PROJECT_KEY_RE.is_match(project_key) {
        return Err(ZephyrError::validation(format!(
            "Project key '{project_key}' is invalid. Must start with a letter and \
             contain only uppercase letters, numbers, and underscores."
        )));
    }
    if project_key.len() > 10 {
        return Err(ZephyrError::validation(
            "Project key cannot exceed 10 characters",
        ));
    }
    Ok(())
}

/// Validate a test case key of the form `PROJECT-T123`
pub fn validate_test_case_key(key: &str) -> Result<()> {
    if TEST_CASE_KEY_RE.is_match(key) {
        Ok(())
    } else {
        Err(ZephyrError::validation(format!(
            "Test case key '{key}' is invalid. Expected format: PROJECT-T123"
        )))
    }
}

/// Validate a test cycle key of the form `PROJECT-R123`
pub fn validate_test_cycle_key(key: &str) -> Result<()> {
    if TEST_CYCLE_KEY_RE.is_match(key) {
        Ok(())
    } else {
        Err(ZephyrError::validation(format!(
            "Test cycle key '{key}' is invalid. Expected format: PROJECT-R123"
        )))
    }
}

/// Validate a test plan key of the form `PROJECT-P123`
pub fn validate_test_plan_key(key: &str) -> Result<()> {
    if TEST_PLAN_KEY_RE.is_match(key) {
        Ok(())
    } else {
        Err(ZephyrError::validation(format!(
            "Test plan key '{key}' is invalid. Expected format: PROJECT-P123"
        )))
    }
}

/// Validate a value that may reference a test cycle by numeric id or by
/// its `PROJECT-R123` key
pub fn validate_test_cycle_id_or_key(value: &str) -> Result<()> {
    if let Ok(id) = value.parse::<i64>() {
        validate_entity_id(id, "Test cycle ID").map(|_| ())
    } else {
        validate_test_cycle_key(value)
    }
}

/// Validate a value that may reference a test plan by numeric id or by
/// its `PROJECT-P123` key
pub fn validate_test_plan_id_or_key(value: &str) -> Result<()> {
    if let Ok(id) = value.parse::<i64>() {
        validate_entity_id(id, "Test plan ID").map(|_| ())
    } else {
        validate_test_plan_key(value)
    }
}

fn check_pagination(
    max_results: Option<i64>,
    start_at: Option<i64>,
    default_max_results: u32,
) -> Result<Pagination> {
    let mut errors = Vec::new();

    if let Some(max_results) = max_results {
        if max_results < 1 {
            errors.push("max_results must be at least 1".to_string());
        } else if max_results > i64::from(MAX_RESULTS_LIMIT) {
            errors.push("max_results cannot exceed 1000".to_string());
        }
    }

    if let Some(start_at) = start_at {
        if start_at < 0 {
            errors.push("start_at must be non-negative".to_string());
        } else if start_at > i64::from(START_AT_LIMIT) {
            errors.push("start_at cannot exceed 1,000,000".to_string());
        }
    }

    if !errors.is_empty() {
        return Err(ZephyrError::Validation(errors));
    }

    Ok(Pagination {
        max_results: max_results.map_or(default_max_results, |v| v as u32),
        start_at: start_at.map_or(0, |v| v as u32),
    })
}

/// Validate pagination for offset-style endpoints (priorities, statuses,
/// folders, test steps, versions). Defaults to 50 results from offset 0.
pub fn validate_offset_pagination(
    max_results: Option<i64>,
    start_at: Option<i64>,
) -> Result<Pagination> {
    check_pagination(max_results, start_at, OFFSET_DEFAULT_MAX_RESULTS)
}

/// Validate pagination for cursor-style endpoints (test cases, test
/// cycles, test plans). Defaults to 10 results from offset 0.
pub fn validate_cursor_pagination(
    max_results: Option<i64>,
    start_at: Option<i64>,
) -> Result<Pagination> {
    check_pagination(max_results, start_at, CURSOR_DEFAULT_MAX_RESULTS)
}

/// Validate a hex color string: `#RGB` or `#RRGGBB`
pub fn validate_color(color: &str) -> Result<()> {
    if HEX_COLOR_RE.is_match(color) {
        Ok(())
    } else {
        Err(ZephyrError::validation(format!(
            "Color '{color}' is invalid. Must be a hex color in #RGB or #RRGGBB format."
        )))
    }
}

/// Validate a numeric entity id (priority, status, folder, ...): must be
/// a positive integer. `what` names the field in the error message.
pub fn validate_entity_id(id: i64, what: &str) -> Result<i64> {
    if id >= 1 {
        Ok(id)
    } else {
        Err(ZephyrError::validation(format!(
            "{what} must be a positive integer, got {id}"
        )))
    }
}

/// Validate an entity id supplied as a string (tool arguments often
/// arrive stringly-typed). `what` names the field in the error message.
pub fn validate_entity_id_str(raw: &str, what: &str) -> Result<i64> {
    match sanitize(raw).parse::<i64>() {
        Ok(id) => validate_entity_id(id, what),
        Err(_) => Err(ZephyrError::validation(format!(
            "{what} must be a valid integer, got '{raw}'"
        ))),
    }
}

/// Validate an entity id that may arrive as a JSON number or a string
/// (tool callers are loosely typed)
pub fn validate_entity_id_value(raw: &Value, what: &str) -> Result<i64> {
    match raw {
        Value::Number(n) => match n.as_i64() {
            Some(id) => validate_entity_id(id, what),
            None => Err(ZephyrError::validation(format!(
                "{what} must be a valid integer, got {n}"
            ))),
        },
        Value::String(s) => validate_entity_id_str(s, what),
        other => Err(ZephyrError::validation(format!(
            "{what} must be a valid integer, got {other}"
        ))),
    }
}

/// Validate a Jira issue id, guarding against the most common caller
/// mistake: passing the human-readable issue key ("PROJ-1234") where the
/// numeric id is required. The key-shaped case gets its own branch and
/// message so the caller learns how to recover, not just that the input
/// was wrong.
pub fn validate_issue_id(raw: &Value) -> Result<i64> {
    match raw {
        Value::Number(n) => match n.as_i64() {
            Some(id) if id >= 1 => Ok(id),
            _ => Err(ZephyrError::validation(format!(
                "Issue ID must be a positive integer, got {n}"
            ))),
        },
        Value::String(s) => {
            let s = sanitize(s);
            if let Ok(id) = s.parse::<i64>() {
                return if id >= 1 {
                    Ok(id)
                } else {
                    Err(ZephyrError::validation(format!(
                        "Issue ID must be a positive integer, got {id}"
                    )))
                };
            }
            if ISSUE_KEY_RE.is_match(&s) {
                Err(ZephyrError::validation(format!(
                    "'{s}' looks like an issue key, but issue ID must be a positive \
                     integer. Use the Atlassian/Jira MCP tool to resolve the issue \
                     key to its numeric ID first."
                )))
            } else {
                Err(ZephyrError::validation(format!(
                    "Issue ID must be a positive integer, got '{s}'. If you only have \
                     the issue key, use the Atlassian/Jira MCP tool to resolve it to \
                     a numeric ID first."
                )))
            }
        }
        other => Err(ZephyrError::validation(format!(
            "Issue ID must be a positive integer, got {other}"
        ))),
    }
}

/// Validate a status type value against the accepted wire formats
pub fn validate_status_type(value: &str) -> Result<StatusType> {
    serde_json::from_value(Value::String(value.to_string())).map_err(|_| {
        ZephyrError::validation(format!(
            "Invalid status type '{value}'. Valid types: {}",
            StatusType::VALUES.join(", ")
        ))
    })
}

/// Validate a folder type value against the accepted wire formats
pub fn validate_folder_type(value: &str) -> Result<FolderType> {
    serde_json::from_value(Value::String(value.to_string())).map_err(|_| {
        ZephyrError::validation(format!(
            "Invalid folder type '{value}'. Valid types: {}",
            FolderType::VALUES.join(", ")
        ))
    })
}

/// Validate a test script type value against the accepted wire formats
pub fn validate_script_type(value: &str) -> Result<ScriptType> {
    serde_json::from_value(Value::String(value.to_string())).map_err(|_| {
        ZephyrError::validation(format!(
            "Invalid script type '{value}'. Valid types: {}",
            ScriptType::VALUES.join(", ")
        ))
    })
}

/// Validate a test steps mode value against the accepted wire formats
pub fn validate_steps_mode(value: &str) -> Result<TestStepsMode> {
    serde_json::from_value(Value::String(value.to_string())).map_err(|_| {
        ZephyrError::validation(format!(
            "Invalid test steps mode '{value}'. Valid modes: {}",
            TestStepsMode::VALUES.join(", ")
        ))
    })
}

/// Validate a free-text field length. `field` names the parameter in the
/// error message; `max` is the inclusive character limit.
pub fn validate_text_length(field: &str, value: &str, max: usize) -> Result<()> {
    if value.is_empty() {
        return Err(ZephyrError::validation(format!(
            "Field '{field}': must not be empty"
        )));
    }
    if value.chars().count() > max {
        return Err(ZephyrError::validation(format!(
            "Field '{field}': cannot exceed {max} characters"
        )));
    }
    Ok(())
}

/// Validate an RFC 3339 timestamp string such as `2024-03-01T09:00:00Z`
pub fn validate_iso_datetime(field: &str, value: &str) -> Result<()> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|_| ())
        .map_err(|e| {
            ZephyrError::validation(format!(
                "Field '{field}': '{value}' is not a valid ISO 8601 datetime ({e})"
            ))
        })
}

/// Validate an http(s) URL
pub fn validate_url(value: &str) -> Result<()> {
    let parsed = url::Url::parse(value)
        .map_err(|e| ZephyrError::validation(format!("URL '{value}' is invalid: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ZephyrError::validation(format!(
            "URL '{value}' is invalid: unsupported scheme '{scheme}'"
        ))),
    }
}

/// Normalize the accepted encodings of a labels parameter into one list.
///
/// Accepts a native JSON array of strings, a JSON-encoded array string
/// (`"[\"a\", \"b\"]"`), or a comma-separated string (`"a, b"`). Blank
/// entries are dropped.
pub fn normalize_labels(raw: &Value) -> Result<Vec<String>> {
    fn from_array(values: &[Value]) -> Result<Vec<String>> {
        values
            .iter()
            .map(|v| match v {
                Value::String(s) => Ok(sanitize(s)),
                other => Err(ZephyrError::validation(format!(
                    "Labels must be strings, got {other}"
                ))),
            })
            .filter(|r| !matches!(r, Ok(s) if s.is_empty()))
            .collect()
    }

    match raw {
        Value::Array(values) => from_array(values),
        Value::String(s) => {
            let s = sanitize(s);
            if s.starts_with('[') {
                let parsed: Value = serde_json::from_str(&s).map_err(|e| {
                    ZephyrError::validation(format!("Labels string is not valid JSON: {e}"))
                })?;
                match parsed {
                    Value::Array(values) => from_array(&values),
                    other => Err(ZephyrError::validation(format!(
                        "Labels JSON must be an array of strings, got {other}"
                    ))),
                }
            } else {
                Ok(s.split(',')
                    .map(|label| label.trim().to_string())
                    .filter(|label| !label.is_empty())
                    .collect())
            }
        }
        other => Err(ZephyrError::validation(format!(
            "Labels must be a list of strings, a JSON array string, or a \
             comma-separated string, got {other}"
        ))),
    }
}

/// Normalize the accepted encodings of a custom-fields parameter into
/// one mapping. Accepts a native JSON object or a JSON-encoded object
/// string (`"{\"Sprint\": \"12\"}"`).
pub fn normalize_custom_fields(raw: &Value) -> Result<CustomFields> {
    match raw {
        Value::Object(map) => Ok(map.clone()),
        Value::String(s) => {
            let parsed: Value = serde_json::from_str(s).map_err(|e| {
                ZephyrError::validation(format!("Custom fields string is not valid JSON: {e}"))
            })?;
            match parsed {
                Value::Object(map) => Ok(map),
                other => Err(ZephyrError::validation(format!(
                    "Custom fields JSON must be an object, got {other}"
                ))),
            }
        }
        other => Err(ZephyrError::validation(format!(
            "Custom fields must be a JSON object or a JSON object string, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_text(err: ZephyrError) -> String {
        err.to_string()
    }

    #[test]
    fn test_project_key_accepts_valid_keys() {
        for key in ["PROJ", "A", "ABC_123", "A123456789"] {
            assert!(validate_project_key(key).is_ok(), "key '{key}'");
        }
    }

    #[test]
    fn test_project_key_rejects_invalid_keys() {
        for key in ["", "proj", "1ABC", "ABC-1", "TOOLONGKEY1"] {
            assert!(validate_project_key(key).is_err(), "key '{key}'");
        }
        let msg = error_text(validate_project_key("TOOLONGKEY1").unwrap_err());
        assert!(msg.contains("10 characters"));
    }

    #[test]
    fn test_entity_key_patterns() {
        assert!(validate_test_case_key("PROJ-T123").is_ok());
        assert!(validate_test_case_key("LONG_NAME-T999").is_ok());
        for key in ["", "PROJ-123", "PROJ-T", "PROJ", "T123", "proj-t123"] {
            assert!(validate_test_case_key(key).is_err(), "key '{key}'");
        }

        assert!(validate_test_cycle_key("PROJ-R9").is_ok());
        assert!(validate_test_cycle_key("PROJ-T9").is_err());

        assert!(validate_test_plan_key("PROJ-P3").is_ok());
        assert!(validate_test_plan_key("PROJ-R3").is_err());
    }

    #[test]
    fn test_id_or_key_accepts_either_form() {
        assert!(validate_test_cycle_id_or_key("42").is_ok());
        assert!(validate_test_cycle_id_or_key("PROJ-R42").is_ok());
        assert!(validate_test_cycle_id_or_key("0").is_err());
        assert!(validate_test_cycle_id_or_key("PROJ-T42").is_err());

        assert!(validate_test_plan_id_or_key("7").is_ok());
        assert!(validate_test_plan_id_or_key("PROJ-P7").is_ok());
        assert!(validate_test_plan_id_or_key("PROJ-R7").is_err());
    }

    #[test]
    fn test_pagination_defaults_differ_by_style() {
        let offset = validate_offset_pagination(None, None).unwrap();
        assert_eq!(offset.max_results, 50);
        assert_eq!(offset.start_at, 0);

        let cursor = validate_cursor_pagination(None, None).unwrap();
        assert_eq!(cursor.max_results, 10);
        assert_eq!(cursor.start_at, 0);
    }

    #[test]
    fn test_pagination_bounds() {
        assert!(validate_offset_pagination(Some(1000), Some(1_000_000)).is_ok());
        let msg = error_text(validate_offset_pagination(Some(0), None).unwrap_err());
        assert!(msg.contains("at least 1"));
        let msg = error_text(validate_offset_pagination(Some(1001), None).unwrap_err());
        assert!(msg.contains("cannot exceed 1000"));
        let msg = error_text(validate_offset_pagination(None, Some(-1)).unwrap_err());
        assert!(msg.contains("non-negative"));
        let msg = error_text(validate_offset_pagination(None, Some(1_000_001)).unwrap_err());
        assert!(msg.contains("1,000,000"));
    }

    #[test]
    fn test_pagination_collects_both_errors() {
        let err = validate_offset_pagination(Some(0), Some(-5)).unwrap_err();
        match err {
            ZephyrError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_color_validation() {
        assert!(validate_color("#FFF").is_ok());
        assert!(validate_color("#FFFFFF").is_ok());
        assert!(validate_color("#ff0000").is_ok());
        for color in ["red", "#GGG", "#12345", "", "FFF"] {
            assert!(validate_color(color).is_err(), "color '{color}'");
        }
    }

    #[test]
    fn test_entity_id_must_be_positive() {
        assert_eq!(validate_entity_id(12345, "Folder ID").unwrap(), 12345);
        let msg = error_text(validate_entity_id(0, "Folder ID").unwrap_err());
        assert!(msg.contains("Folder ID"));
        assert!(msg.contains("positive integer"));
    }

    #[test]
    fn test_entity_id_str_rejects_non_numeric() {
        assert_eq!(validate_entity_id_str("5", "Parent ID").unwrap(), 5);
        let msg = error_text(validate_entity_id_str("invalid", "Parent ID").unwrap_err());
        assert!(msg.contains("valid integer"));
        let msg = error_text(validate_entity_id_str("0", "Parent ID").unwrap_err());
        assert!(msg.contains("positive integer"));
    }

    #[test]
    fn test_entity_id_value_accepts_number_or_string() {
        assert_eq!(validate_entity_id_value(&json!(5), "Parent ID").unwrap(), 5);
        assert_eq!(
            validate_entity_id_value(&json!("5"), "Parent ID").unwrap(),
            5
        );
        let msg = error_text(validate_entity_id_value(&json!("invalid"), "Parent ID").unwrap_err());
        assert!(msg.contains("valid integer"));
        let msg = error_text(validate_entity_id_value(&json!("0"), "Parent ID").unwrap_err());
        assert!(msg.contains("positive integer"));
        assert!(validate_entity_id_value(&json!(true), "Parent ID").is_err());
    }

    #[test]
    fn test_issue_id_accepts_positive_integers() {
        assert_eq!(validate_issue_id(&json!(12345)).unwrap(), 12345);
        assert_eq!(validate_issue_id(&json!("12345")).unwrap(), 12345);
    }

    #[test]
    fn test_issue_id_rejects_non_positive() {
        for value in [json!(-1), json!(0), json!("0")] {
            let msg = error_text(validate_issue_id(&value).unwrap_err());
            assert!(msg.contains("positive integer"), "value {value}");
        }
    }

    #[test]
    fn test_issue_id_recognizes_issue_keys() {
        let msg = error_text(validate_issue_id(&json!("PROJ-1234")).unwrap_err());
        assert!(msg.contains("issue key"));
        assert!(msg.contains("PROJ-1234"));
        assert!(msg.contains("Atlassian/Jira MCP tool"));
    }

    #[test]
    fn test_issue_id_non_numeric_still_hints_at_resolution() {
        let msg = error_text(validate_issue_id(&json!("not a number")).unwrap_err());
        assert!(!msg.contains("looks like an issue key"));
        assert!(msg.contains("Atlassian/Jira MCP tool"));
    }

    #[test]
    fn test_enum_membership_messages_list_valid_values() {
        assert_eq!(
            validate_status_type("TEST_CASE").unwrap(),
            StatusType::TestCase
        );
        let msg = error_text(validate_status_type("TEST_RUN").unwrap_err());
        assert!(msg.contains("Invalid status type 'TEST_RUN'"));
        assert!(msg.contains("TEST_EXECUTION"));

        assert_eq!(
            validate_folder_type("TEST_CYCLE").unwrap(),
            FolderType::TestCycle
        );
        let msg = error_text(validate_folder_type("TEST_EXECUTION").unwrap_err());
        assert!(msg.contains("Valid types:"));

        assert_eq!(validate_script_type("bdd").unwrap(), ScriptType::Bdd);
        assert!(validate_script_type("BDD").is_err());

        assert_eq!(
            validate_steps_mode("OVERWRITE").unwrap(),
            TestStepsMode::Overwrite
        );
        assert!(validate_steps_mode("REPLACE").is_err());
    }

    #[test]
    fn test_text_length_bounds() {
        assert!(validate_text_length("name", "High", 255).is_ok());
        assert!(validate_text_length("name", "", 255).is_err());
        assert!(validate_text_length("name", &"x".repeat(256), 255).is_err());
    }

    #[test]
    fn test_iso_datetime() {
        assert!(validate_iso_datetime("planned_start_date", "2024-03-01T09:00:00Z").is_ok());
        assert!(validate_iso_datetime("planned_start_date", "2024-03-01T09:00:00+02:00").is_ok());
        let msg = error_text(
            validate_iso_datetime("planned_start_date", "March 1st 2024").unwrap_err(),
        );
        assert!(msg.contains("planned_start_date"));
        assert!(msg.contains("March 1st 2024"));
    }

    #[test]
    fn test_url_requires_http_scheme() {
        assert!(validate_url("https://atlassian.com").is_ok());
        assert!(validate_url("http://example.com/page?x=1").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("not a url").is_err());
    }

    #[test]
    fn test_normalize_labels_accepts_all_encodings() {
        let expected = vec!["Regression".to_string(), "Smoke".to_string()];
        assert_eq!(
            normalize_labels(&json!(["Regression", "Smoke"])).unwrap(),
            expected
        );
        assert_eq!(
            normalize_labels(&json!("[\"Regression\", \"Smoke\"]")).unwrap(),
            expected
        );
        assert_eq!(
            normalize_labels(&json!("Regression, Smoke")).unwrap(),
            expected
        );
        assert_eq!(
            normalize_labels(&json!("Regression,, Smoke,")).unwrap(),
            expected
        );
    }

    #[test]
    fn test_normalize_labels_rejects_bad_input() {
        assert!(normalize_labels(&json!(42)).is_err());
        assert!(normalize_labels(&json!([1, 2])).is_err());
        let msg = error_text(normalize_labels(&json!("[\"unterminated")).unwrap_err());
        assert!(msg.contains("not valid JSON"));
    }

    #[test]
    fn test_normalize_custom_fields() {
        let native = normalize_custom_fields(&json!({"Sprint": "12"})).unwrap();
        assert_eq!(native["Sprint"], "12");

        let encoded = normalize_custom_fields(&json!("{\"Sprint\": \"12\"}")).unwrap();
        assert_eq!(encoded, native);

        assert!(normalize_custom_fields(&json!("[1, 2]")).is_err());
        assert!(normalize_custom_fields(&json!("{broken")).is_err());
        assert!(normalize_custom_fields(&json!(7)).is_err());
    }

    #[test]
    fn test_sanitize_strips_whitespace_and_nul() {
        assert_eq!(sanitize("  PROJ \u{0}"), "PROJ");
        assert_eq!(sanitize("clean"), "clean");
    }
}
