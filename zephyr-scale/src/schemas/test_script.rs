//! Test script resources and requests

use serde::{Deserialize, Serialize};

/// Format of a test script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    /// Free-text script
    Plain,
    /// Gherkin-style BDD script
    Bdd,
}

impl ScriptType {
    /// All accepted wire-format values, for validation messages
    pub const VALUES: [&'static str; 2] = ["plain", "bdd"];
}

/// A test script as returned by `GET /testcases/{key}/testscript`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScript {
    /// Script id
    pub id: i64,
    /// Script format
    #[serde(rename = "type")]
    pub script_type: ScriptType,
    /// Script content
    pub text: String,
    /// REST API URL of this script
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Body for `POST /testcases/{key}/testscript`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTestScriptRequest {
    /// Script format
    #[serde(rename = "type")]
    pub script_type: ScriptType,
    /// Script content
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_type_is_lowercase_on_wire() {
        assert_eq!(serde_json::to_string(&ScriptType::Bdd).unwrap(), "\"bdd\"");
        let result: Result<ScriptType, _> = serde_json::from_str("\"BDD\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_script_round_trip() {
        let script: TestScript = serde_json::from_value(serde_json::json!({
            "id": 7,
            "type": "plain",
            "text": "1. Open the app\n2. Log in"
        }))
        .unwrap();
        assert_eq!(script.script_type, ScriptType::Plain);

        let json = serde_json::to_value(&script).unwrap();
        let back: TestScript = serde_json::from_value(json).unwrap();
        assert_eq!(back, script);
    }
}
