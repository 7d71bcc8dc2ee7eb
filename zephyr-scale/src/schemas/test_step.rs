//! Test step resources and requests
//!
//! A step is either an inline instruction or a delegation to another
//! test case by key — exactly one of the two, never both.

use serde::{Deserialize, Serialize};

use super::common::PagedList;
use super::CustomFields;

/// How `POST /testcases/{key}/teststeps` treats existing steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStepsMode {
    /// Append the supplied steps after the existing ones
    Append,
    /// Replace all existing steps
    Overwrite,
}

impl TestStepsMode {
    /// All accepted wire-format values, for validation messages
    pub const VALUES: [&'static str; 2] = ["APPEND", "OVERWRITE"];
}

/// An inline step instruction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStepInline {
    /// The instruction to be followed
    pub description: String,
    /// Test data required to perform the instruction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_data: Option<String>,
    /// The expected outcome of executing the instruction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_result: Option<String>,
    /// Custom field values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// A parameter passed to a delegated test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStepParameter {
    /// Parameter name
    pub name: String,
    /// Parameter kind, e.g. `DEFAULT_VALUE`
    #[serde(rename = "type")]
    pub parameter_type: String,
    /// Parameter value
    pub value: String,
}

/// A step that delegates execution to another test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStepDelegate {
    /// Key of the test case to delegate to, `<PROJECT>-T<digits>`
    pub test_case_key: String,
    /// Parameters of the delegated call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<TestStepParameter>>,
    /// REST API URL of the delegated test case
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// One test step: an inline instruction XOR a delegation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStep {
    /// Inline instruction, when this step is not a delegation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<TestStepInline>,
    /// Delegation target, when this step calls another test case
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_case: Option<TestStepDelegate>,
}

impl TestStep {
    /// Check the inline-XOR-delegate invariant
    pub fn is_well_formed(&self) -> bool {
        self.inline.is_some() != self.test_case.is_some()
    }
}

/// Paged list of test steps
pub type TestStepsList = PagedList<TestStep>;

/// Body for `POST /testcases/{key}/teststeps`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTestStepsRequest {
    /// Whether to append to or overwrite existing steps
    pub mode: TestStepsMode,
    /// The steps to add
    pub items: Vec<TestStep>,
}
