//! Wire-format schemas for the Zephyr Scale Cloud REST API
//!
//! Each submodule mirrors one resource family of the remote API. All
//! structs serialize to the API's camelCase wire format; internal field
//! names stay snake_case with serde renames bridging the two. Shapes the
//! API treats as closed reject unknown fields so malformed responses are
//! caught early instead of silently dropped.

/// Shared references and paging envelopes
pub mod common;

/// Priority resources and requests
pub mod priority;

/// Status resources, the status type enum, and requests
pub mod status;

/// Folder resources, the folder type enum, and requests
pub mod folder;

/// Issue, web, and test cycle link resources and requests
pub mod link;

/// Test case resources and create/update requests
pub mod test_case;

/// Test step resources (inline or delegating) and requests
pub mod test_step;

/// Test script resources and requests
pub mod test_script;

/// Test cycle resources and create/update requests
pub mod test_cycle;

/// Test plan resources and requests
pub mod test_plan;

pub use common::{CreatedResource, CursorPage, PagedList, ProjectLink, ResourceLink};
pub use folder::{CreateFolderRequest, Folder, FolderType};
pub use link::{
    CreateIssueLinkRequest, CreateTestCycleLinkRequest, CreateWebLinkRequest, IssueLink,
    IssueLinkType, WebLink,
};
pub use priority::{CreatePriorityRequest, Priority, UpdatePriorityRequest};
pub use status::{CreateStatusRequest, Status, StatusType, UpdateStatusRequest};
pub use test_case::{
    CreateTestCaseRequest, TestCase, TestCaseLinks, TestCasePage, TestCaseUpdate,
    TestCaseVersionLink,
};
pub use test_cycle::{CreateTestCycleRequest, TestCycle, TestCyclePage, TestCycleUpdate};
pub use test_plan::{CreateTestPlanRequest, TestPlan, TestPlanPage};
pub use test_script::{CreateTestScriptRequest, ScriptType, TestScript};
pub use test_step::{
    CreateTestStepsRequest, TestStep, TestStepDelegate, TestStepInline, TestStepParameter,
    TestStepsMode,
};

/// Custom field values keyed by field name
pub type CustomFields = serde_json::Map<String, serde_json::Value>;
