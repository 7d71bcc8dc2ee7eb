//! HTTP client for the Zephyr Scale Cloud REST API
//!
//! One method per endpoint. Every method builds the URL and query, sends
//! a single request with a fixed timeout, and decodes the response into
//! the typed schema, mapping HTTP failures onto [`ZephyrError`]. Partial
//! updates use the fetch-merge-put composite described on the update
//! methods; the GET must succeed before the PUT is attempted.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::config::ZephyrConfig;
use crate::error::{Result, ZephyrError};
use crate::schemas::folder::FolderList;
use crate::schemas::priority::PriorityList;
use crate::schemas::status::StatusList;
use crate::schemas::test_cycle::TestCyclePage;
use crate::schemas::test_plan::TestPlanPage;
use crate::schemas::test_step::TestStepsList;
use crate::schemas::{
    CreatedResource, CreateFolderRequest, CreatePriorityRequest, CreateStatusRequest,
    CreateTestCaseRequest, CreateTestCycleLinkRequest, CreateTestCycleRequest,
    CreateTestPlanRequest, CreateTestScriptRequest, CreateTestStepsRequest, CreateWebLinkRequest,
    Folder, FolderType, PagedList, Priority, Status, StatusType, TestCase, TestCaseLinks,
    TestCasePage, TestCaseUpdate, TestCaseVersionLink, TestCycle, TestCycleUpdate, TestPlan,
    TestScript, UpdatePriorityRequest, UpdateStatusRequest,
};
use crate::validation::Pagination;

/// Fixed timeout applied to every outbound request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Zephyr Scale Cloud REST API.
///
/// Holds one connection pool for the lifetime of the process. Cloning is
/// cheap; the inner `reqwest::Client` is reference-counted.
#[derive(Clone)]
pub struct ZephyrClient {
    http: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for ZephyrClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The bearer token lives in the default headers; never print it
        f.debug_struct("ZephyrClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ZephyrClient {
    /// Build a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ZephyrError::Configuration` if the API token cannot be
    /// used as an HTTP header value.
    pub fn new(config: &ZephyrConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|e| {
                ZephyrError::Configuration(format!("API token is not a valid header value: {e}"))
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ZephyrError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client targets, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        resource: &str,
    ) -> Result<T> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        tracing::debug!(status, resource, "Zephyr Scale API response");
        decode_json(status, &body, resource)
    }

    async fn execute_no_content(
        &self,
        request: reqwest::RequestBuilder,
        resource: &str,
    ) -> Result<()> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        tracing::debug!(status, resource, "Zephyr Scale API response");
        decode_no_content(status, &body, resource)
    }

    // ---- health ----

    /// `GET /healthcheck`. The endpoint answers 200 with an empty body
    /// when the service is up.
    pub async fn healthcheck(&self) -> Result<()> {
        self.execute_no_content(self.http.get(self.url("/healthcheck")), "healthcheck")
            .await
    }

    // ---- priorities ----

    /// `GET /priorities`
    pub async fn list_priorities(
        &self,
        project_key: Option<&str>,
        page: Pagination,
    ) -> Result<PriorityList> {
        let mut query = page_query(page);
        if let Some(key) = project_key {
            query.push(("projectKey", key.to_string()));
        }
        self.execute(
            self.http.get(self.url("/priorities")).query(&query),
            "priorities",
        )
        .await
    }

    /// `GET /priorities/{id}`
    pub async fn get_priority(&self, priority_id: i64) -> Result<Priority> {
        self.execute(
            self.http.get(self.url(&format!("/priorities/{priority_id}"))),
            &format!("priority with ID {priority_id}"),
        )
        .await
    }

    /// `POST /priorities`
    pub async fn create_priority(
        &self,
        request: &CreatePriorityRequest,
    ) -> Result<CreatedResource> {
        self.execute(
            self.http.post(self.url("/priorities")).json(request),
            "priorities",
        )
        .await
    }

    /// Partial update of a priority via fetch-merge-put. `None` fields
    /// keep the current value. Returns the body that was PUT.
    ///
    /// There is no locking between the GET and the PUT; two callers
    /// racing on the same priority can overwrite each other (last PUT
    /// wins).
    pub async fn update_priority(
        &self,
        priority_id: i64,
        name: Option<String>,
        description: Option<String>,
        index: Option<i64>,
        default: Option<bool>,
        color: Option<String>,
    ) -> Result<UpdatePriorityRequest> {
        let current = self
            .get_priority(priority_id)
            .await
            .map_err(|e| merge_fetch_failed("priority", &priority_id.to_string(), e))?;
        let body = current.into_update(name, description, index, default, color);
        self.execute_no_content(
            self.http
                .put(self.url(&format!("/priorities/{priority_id}")))
                .json(&body),
            &format!("priority with ID {priority_id}"),
        )
        .await?;
        Ok(body)
    }

    // ---- statuses ----

    /// `GET /statuses`
    pub async fn list_statuses(
        &self,
        project_key: Option<&str>,
        status_type: Option<StatusType>,
        page: Pagination,
    ) -> Result<StatusList> {
        let mut query = page_query(page);
        if let Some(key) = project_key {
            query.push(("projectKey", key.to_string()));
        }
        if let Some(status_type) = status_type {
            query.push(("statusType", status_type.as_str().to_string()));
        }
        self.execute(
            self.http.get(self.url("/statuses")).query(&query),
            "statuses",
        )
        .await
    }

    /// `GET /statuses/{id}`
    pub async fn get_status(&self, status_id: i64) -> Result<Status> {
        self.execute(
            self.http.get(self.url(&format!("/statuses/{status_id}"))),
            &format!("status with ID {status_id}"),
        )
        .await
    }

    /// `POST /statuses`
    pub async fn create_status(&self, request: &CreateStatusRequest) -> Result<CreatedResource> {
        self.execute(
            self.http.post(self.url("/statuses")).json(request),
            "statuses",
        )
        .await
    }

    /// Partial update of a status via fetch-merge-put. Returns the body
    /// that was PUT. Same last-PUT-wins caveat as priorities.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_status(
        &self,
        status_id: i64,
        name: Option<String>,
        description: Option<String>,
        index: Option<i64>,
        archived: Option<bool>,
        default: Option<bool>,
        color: Option<String>,
    ) -> Result<UpdateStatusRequest> {
        let current = self
            .get_status(status_id)
            .await
            .map_err(|e| merge_fetch_failed("status", &status_id.to_string(), e))?;
        let body = current.into_update(name, description, index, archived, default, color);
        self.execute_no_content(
            self.http
                .put(self.url(&format!("/statuses/{status_id}")))
                .json(&body),
            &format!("status with ID {status_id}"),
        )
        .await?;
        Ok(body)
    }

    // ---- folders ----

    /// `GET /folders`
    pub async fn list_folders(
        &self,
        project_key: Option<&str>,
        folder_type: Option<FolderType>,
        page: Pagination,
    ) -> Result<FolderList> {
        let mut query = page_query(page);
        if let Some(key) = project_key {
            query.push(("projectKey", key.to_string()));
        }
        if let Some(folder_type) = folder_type {
            query.push(("folderType", folder_type.as_str().to_string()));
        }
        self.execute(self.http.get(self.url("/folders")).query(&query), "folders")
            .await
    }

    /// `GET /folders/{id}`
    pub async fn get_folder(&self, folder_id: i64) -> Result<Folder> {
        self.execute(
            self.http.get(self.url(&format!("/folders/{folder_id}"))),
            &format!("folder with ID {folder_id}"),
        )
        .await
    }

    /// `POST /folders`
    pub async fn create_folder(&self, request: &CreateFolderRequest) -> Result<CreatedResource> {
        self.execute(self.http.post(self.url("/folders")).json(request), "folders")
            .await
    }

    // ---- test cases ----

    /// `GET /testcases` (cursor-paginated)
    pub async fn list_test_cases(
        &self,
        project_key: Option<&str>,
        folder_id: Option<i64>,
        page: Pagination,
    ) -> Result<TestCasePage> {
        let mut query = page_query(page);
        if let Some(key) = project_key {
            query.push(("projectKey", key.to_string()));
        }
        if let Some(folder_id) = folder_id {
            query.push(("folderId", folder_id.to_string()));
        }
        self.execute(
            self.http.get(self.url("/testcases")).query(&query),
            "test cases",
        )
        .await
    }

    /// `GET /testcases/{key}`
    pub async fn get_test_case(&self, test_case_key: &str) -> Result<TestCase> {
        self.execute(
            self.http.get(self.url(&format!("/testcases/{test_case_key}"))),
            &format!("test case '{test_case_key}'"),
        )
        .await
    }

    /// `POST /testcases`
    pub async fn create_test_case(
        &self,
        request: &CreateTestCaseRequest,
    ) -> Result<CreatedResource> {
        self.execute(
            self.http.post(self.url("/testcases")).json(request),
            "test cases",
        )
        .await
    }

    /// Partial update of a test case via fetch-merge-put. Returns the
    /// merged resource that was PUT. Same last-PUT-wins caveat as
    /// priorities.
    pub async fn update_test_case(
        &self,
        test_case_key: &str,
        update: TestCaseUpdate,
    ) -> Result<TestCase> {
        let mut current = self
            .get_test_case(test_case_key)
            .await
            .map_err(|e| merge_fetch_failed("test case", test_case_key, e))?;
        current.apply_update(update);
        self.execute_no_content(
            self.http
                .put(self.url(&format!("/testcases/{test_case_key}")))
                .json(&current),
            &format!("test case '{test_case_key}'"),
        )
        .await?;
        Ok(current)
    }

    /// `GET /testcases/{key}/teststeps`
    pub async fn get_test_steps(
        &self,
        test_case_key: &str,
        page: Pagination,
    ) -> Result<TestStepsList> {
        self.execute(
            self.http
                .get(self.url(&format!("/testcases/{test_case_key}/teststeps")))
                .query(&page_query(page)),
            &format!("test steps of test case '{test_case_key}'"),
        )
        .await
    }

    /// `POST /testcases/{key}/teststeps`
    pub async fn create_test_steps(
        &self,
        test_case_key: &str,
        request: &CreateTestStepsRequest,
    ) -> Result<TestStepsList> {
        self.execute(
            self.http
                .post(self.url(&format!("/testcases/{test_case_key}/teststeps")))
                .json(request),
            &format!("test steps of test case '{test_case_key}'"),
        )
        .await
    }

    /// `GET /testcases/{key}/testscript`
    pub async fn get_test_script(&self, test_case_key: &str) -> Result<TestScript> {
        self.execute(
            self.http
                .get(self.url(&format!("/testcases/{test_case_key}/testscript"))),
            &format!("test script of test case '{test_case_key}'"),
        )
        .await
    }

    /// `POST /testcases/{key}/testscript`
    pub async fn create_test_script(
        &self,
        test_case_key: &str,
        request: &CreateTestScriptRequest,
    ) -> Result<CreatedResource> {
        self.execute(
            self.http
                .post(self.url(&format!("/testcases/{test_case_key}/testscript")))
                .json(request),
            &format!("test script of test case '{test_case_key}'"),
        )
        .await
    }

    /// `GET /testcases/{key}/versions`
    pub async fn list_test_case_versions(
        &self,
        test_case_key: &str,
        page: Pagination,
    ) -> Result<PagedList<TestCaseVersionLink>> {
        self.execute(
            self.http
                .get(self.url(&format!("/testcases/{test_case_key}/versions")))
                .query(&page_query(page)),
            &format!("versions of test case '{test_case_key}'"),
        )
        .await
    }

    /// `GET /testcases/{key}/versions/{version}`
    pub async fn get_test_case_version(
        &self,
        test_case_key: &str,
        version: i64,
    ) -> Result<TestCase> {
        self.execute(
            self.http
                .get(self.url(&format!("/testcases/{test_case_key}/versions/{version}"))),
            &format!("version {version} of test case '{test_case_key}'"),
        )
        .await
    }

    /// `GET /testcases/{key}/links`
    pub async fn get_test_case_links(&self, test_case_key: &str) -> Result<TestCaseLinks> {
        self.execute(
            self.http
                .get(self.url(&format!("/testcases/{test_case_key}/links"))),
            &format!("links of test case '{test_case_key}'"),
        )
        .await
    }

    /// `POST /testcases/{key}/links/issues`
    pub async fn create_test_case_issue_link(
        &self,
        test_case_key: &str,
        issue_id: i64,
    ) -> Result<CreatedResource> {
        self.create_issue_link("testcases", test_case_key, issue_id)
            .await
    }

    /// `POST /testcases/{key}/links/weblinks`
    pub async fn create_test_case_web_link(
        &self,
        test_case_key: &str,
        request: &CreateWebLinkRequest,
    ) -> Result<CreatedResource> {
        self.create_web_link("testcases", test_case_key, request)
            .await
    }

    // ---- test cycles ----

    /// `GET /testcycles` (cursor-paginated)
    pub async fn list_test_cycles(
        &self,
        project_key: Option<&str>,
        folder_id: Option<i64>,
        page: Pagination,
    ) -> Result<TestCyclePage> {
        let mut query = page_query(page);
        if let Some(key) = project_key {
            query.push(("projectKey", key.to_string()));
        }
        if let Some(folder_id) = folder_id {
            query.push(("folderId", folder_id.to_string()));
        }
        self.execute(
            self.http.get(self.url("/testcycles")).query(&query),
            "test cycles",
        )
        .await
    }

    /// `GET /testcycles/{idOrKey}`
    pub async fn get_test_cycle(&self, id_or_key: &str) -> Result<TestCycle> {
        self.execute(
            self.http.get(self.url(&format!("/testcycles/{id_or_key}"))),
            &format!("test cycle '{id_or_key}'"),
        )
        .await
    }

    /// `POST /testcycles`
    pub async fn create_test_cycle(
        &self,
        request: &CreateTestCycleRequest,
    ) -> Result<CreatedResource> {
        self.execute(
            self.http.post(self.url("/testcycles")).json(request),
            "test cycles",
        )
        .await
    }

    /// Partial update of a test cycle via fetch-merge-put. Returns the
    /// merged resource that was PUT. Same last-PUT-wins caveat as
    /// priorities.
    pub async fn update_test_cycle(
        &self,
        test_cycle_key: &str,
        update: TestCycleUpdate,
    ) -> Result<TestCycle> {
        let mut current = self
            .get_test_cycle(test_cycle_key)
            .await
            .map_err(|e| merge_fetch_failed("test cycle", test_cycle_key, e))?;
        current.apply_update(update);
        self.execute_no_content(
            self.http
                .put(self.url(&format!("/testcycles/{test_cycle_key}")))
                .json(&current),
            &format!("test cycle '{test_cycle_key}'"),
        )
        .await?;
        Ok(current)
    }

    /// `POST /testcycles/{idOrKey}/links/issues`
    pub async fn create_test_cycle_issue_link(
        &self,
        test_cycle_key: &str,
        issue_id: i64,
    ) -> Result<CreatedResource> {
        self.create_issue_link("testcycles", test_cycle_key, issue_id)
            .await
    }

    /// `POST /testcycles/{idOrKey}/links/weblinks`
    pub async fn create_test_cycle_web_link(
        &self,
        test_cycle_key: &str,
        request: &CreateWebLinkRequest,
    ) -> Result<CreatedResource> {
        self.create_web_link("testcycles", test_cycle_key, request)
            .await
    }

    // ---- test plans ----

    /// `GET /testplans` (cursor-paginated)
    pub async fn list_test_plans(
        &self,
        project_key: Option<&str>,
        page: Pagination,
    ) -> Result<TestPlanPage> {
        let mut query = page_query(page);
        if let Some(key) = project_key {
            query.push(("projectKey", key.to_string()));
        }
        self.execute(
            self.http.get(self.url("/testplans")).query(&query),
            "test plans",
        )
        .await
    }

    /// `GET /testplans/{idOrKey}`
    pub async fn get_test_plan(&self, id_or_key: &str) -> Result<TestPlan> {
        self.execute(
            self.http.get(self.url(&format!("/testplans/{id_or_key}"))),
            &format!("test plan '{id_or_key}'"),
        )
        .await
    }

    /// `POST /testplans`
    pub async fn create_test_plan(
        &self,
        request: &CreateTestPlanRequest,
    ) -> Result<CreatedResource> {
        self.execute(
            self.http.post(self.url("/testplans")).json(request),
            "test plans",
        )
        .await
    }

    /// `POST /testplans/{idOrKey}/links/issues`
    pub async fn create_test_plan_issue_link(
        &self,
        test_plan_key: &str,
        issue_id: i64,
    ) -> Result<CreatedResource> {
        self.create_issue_link("testplans", test_plan_key, issue_id)
            .await
    }

    /// `POST /testplans/{idOrKey}/links/weblinks`
    pub async fn create_test_plan_web_link(
        &self,
        test_plan_key: &str,
        request: &CreateWebLinkRequest,
    ) -> Result<CreatedResource> {
        self.create_web_link("testplans", test_plan_key, request)
            .await
    }

    /// `POST /testplans/{idOrKey}/links/testcycles`
    pub async fn create_test_plan_test_cycle_link(
        &self,
        test_plan_key: &str,
        request: &CreateTestCycleLinkRequest,
    ) -> Result<CreatedResource> {
        self.execute(
            self.http
                .post(self.url(&format!("/testplans/{test_plan_key}/links/testcycles")))
                .json(request),
            &format!("test plan '{test_plan_key}'"),
        )
        .await
    }

    // ---- shared link helpers ----

    async fn create_issue_link(
        &self,
        entity_path: &str,
        entity_key: &str,
        issue_id: i64,
    ) -> Result<CreatedResource> {
        let body = crate::schemas::CreateIssueLinkRequest { issue_id };
        self.execute(
            self.http
                .post(self.url(&format!("/{entity_path}/{entity_key}/links/issues")))
                .json(&body),
            &format!("'{entity_key}'"),
        )
        .await
    }

    async fn create_web_link(
        &self,
        entity_path: &str,
        entity_key: &str,
        request: &CreateWebLinkRequest,
    ) -> Result<CreatedResource> {
        self.execute(
            self.http
                .post(self.url(&format!("/{entity_path}/{entity_key}/links/weblinks")))
                .json(request),
            &format!("'{entity_key}'"),
        )
        .await
    }
}

fn page_query(page: Pagination) -> Vec<(&'static str, String)> {
    vec![
        ("maxResults", page.max_results.to_string()),
        ("startAt", page.start_at.to_string()),
    ]
}

fn transport_error(e: reqwest::Error) -> ZephyrError {
    if e.is_timeout() {
        ZephyrError::Transport(format!("request timed out after {}s", REQUEST_TIMEOUT.as_secs()))
    } else {
        // Strip the URL reqwest embeds; the message already names the host
        ZephyrError::Transport(e.without_url().to_string())
    }
}

/// Prefix a failed current-resource fetch so callers can tell the GET
/// phase of a merge update from the PUT phase. NotFound passes through
/// unchanged; it already names the resource.
fn merge_fetch_failed(entity: &str, key: &str, err: ZephyrError) -> ZephyrError {
    match err {
        ZephyrError::NotFound { .. } => err,
        ZephyrError::Upstream { status, message } => ZephyrError::Upstream {
            status,
            message: format!("failed to get current {entity} '{key}': {message}"),
        },
        ZephyrError::Transport(message) => {
            ZephyrError::Transport(format!("failed to get current {entity} '{key}': {message}"))
        }
        other => other,
    }
}

fn check_status(status: u16, body: &str, resource: &str) -> Result<()> {
    if status == 404 {
        return Err(ZephyrError::not_found(resource.to_string()));
    }
    if !(200..300).contains(&status) {
        let message = if body.trim().is_empty() {
            "no response body".to_string()
        } else {
            body.trim().to_string()
        };
        return Err(ZephyrError::Upstream { status, message });
    }
    Ok(())
}

/// Decode a body-carrying response. Pure so the status/body handling is
/// unit-testable without a live endpoint.
pub(crate) fn decode_json<T: DeserializeOwned>(status: u16, body: &str, resource: &str) -> Result<T> {
    check_status(status, body, resource)?;
    serde_json::from_str(body).map_err(|e| ZephyrError::Upstream {
        status,
        message: format!("response did not match the expected schema: {e}"),
    })
}

/// Decode a response whose success carries no body (PUT endpoints answer
/// 200 OK with an empty body; so does the healthcheck).
pub(crate) fn decode_no_content(status: u16, body: &str, resource: &str) -> Result<()> {
    check_status(status, body, resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_success() {
        let priority: Priority = decode_json(
            200,
            r##"{"id":1,"name":"High","index":0,"default":false,"color":"#FF0000","project":{"id":123}}"##,
            "priority with ID 1",
        )
        .unwrap();
        assert_eq!(priority.id, 1);
        assert_eq!(priority.name, "High");
    }

    #[test]
    fn test_decode_json_maps_404_to_not_found() {
        let err = decode_json::<Priority>(404, "", "priority with ID 999").unwrap_err();
        match err {
            ZephyrError::NotFound { resource } => assert!(resource.contains("999")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_json_maps_5xx_to_upstream() {
        let err =
            decode_json::<Priority>(503, r#"{"message":"down"}"#, "priorities").unwrap_err();
        match err {
            ZephyrError::Upstream { status, message } => {
                assert_eq!(status, 503);
                assert!(message.contains("down"));
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
        assert_eq!(
            decode_json::<Priority>(503, r#"{"message":"down"}"#, "priorities")
                .unwrap_err()
                .error_code(),
            500
        );
    }

    #[test]
    fn test_decode_json_schema_mismatch_is_upstream() {
        let err = decode_json::<Priority>(200, r#"{"unexpected":true}"#, "priorities").unwrap_err();
        match err {
            ZephyrError::Upstream { status, message } => {
                assert_eq!(status, 200);
                assert!(message.contains("expected schema"));
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_no_content_accepts_empty_200() {
        assert!(decode_no_content(200, "", "healthcheck").is_ok());
        assert!(decode_no_content(200, "  \n", "healthcheck").is_ok());
    }

    #[test]
    fn test_decode_no_content_empty_error_body_gets_placeholder() {
        let err = decode_no_content(500, "", "priorities").unwrap_err();
        match err {
            ZephyrError::Upstream { message, .. } => assert_eq!(message, "no response body"),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_merge_fetch_failed_prefixes_upstream_errors() {
        let err = merge_fetch_failed(
            "test case",
            "PROJ-T42",
            ZephyrError::Upstream {
                status: 500,
                message: "boom".to_string(),
            },
        );
        assert!(err.to_string().contains("failed to get current test case 'PROJ-T42'"));
    }

    #[test]
    fn test_merge_fetch_failed_passes_not_found_through() {
        let err = merge_fetch_failed(
            "test case",
            "PROJ-T42",
            ZephyrError::not_found("test case 'PROJ-T42'"),
        );
        assert_eq!(err.error_code(), 404);
        assert_eq!(err.to_string(), "Not found: test case 'PROJ-T42'");
    }

    #[test]
    fn test_page_query_serializes_both_params() {
        let query = page_query(Pagination {
            max_results: 50,
            start_at: 100,
        });
        assert_eq!(query[0], ("maxResults", "50".to_string()));
        assert_eq!(query[1], ("startAt", "100".to_string()));
    }

    #[test]
    fn test_client_url_joins_paths() {
        let config = ZephyrConfig::new("token");
        let client = ZephyrClient::new(&config).unwrap();
        assert_eq!(
            client.url("/priorities/1"),
            "https://api.zephyrscale.smartbear.com/v2/priorities/1"
        );
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let config = ZephyrConfig::new("super-secret-token");
        let client = ZephyrClient::new(&config).unwrap();
        let printed = format!("{client:?}");
        assert!(!printed.contains("super-secret-token"));
    }
}
