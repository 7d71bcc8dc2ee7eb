//! Response construction for MCP tool results
//!
//! Every tool answers with a `CallToolResult` carrying one text block:
//! pretty-printed JSON of the operation's result on success, or the
//! `{"errorCode", "message"}` envelope on failure. Errors never surface
//! as protocol-level failures; callers always get a response body.

use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent};
use serde::Serialize;

use crate::error::{Result, ZephyrError};

fn text_result(text: String, is_error: bool) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(RawContent::Text(RawTextContent { text }), None)],
        is_error: Some(is_error),
    }
}

/// Build a success response with the value serialized as pretty JSON
pub fn success_response<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => text_result(text, false),
        Err(e) => error_response(&ZephyrError::Upstream {
            status: 200,
            message: format!("failed to serialize response: {e}"),
        }),
    }
}

/// Build an error response with the JSON error envelope.
///
/// The envelope code follows the taxonomy: 400 for validation, 404 for
/// missing resources, 500 for everything else.
pub fn error_response(error: &ZephyrError) -> CallToolResult {
    let envelope = serde_json::json!({
        "errorCode": error.error_code(),
        "message": error.to_string(),
    });
    // json! of two scalar fields cannot fail to pretty-print
    let text = serde_json::to_string_pretty(&envelope)
        .unwrap_or_else(|_| envelope.to_string());
    text_result(text, true)
}

/// Render an operation outcome into a tool response
pub fn render<T: Serialize>(outcome: Result<T>) -> CallToolResult {
    match outcome {
        Ok(value) => success_response(&value),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_success_response_is_pretty_json() {
        let response = success_response(&serde_json::json!({"id": 1, "name": "High"}));
        assert_eq!(response.is_error, Some(false));
        let text = text_of(&response);
        assert!(text.contains("\"name\": \"High\""));
    }

    #[test]
    fn test_error_envelope_codes() {
        let response = error_response(&ZephyrError::validation("bad color"));
        assert_eq!(response.is_error, Some(true));
        let envelope: serde_json::Value = serde_json::from_str(text_of(&response)).unwrap();
        assert_eq!(envelope["errorCode"], 400);
        assert!(envelope["message"].as_str().unwrap().contains("bad color"));

        let response = error_response(&ZephyrError::not_found("priority with ID 999"));
        let envelope: serde_json::Value = serde_json::from_str(text_of(&response)).unwrap();
        assert_eq!(envelope["errorCode"], 404);

        let response = error_response(&ZephyrError::Transport("refused".to_string()));
        let envelope: serde_json::Value = serde_json::from_str(text_of(&response)).unwrap();
        assert_eq!(envelope["errorCode"], 500);
    }

    #[test]
    fn test_render_maps_both_arms() {
        let ok = render(Ok(serde_json::json!({"status": "UP"})));
        assert_eq!(ok.is_error, Some(false));

        let err = render::<serde_json::Value>(Err(ZephyrError::validation("nope")));
        assert_eq!(err.is_error, Some(true));
    }
}
