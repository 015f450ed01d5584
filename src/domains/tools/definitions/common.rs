//! Shared helpers for building tool results.
//!
//! Every tool returns either a structured success (text summary plus a
//! machine-readable record) or an error result carrying a single message.
//! Exactly one of the two shapes is ever produced for a call.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

/// Create an error result with a single text message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with a human-readable summary and a structured
/// record for machine consumption.
pub fn structured_result<T: Serialize>(summary: String, data: T) -> CallToolResult {
    match serde_json::to_value(&data) {
        Ok(value) => CallToolResult {
            content: vec![Content::text(summary)],
            structured_content: Some(value),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => error_result(&format!("Failed to serialize tool result: {e}")),
    }
}

/// Extract a required string argument from an HTTP tool call.
#[cfg(feature = "http")]
pub fn required_str(arguments: &serde_json::Value, key: &str) -> Result<String, String> {
    arguments
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| format!("Missing or invalid '{key}' parameter"))
}

/// Extract an optional string argument from an HTTP tool call.
#[cfg(feature = "http")]
pub fn optional_str(arguments: &serde_json::Value, key: &str) -> Option<String> {
    arguments
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[derive(Serialize)]
    struct Record {
        value: u32,
    }

    #[test]
    fn test_structured_result_shape() {
        let result = structured_result("done".to_string(), Record { value: 7 });
        assert_eq!(result.is_error, Some(false));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["value"], 7);
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "done"),
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_error_result_shape() {
        let result = error_result("boom");
        assert_eq!(result.is_error, Some(true));
        assert!(result.structured_content.is_none());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_required_str() {
        let args = serde_json::json!({ "a": "x", "b": 3 });
        assert_eq!(required_str(&args, "a").unwrap(), "x");
        assert!(required_str(&args, "b").is_err());
        assert!(required_str(&args, "missing").is_err());
    }
}
