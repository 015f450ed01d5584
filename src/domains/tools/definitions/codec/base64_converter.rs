//! Base64 codec tool.
//!
//! Encodes or decodes text with the standard alphabet. Decoding tolerates
//! missing padding; the decoded bytes must be valid UTF-8.

use base64::{Engine as _, engine::general_purpose};
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::tools::definitions::common::{error_result, structured_result};

/// Parameters for the Base64 codec.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Base64ConverterParams {
    /// The direction of the conversion.
    #[schemars(description = "Action to perform: 'encode' or 'decode'")]
    pub action: String,

    /// The string to encode or decode.
    #[schemars(description = "Input string (plain text for encode, Base64 for decode)")]
    pub input_string: String,
}

/// Structured output of a Base64 conversion.
#[derive(Debug, Serialize, JsonSchema)]
struct Base64Result {
    result_string: String,
    action: String,
}

/// Base64 codec tool.
pub struct Base64ConverterTool;

impl Base64ConverterTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "base64_converter";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Encode a string to Base64 or decode a Base64 string back to text (standard alphabet; decoding accepts missing padding).";

    /// Execute the tool logic (shared by all transports).
    pub fn execute(params: &Base64ConverterParams) -> CallToolResult {
        match params.action.to_ascii_lowercase().as_str() {
            "encode" => {
                let encoded = general_purpose::STANDARD.encode(params.input_string.as_bytes());
                structured_result(
                    format!("Encoded {} byte(s)", params.input_string.len()),
                    Base64Result {
                        result_string: encoded,
                        action: "encode".to_string(),
                    },
                )
            }
            "decode" => {
                // Re-pad so inputs with stripped '=' still decode.
                let mut input = params.input_string.trim().to_string();
                let remainder = input.len() % 4;
                if remainder != 0 {
                    input.push_str(&"=".repeat(4 - remainder));
                }
                match general_purpose::STANDARD.decode(input.as_bytes()) {
                    Ok(bytes) => match String::from_utf8(bytes) {
                        Ok(decoded) => structured_result(
                            format!("Decoded {} byte(s)", decoded.len()),
                            Base64Result {
                                result_string: decoded,
                                action: "decode".to_string(),
                            },
                        ),
                        Err(_) => error_result("Decoded bytes are not valid UTF-8 text."),
                    },
                    Err(_) => error_result("Invalid Base64 input string."),
                }
            }
            other => error_result(&format!(
                "Unknown action: {other}. Use 'encode' or 'decode'."
            )),
        }
    }

    /// HTTP handler for this tool.
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::required_str;

        let params = Base64ConverterParams {
            action: required_str(&arguments, "action")?,
            input_string: required_str(&arguments, "input_string")?,
        };
        let result = Self::execute(&params);
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Base64ConverterParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: Base64ConverterParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
