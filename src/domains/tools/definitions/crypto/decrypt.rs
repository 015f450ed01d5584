//! Text decryption tool.
//!
//! Counterpart of [`super::encrypt::EncryptTool`]; accepts the Base64
//! salt∥IV∥ciphertext token and the original password.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::cipher;
use super::encrypt::{SUPPORTED_ALGORITHM, default_algorithm};
use crate::domains::tools::definitions::common::{error_result, structured_result};

/// Parameters for the decryption tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DecryptParams {
    /// The Base64 token produced by encrypt_text.
    #[schemars(description = "Base64 token carrying salt, IV and ciphertext")]
    pub ciphertext: String,

    /// Password used during encryption.
    #[schemars(description = "Password the token was encrypted with")]
    pub password: String,

    /// Cipher suite; only "aes-256-cbc" is supported.
    #[schemars(description = "Decryption algorithm, only 'aes-256-cbc' is supported")]
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

/// Structured output of a successful decryption.
#[derive(Debug, Serialize, JsonSchema)]
struct DecryptResult {
    /// The recovered plaintext.
    plaintext: String,
}

/// Decryption tool - recovers plaintext from an encrypt_text token.
pub struct DecryptTool;

impl DecryptTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "decrypt_text";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Decrypt a token produced by encrypt_text. The key is re-derived from the password and the salt embedded in the token. A wrong password and corrupted data are indistinguishable by design.";

    /// Execute the tool logic (shared by all transports).
    pub fn execute(params: &DecryptParams) -> CallToolResult {
        if !params.algorithm.eq_ignore_ascii_case(SUPPORTED_ALGORITHM) {
            return error_result(&format!(
                "Unsupported algorithm '{}'. Only '{}' is implemented.",
                params.algorithm, SUPPORTED_ALGORITHM
            ));
        }

        info!("Decrypting a {} byte token", params.ciphertext.len());

        match cipher::decrypt(&params.ciphertext, &params.password) {
            Ok(plaintext) => {
                let summary = format!("Decrypted {} byte(s) of plaintext", plaintext.len());
                structured_result(summary, DecryptResult { plaintext })
            }
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool.
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{optional_str, required_str};

        let params = DecryptParams {
            ciphertext: required_str(&arguments, "ciphertext")?,
            password: required_str(&arguments, "password")?,
            algorithm: optional_str(&arguments, "algorithm").unwrap_or_else(default_algorithm),
        };
        let result = Self::execute(&params);
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DecryptParams>(),
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
                let params: DecryptParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn decrypt_with(token: &str, password: &str) -> CallToolResult {
        DecryptTool::execute(&DecryptParams {
            ciphertext: token.to_string(),
            password: password.to_string(),
            algorithm: default_algorithm(),
        })
    }

    fn error_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_round_trip_through_tools() {
        let token = cipher::encrypt("byte-exact ✓", "pw");
        let result = decrypt_with(&token, "pw");
        assert_eq!(result.is_error, Some(false));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["plaintext"], "byte-exact ✓");
    }

    #[test]
    fn test_wrong_password_reports_decryption_failed() {
        let token = cipher::encrypt("secret", "password1");
        let result = decrypt_with(&token, "password2");
        assert_eq!(result.is_error, Some(true));
        assert!(error_text(&result).contains("decryption failed"));
    }

    #[test]
    fn test_short_token_reports_malformed_payload() {
        let result = decrypt_with("AAAA", "pw");
        assert_eq!(result.is_error, Some(true));
        assert!(error_text(&result).contains("malformed payload"));
    }

    #[test]
    fn test_unsupported_algorithm() {
        let result = DecryptTool::execute(&DecryptParams {
            ciphertext: "irrelevant".to_string(),
            password: "pw".to_string(),
            algorithm: "des".to_string(),
        });
        assert_eq!(result.is_error, Some(true));
        assert!(error_text(&result).contains("Unsupported algorithm"));
    }
}
