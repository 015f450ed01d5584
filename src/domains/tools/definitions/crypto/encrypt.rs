//! Text encryption tool.
//!
//! Wraps the AES-256-CBC token format in [`super::cipher`].

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
use crate::domains::tools::definitions::common::{error_result, structured_result};

/// The only cipher suite the token format supports.
pub(crate) const SUPPORTED_ALGORITHM: &str = "aes-256-cbc";

pub(crate) fn default_algorithm() -> String {
    SUPPORTED_ALGORITHM.to_string()
}

/// Parameters for the encryption tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EncryptParams {
    /// The plaintext to encrypt.
    #[schemars(description = "Plaintext to encrypt")]
    pub text: String,

    /// Password used for key derivation.
    #[schemars(description = "Password for PBKDF2 key derivation")]
    pub password: String,

    /// Cipher suite; only "aes-256-cbc" is supported.
    #[schemars(description = "Encryption algorithm, only 'aes-256-cbc' is supported")]
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

/// Structured output of a successful encryption.
#[derive(Debug, Serialize, JsonSchema)]
struct EncryptResult {
    /// Base64 token carrying salt, IV and ciphertext.
    ciphertext: String,
    /// The cipher suite used.
    algorithm: String,
}

/// Encryption tool - produces a transportable password-encrypted token.
pub struct EncryptTool;

impl EncryptTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "encrypt_text";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Encrypt text with AES-256-CBC using a key derived from a password via PBKDF2-HMAC-SHA256. Returns a single Base64 token containing salt, IV and ciphertext, suitable for decrypt_text.";

    /// Execute the tool logic (shared by all transports).
    pub fn execute(params: &EncryptParams) -> CallToolResult {
        if !params.algorithm.eq_ignore_ascii_case(SUPPORTED_ALGORITHM) {
            return error_result(&format!(
                "Unsupported algorithm '{}'. Only '{}' is implemented.",
                params.algorithm, SUPPORTED_ALGORITHM
            ));
        }

        info!("Encrypting {} byte(s) of plaintext", params.text.len());

        let ciphertext = cipher::encrypt(&params.text, &params.password);
        let summary = format!(
            "Encrypted {} byte(s) into a {} token",
            params.text.len(),
            SUPPORTED_ALGORITHM
        );
        structured_result(
            summary,
            EncryptResult {
                ciphertext,
                algorithm: SUPPORTED_ALGORITHM.to_string(),
            },
        )
    }

    /// HTTP handler for this tool.
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{optional_str, required_str};

        let params = EncryptParams {
            text: required_str(&arguments, "text")?,
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
            input_schema: cached_schema_for_type::<EncryptParams>(),
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
                let params: EncryptParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
