//! Hash calculator tool.
//!
//! Computes MD5, SHA-1, SHA-256 and SHA-512 digests of a text input in
//! one call, lowercase hex encoded.

use futures::FutureExt;
use md5::Md5;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::domains::tools::definitions::common::structured_result;

/// Parameters for the hash calculator.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HashParams {
    /// The text to digest.
    #[schemars(description = "Text to hash (UTF-8)")]
    pub text: String,
}

/// Digests of one input, lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct HashDigests {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
    pub sha512: String,
}

/// Hash calculator tool.
pub struct HashCalculatorTool;

impl HashCalculatorTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "hash_calculator";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Calculate MD5, SHA-1, SHA-256 and SHA-512 digests of a text input, hex encoded.";

    /// Execute the tool logic (shared by all transports).
    ///
    /// Hashing text cannot fail, so this tool has no error path.
    pub fn execute(params: &HashParams) -> CallToolResult {
        let bytes = params.text.as_bytes();
        let digests = HashDigests {
            md5: format!("{:x}", Md5::digest(bytes)),
            sha1: format!("{:x}", Sha1::digest(bytes)),
            sha256: format!("{:x}", Sha256::digest(bytes)),
            sha512: format!("{:x}", Sha512::digest(bytes)),
        };
        let summary = format!("Hashed {} byte(s); sha256 {}", bytes.len(), digests.sha256);
        structured_result(summary, digests)
    }

    /// HTTP handler for this tool.
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::required_str;

        let text = required_str(&arguments, "text")?;
        let result = Self::execute(&HashParams { text });
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<HashParams>(),
            annotations: None,
            output_schema: Some(schema_for_type::<HashDigests>().into()),
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
                let params: HashParams = serde_json::from_value(serde_json::Value::Object(args))
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

    fn run(text: &str) -> serde_json::Value {
        HashCalculatorTool::execute(&HashParams {
            text: text.to_string(),
        })
        .structured_content
        .unwrap()
    }

    #[test]
    fn test_known_vectors_for_abc() {
        let digests = run("abc");
        assert_eq!(digests["md5"], "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(digests["sha1"], "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(
            digests["sha256"],
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_empty_input_vectors() {
        let digests = run("");
        assert_eq!(digests["md5"], "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(
            digests["sha256"],
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_lengths() {
        let digests = run("anything");
        assert_eq!(digests["md5"].as_str().unwrap().len(), 32);
        assert_eq!(digests["sha1"].as_str().unwrap().len(), 40);
        assert_eq!(digests["sha256"].as_str().unwrap().len(), 64);
        assert_eq!(digests["sha512"].as_str().unwrap().len(), 128);
    }
}
