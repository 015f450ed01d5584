//! UUID generator tool.
//!
//! Random v4 by default, name-based v3 (MD5) and v5 (SHA-1) given a
//! namespace and a name. Time-based v1 is deliberately not offered: it
//! needs a stable node identifier, which a stateless tool does not have.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::{Uuid, Variant};

use crate::domains::tools::definitions::common::{error_result, structured_result};

fn default_version() -> u8 {
    4
}

/// Parameters for the UUID generator.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UuidGeneratorParams {
    /// UUID version to generate.
    #[schemars(description = "UUID version: 3, 4 (default) or 5")]
    #[serde(default = "default_version")]
    pub version: u8,

    /// Namespace for v3/v5.
    #[schemars(
        description = "Namespace for v3/v5: a UUID string or one of 'dns', 'url', 'oid', 'x500'"
    )]
    #[serde(default)]
    pub namespace: Option<String>,

    /// Name within the namespace for v3/v5.
    #[schemars(description = "Name within the namespace (required for v3/v5)")]
    #[serde(default)]
    pub name: Option<String>,
}

/// Structured output describing one generated UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct UuidResult {
    /// Hyphenated form.
    pub uuid: String,
    /// Version digit.
    pub version: u8,
    /// Variant name, "RFC 4122" for everything this tool generates.
    pub variant: String,
    /// 32 hex digits, no hyphens.
    pub hex: String,
    /// URN form.
    pub urn: String,
}

/// UUID generator tool.
pub struct UuidGeneratorTool;

impl UuidGeneratorTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "uuid_generator";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate a UUID: random v4 (default), or name-based v3/v5 from a namespace UUID (or 'dns'/'url'/'oid'/'x500') and a name. Reports hyphenated, hex and URN forms.";

    /// Execute the tool logic (shared by all transports).
    pub fn execute(params: &UuidGeneratorParams) -> CallToolResult {
        let uuid = match params.version {
            4 => Uuid::new_v4(),
            3 | 5 => {
                let (namespace, name) = match (params.namespace.as_deref(), params.name.as_deref())
                {
                    (Some(ns), Some(name)) => (ns, name),
                    _ => {
                        return error_result(&format!(
                            "UUID version {} needs both a namespace and a name",
                            params.version
                        ));
                    }
                };
                let namespace = match parse_namespace(namespace) {
                    Ok(ns) => ns,
                    Err(msg) => return error_result(&msg),
                };
                if params.version == 3 {
                    Uuid::new_v3(&namespace, name.as_bytes())
                } else {
                    Uuid::new_v5(&namespace, name.as_bytes())
                }
            }
            other => {
                return error_result(&format!(
                    "Unsupported UUID version: {other}. Use 3, 4 or 5."
                ));
            }
        };

        let result = UuidResult {
            uuid: uuid.to_string(),
            version: uuid.get_version_num() as u8,
            variant: variant_name(uuid.get_variant()),
            hex: uuid.simple().to_string(),
            urn: uuid.urn().to_string(),
        };
        let summary = format!("Generated UUIDv{}: {}", result.version, result.uuid);
        structured_result(summary, result)
    }

    /// HTTP handler for this tool.
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::optional_str;

        let params = UuidGeneratorParams {
            version: arguments
                .get("version")
                .and_then(|v| v.as_u64())
                .unwrap_or(4) as u8,
            namespace: optional_str(&arguments, "namespace"),
            name: optional_str(&arguments, "name"),
        };
        let result = Self::execute(&params);
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UuidGeneratorParams>(),
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
                let params: UuidGeneratorParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

fn parse_namespace(input: &str) -> Result<Uuid, String> {
    match input.to_ascii_lowercase().as_str() {
        "dns" => Ok(Uuid::NAMESPACE_DNS),
        "url" => Ok(Uuid::NAMESPACE_URL),
        "oid" => Ok(Uuid::NAMESPACE_OID),
        "x500" => Ok(Uuid::NAMESPACE_X500),
        _ => Uuid::parse_str(input).map_err(|_| format!("Invalid namespace UUID: {input}")),
    }
}

fn variant_name(variant: Variant) -> String {
    match variant {
        Variant::RFC4122 => "RFC 4122",
        Variant::NCS => "NCS (Reserved)",
        Variant::Microsoft => "Microsoft (Reserved)",
        Variant::Future => "Future (Reserved)",
        _ => "Unknown",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(params: UuidGeneratorParams) -> CallToolResult {
        UuidGeneratorTool::execute(&params)
    }

    #[test]
    fn test_v4_shape() {
        let result = run(UuidGeneratorParams {
            version: 4,
            namespace: None,
            name: None,
        });
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["version"], 4);
        assert_eq!(structured["variant"], "RFC 4122");
        assert_eq!(structured["uuid"].as_str().unwrap().len(), 36);
        assert_eq!(structured["hex"].as_str().unwrap().len(), 32);
        assert!(
            structured["urn"]
                .as_str()
                .unwrap()
                .starts_with("urn:uuid:")
        );
    }

    #[test]
    fn test_v4_is_random() {
        let params = UuidGeneratorParams {
            version: 4,
            namespace: None,
            name: None,
        };
        let a = run(params.clone()).structured_content.unwrap();
        let b = run(params).structured_content.unwrap();
        assert_ne!(a["uuid"], b["uuid"]);
    }

    #[test]
    fn test_v5_is_deterministic_and_known() {
        let params = UuidGeneratorParams {
            version: 5,
            namespace: Some("dns".to_string()),
            name: Some("example.com".to_string()),
        };
        let structured = run(params).structured_content.unwrap();
        // RFC 4122 v5 of "example.com" in the DNS namespace.
        assert_eq!(
            structured["uuid"],
            "cfbff0d1-9375-5685-968c-48ce8b15ae17"
        );
    }

    #[test]
    fn test_v3_requires_namespace_and_name() {
        let result = run(UuidGeneratorParams {
            version: 3,
            namespace: Some("dns".to_string()),
            name: None,
        });
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_bad_namespace() {
        let result = run(UuidGeneratorParams {
            version: 5,
            namespace: Some("not-a-uuid".to_string()),
            name: Some("x".to_string()),
        });
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_unsupported_version() {
        let result = run(UuidGeneratorParams {
            version: 1,
            namespace: None,
            name: None,
        });
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_default_version_from_json() {
        let params: UuidGeneratorParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.version, 4);
    }
}
