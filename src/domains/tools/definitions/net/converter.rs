//! IPv4 representation converter tool.
//!
//! One address in, all four canonical textual forms out.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ipv4;
use crate::domains::tools::definitions::common::{error_result, structured_result};

/// Parameters for the IPv4 converter.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Ipv4ConverterParams {
    /// Address in dotted, decimal, hexadecimal or binary form.
    #[schemars(
        description = "IPv4 address in any textual form: '192.168.1.1', '3232235777', '0xC0A80101' or 32-bit binary"
    )]
    pub ip_address: String,

    /// Optional input format hint.
    #[schemars(description = "Optional input format: 'dotted', 'decimal', 'hex' or 'binary'")]
    #[serde(default)]
    pub format: Option<String>,
}

/// All four textual forms of one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Ipv4Forms {
    /// The input as given.
    pub original: String,
    /// Dotted decimal, e.g. "192.168.1.1".
    pub dotted_decimal: String,
    /// The 32-bit integer value.
    pub decimal: u32,
    /// "0x" plus eight uppercase hex digits.
    pub hexadecimal: String,
    /// 32 binary digits, zero padded.
    pub binary: String,
}

/// IPv4 converter tool - converts between address representations.
pub struct Ipv4ConverterTool;

impl Ipv4ConverterTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "ipv4_converter";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Convert an IPv4 address between dotted decimal, decimal, hexadecimal and 32-bit binary representations. The input format is auto-detected or can be forced with a format hint.";

    /// Execute the tool logic (shared by all transports).
    pub fn execute(params: &Ipv4ConverterParams) -> CallToolResult {
        info!("IPv4 converter called for '{}'", params.ip_address);

        match ipv4::parse_flexible(&params.ip_address, params.format.as_deref()) {
            Ok(value) => {
                let forms = Ipv4Forms {
                    original: params.ip_address.clone(),
                    dotted_decimal: ipv4::dotted(value),
                    decimal: value,
                    hexadecimal: format!("0x{value:08X}"),
                    binary: format!("{value:032b}"),
                };
                let summary = format!("{} = {} = {}", forms.dotted_decimal, forms.decimal, forms.hexadecimal);
                structured_result(summary, forms)
            }
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool.
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{optional_str, required_str};

        let params = Ipv4ConverterParams {
            ip_address: required_str(&arguments, "ip_address")?,
            format: optional_str(&arguments, "format"),
        };
        let result = Self::execute(&params);
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Ipv4ConverterParams>(),
            annotations: None,
            output_schema: Some(schema_for_type::<Ipv4Forms>().into()),
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
                let params: Ipv4ConverterParams =
                    serde_json::from_value(serde_json::Value::Object(args))
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

    fn run(ip_address: &str, format: Option<&str>) -> CallToolResult {
        Ipv4ConverterTool::execute(&Ipv4ConverterParams {
            ip_address: ip_address.to_string(),
            format: format.map(str::to_string),
        })
    }

    #[test]
    fn test_dotted_input_yields_all_forms() {
        let result = run("192.168.1.1", None);
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["dotted_decimal"], "192.168.1.1");
        assert_eq!(structured["decimal"], 3_232_235_777u32);
        assert_eq!(structured["hexadecimal"], "0xC0A80101");
        assert_eq!(
            structured["binary"],
            "11000000101010000000000100000001"
        );
    }

    #[test]
    fn test_forms_agree_across_input_formats() {
        for input in ["10.0.0.1", "167772161", "0x0A000001"] {
            let structured = run(input, None).structured_content.unwrap();
            assert_eq!(structured["dotted_decimal"], "10.0.0.1", "input {input:?}");
            assert_eq!(structured["decimal"], 167_772_161u32, "input {input:?}");
            assert_eq!(structured["hexadecimal"], "0x0A000001", "input {input:?}");
        }
    }

    #[test]
    fn test_format_hint_disambiguates() {
        let as_decimal = run("11", Some("decimal")).structured_content.unwrap();
        assert_eq!(as_decimal["decimal"], 11);

        let auto = run("11", None).structured_content.unwrap();
        assert_eq!(auto["decimal"], 3, "bare 0/1 digits detect as binary");
    }

    #[test]
    fn test_invalid_input_reports_error() {
        for bad in ["", "hello world", "4294967296", "10.0.0.1.2"] {
            let result = run(bad, None);
            assert_eq!(result.is_error, Some(true), "input {bad:?} should fail");
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_with_hint() {
        let args = serde_json::json!({ "ip_address": "FF", "format": "hex" });
        let value = Ipv4ConverterTool::http_handler(args).unwrap();
        assert_eq!(value["structuredContent"]["dotted_decimal"], "0.0.0.255");
    }
}
