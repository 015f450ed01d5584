//! IPv4 subnet calculator tool.
//!
//! Takes an address plus CIDR prefix or dotted netmask and derives the
//! network, broadcast, mask, wildcard and usable-host details.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::ipv4::{self, SubnetInfo};
use crate::domains::tools::definitions::common::{error_result, structured_result};

/// Parameters for the subnet calculator.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubnetCalculatorParams {
    /// Address plus prefix or dotted netmask.
    #[schemars(
        description = "IPv4 address with CIDR prefix or dotted netmask, e.g. '192.168.1.50/24' or '10.0.0.1/255.255.0.0'"
    )]
    pub ip_cidr: String,
}

/// Subnet calculator tool - derives subnet details from one CIDR input.
pub struct SubnetCalculatorTool;

impl SubnetCalculatorTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "ipv4_subnet_calculator";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Calculate IPv4 subnet details (network address, broadcast address, netmask, wildcard mask, usable host range, address counts and private/multicast/loopback classification) from an address with a CIDR prefix or dotted netmask. Host bits in the input are allowed and masked off.";

    /// Execute the tool logic (shared by all transports).
    pub fn execute(params: &SubnetCalculatorParams) -> CallToolResult {
        info!("Subnet calculator called for '{}'", params.ip_cidr);

        match ipv4::calculate_subnet(&params.ip_cidr) {
            Ok(subnet) => {
                let summary = format!(
                    "{}/{}: broadcast {}, netmask {}, {} usable host(s)",
                    subnet.network_address,
                    subnet.cidr_prefix,
                    subnet.broadcast_address,
                    subnet.netmask,
                    subnet.num_usable_hosts
                );
                structured_result(summary, subnet)
            }
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool.
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::required_str;

        let ip_cidr = required_str(&arguments, "ip_cidr")?;
        let result = Self::execute(&SubnetCalculatorParams { ip_cidr });
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SubnetCalculatorParams>(),
            annotations: None,
            output_schema: Some(schema_for_type::<SubnetInfo>().into()),
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
                let params: SubnetCalculatorParams =
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
    use rmcp::model::RawContent;

    fn run(ip_cidr: &str) -> CallToolResult {
        SubnetCalculatorTool::execute(&SubnetCalculatorParams {
            ip_cidr: ip_cidr.to_string(),
        })
    }

    #[test]
    fn test_execute_success_structured_content() {
        let result = run("192.168.1.50/24");
        assert_eq!(result.is_error, Some(false));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["network_address"], "192.168.1.0");
        assert_eq!(structured["broadcast_address"], "192.168.1.255");
        assert_eq!(structured["netmask"], "255.255.255.0");
        assert_eq!(structured["wildcard_mask"], "0.0.0.255");
        assert_eq!(structured["cidr_prefix"], 24);
        assert_eq!(structured["num_usable_hosts"], 254);
        assert_eq!(structured["is_private"], true);
    }

    #[test]
    fn test_execute_dotted_mask_input() {
        let result = run("10.1.2.3/255.255.0.0");
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["network_address"], "10.1.0.0");
        assert_eq!(structured["cidr_prefix"], 16);
    }

    #[test]
    fn test_execute_invalid_mask_reports_error() {
        let result = run("10.1.2.3/255.0.255.0");
        assert_eq!(result.is_error, Some(true));
        let text = match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("expected text content"),
        };
        assert!(text.contains("invalid netmask"));
    }

    #[test]
    fn test_execute_malformed_input_reports_error() {
        for bad in ["", "300.1.1.1/24", "10.0.0.1", "10.0.0.1/40"] {
            let result = run(bad);
            assert_eq!(result.is_error, Some(true), "input {bad:?} should fail");
        }
    }

    #[test]
    fn test_summary_text() {
        let result = run("192.168.1.254/30");
        let text = match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("expected text content"),
        };
        assert!(text.contains("192.168.1.252/30"));
        assert!(text.contains("2 usable host(s)"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_roundtrip() {
        let args = serde_json::json!({ "ip_cidr": "172.16.0.0/12" });
        let value = SubnetCalculatorTool::http_handler(args).unwrap();
        assert_eq!(value["structuredContent"]["network_address"], "172.16.0.0");
        assert_eq!(value["isError"], false);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_missing_param() {
        assert!(SubnetCalculatorTool::http_handler(serde_json::json!({})).is_err());
    }
}
