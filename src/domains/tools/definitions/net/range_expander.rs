//! IPv4 range expander tool.
//!
//! Expands a CIDR block, a hyphenated range or a single address into an
//! ordered address list, capped at [`ipv4::MAX_EXPANDED_ADDRESSES`].

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::ipv4::{self, RangeResult};
use crate::domains::tools::definitions::common::{error_result, structured_result};

/// Parameters for the range expander.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RangeExpanderParams {
    /// The range to expand.
    #[schemars(
        description = "IPv4 range as CIDR ('10.0.0.0/24'), hyphenated bounds ('10.0.0.1-10.0.0.9') or a single address"
    )]
    pub ip_range: String,
}

/// Range expander tool - enumerates the addresses of an IPv4 range.
pub struct RangeExpanderTool;

impl RangeExpanderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "ipv4_range_expander";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Expand an IPv4 CIDR block or hyphenated range into the list of individual addresses in ascending order. The list is capped at 65536 entries; the reported count is always the true total and a truncated flag marks capped results.";

    /// Execute the tool logic (shared by all transports).
    pub fn execute(params: &RangeExpanderParams) -> CallToolResult {
        info!("Range expander called for '{}'", params.ip_range);

        match ipv4::expand_range(&params.ip_range) {
            Ok(range) => {
                let summary = if range.truncated {
                    format!(
                        "{} address(es) in range, returning the first {}",
                        range.count,
                        range.addresses.len()
                    )
                } else {
                    format!("{} address(es) in range", range.count)
                };
                structured_result(summary, range)
            }
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool.
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::required_str;

        let ip_range = required_str(&arguments, "ip_range")?;
        let result = Self::execute(&RangeExpanderParams { ip_range });
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RangeExpanderParams>(),
            annotations: None,
            output_schema: Some(schema_for_type::<RangeResult>().into()),
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
                let params: RangeExpanderParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
