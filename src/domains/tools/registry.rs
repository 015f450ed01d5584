//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

#[cfg(feature = "http")]
use super::error::ToolError;
use super::definitions::{
    Base64ConverterTool, DecryptTool, EncryptTool, HashCalculatorTool, Ipv4ConverterTool,
    RangeExpanderTool, SubnetCalculatorTool, UuidGeneratorTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// Every tool here is a pure computation, so the registry carries no state;
/// it is the central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            SubnetCalculatorTool::NAME,
            RangeExpanderTool::NAME,
            Ipv4ConverterTool::NAME,
            EncryptTool::NAME,
            DecryptTool::NAME,
            HashCalculatorTool::NAME,
            Base64ConverterTool::NAME,
            UuidGeneratorTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SubnetCalculatorTool::to_tool(),
            RangeExpanderTool::to_tool(),
            Ipv4ConverterTool::to_tool(),
            EncryptTool::to_tool(),
            DecryptTool::to_tool(),
            HashCalculatorTool::to_tool(),
            Base64ConverterTool::to_tool(),
            UuidGeneratorTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub fn call_tool(
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let result = match name {
            SubnetCalculatorTool::NAME => SubnetCalculatorTool::http_handler(arguments),
            RangeExpanderTool::NAME => RangeExpanderTool::http_handler(arguments),
            Ipv4ConverterTool::NAME => Ipv4ConverterTool::http_handler(arguments),
            EncryptTool::NAME => EncryptTool::http_handler(arguments),
            DecryptTool::NAME => DecryptTool::http_handler(arguments),
            HashCalculatorTool::NAME => HashCalculatorTool::http_handler(arguments),
            Base64ConverterTool::NAME => Base64ConverterTool::http_handler(arguments),
            UuidGeneratorTool::NAME => UuidGeneratorTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };
        result.map_err(ToolError::execution_failed)
    }
}
