//! Tool Router - builds the rmcp ToolRouter from registry.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    Base64ConverterTool, DecryptTool, EncryptTool, HashCalculatorTool, Ipv4ConverterTool,
    RangeExpanderTool, SubnetCalculatorTool, UuidGeneratorTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SubnetCalculatorTool::create_route())
        .with_route(RangeExpanderTool::create_route())
        .with_route(Ipv4ConverterTool::create_route())
        .with_route(EncryptTool::create_route())
        .with_route(DecryptTool::create_route())
        .with_route(HashCalculatorTool::create_route())
        .with_route(Base64ConverterTool::create_route())
        .with_route(UuidGeneratorTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 8);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"ipv4_subnet_calculator"));
        assert!(names.contains(&"ipv4_range_expander"));
        assert!(names.contains(&"ipv4_converter"));
        assert!(names.contains(&"encrypt_text"));
        assert!(names.contains(&"decrypt_text"));
        assert!(names.contains(&"hash_calculator"));
        assert!(names.contains(&"base64_converter"));
        assert!(names.contains(&"uuid_generator"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router();
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
