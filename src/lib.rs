//! IT Tools MCP Server Library
//!
//! This crate provides a stateless Model Context Protocol (MCP) server for
//! common IT utility tasks with a modular architecture organized by domains.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients (IPv4 subnet
//!     math, range expansion, password-based encryption, hashing, Base64,
//!     UUID generation)
//!
//! # Example
//!
//! ```rust,no_run
//! use it_tools_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
