//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod codec;
mod common;
pub mod crypto;
pub mod net;

pub use codec::{Base64ConverterTool, UuidGeneratorTool};
pub use crypto::{DecryptTool, EncryptTool, HashCalculatorTool};
pub use net::{Ipv4ConverterTool, RangeExpanderTool, SubnetCalculatorTool};
