pub mod base64_converter;
pub mod uuid_generator;

pub use base64_converter::Base64ConverterTool;
pub use uuid_generator::UuidGeneratorTool;
