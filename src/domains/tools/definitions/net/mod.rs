pub mod converter;
pub mod ipv4;
pub mod range_expander;
pub mod subnet_calculator;

pub use converter::Ipv4ConverterTool;
pub use range_expander::RangeExpanderTool;
pub use subnet_calculator::SubnetCalculatorTool;
