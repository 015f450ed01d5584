pub mod cipher;
pub mod decrypt;
pub mod encrypt;
pub mod hash;

pub use decrypt::DecryptTool;
pub use encrypt::EncryptTool;
pub use hash::HashCalculatorTool;
