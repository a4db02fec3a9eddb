pub mod config;
pub mod constants;
pub mod field;

pub use config::*;
pub use field::*;
