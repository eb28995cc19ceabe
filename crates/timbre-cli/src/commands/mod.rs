//! CLI command implementations.

pub mod analyze;
pub mod apply;
pub mod common;
pub mod generate;
pub mod info;
pub mod peaks;
pub mod profiles;
