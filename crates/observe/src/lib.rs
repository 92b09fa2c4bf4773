//! This crate contains the logging setup shared by the deployer, the uploader
//! and the end-to-end test harness.
pub mod config;
pub mod panic_hook;
pub mod tracing;

pub use config::Config;
