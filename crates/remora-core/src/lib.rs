//! remora-core - Core library for remora.
//!
//! This crate provides the configuration and error types shared by the
//! remora Mem0 client and MCP server crates.
//!
//! # Example
//!
//! ```ignore
//! use remora_core::Config;
//!
//! let config = Config::from_env()?;
//! if !config.has_api_key() {
//!     eprintln!("MEM0_API_KEY is not set; tool calls will fail");
//! }
//! ```

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{Config, Transport};
pub use error::{RemoraError, RemoraResult};
