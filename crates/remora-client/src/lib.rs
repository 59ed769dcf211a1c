//! remora-client - Client library for the Mem0 cloud memory API.
//!
//! This crate provides a thin async client for the four memory operations
//! the remora MCP server exposes. Responses are passed through as opaque
//! JSON; the client never inspects memory contents.
//!
//! # Example
//!
//! ```ignore
//! use remora_client::MemoryClient;
//!
//! let client = MemoryClient::new("your-api-key", "https://api.mem0.ai/v1", "user-123");
//!
//! // Add a memory
//! let result = client.add("I love programming in Rust", None).await?;
//!
//! // Search memories
//! let memories = client.search("programming", 0.7).await?;
//! ```

mod client;

pub use client::MemoryClient;
