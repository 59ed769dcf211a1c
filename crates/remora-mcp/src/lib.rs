//! MCP server for the Mem0 cloud memory API.
//!
//! Exposes four remote-memory operations as MCP tools, translating each
//! invocation into an authenticated HTTP call against Mem0 Cloud.
//!
//! # Tools
//!
//! - `add_memory` - Store a memory in Mem0 Cloud
//! - `search_memory` - Search memories by semantic similarity
//! - `delete_memory` - Delete a memory by ID
//! - `get_all_memories` - List every memory for the configured user
//!
//! # Configuration
//!
//! The server reads configuration from environment variables:
//!
//! - `MEM0_API_KEY` - Bearer token for Mem0 Cloud (empty disables calls)
//! - `MEM0_USER_ID` - User identifier scoping all operations (default: `n8n_user`)
//! - `MEM0_API_URL` - API base URL (default: `https://api.mem0.ai/v1`)
//! - `TRANSPORT` - `sse` for the HTTP/SSE transport, anything else for stdio
//! - `HOST` / `PORT` - Bind address for the SSE transport (default: `0.0.0.0:6380`)
//!
//! # Usage with an MCP client over stdio
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "remora": {
//!       "command": "/path/to/remora-mcp",
//!       "env": { "TRANSPORT": "stdio", "MEM0_API_KEY": "..." }
//!     }
//!   }
//! }
//! ```

pub mod server;
pub mod tools;
pub mod transport;

pub use server::MemoryServer;
