//! MCP server implementation for the Mem0 adapter.
//!
//! Uses the rmcp SDK's macro-based approach for defining tools. Every tool
//! funnels through [`render`], which serializes either the success payload or
//! a flat `{"error": "..."}` object into the tool result text. Failures are
//! never surfaced as MCP protocol errors; the flat shape is the contract
//! clients of this adapter consume.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
    ErrorData as McpError, ServerHandler,
};
use serde_json::{json, Value};

use remora_client::MemoryClient;
use remora_core::{Config, RemoraError, RemoraResult};

use crate::tools::*;

/// MCP server for Mem0 memory operations.
///
/// Holds the immutable process configuration and a shared HTTP client; tool
/// invocations are independent, so the server clones freely across sessions.
#[derive(Clone)]
pub struct MemoryServer {
    config: Config,
    client: MemoryClient,
    tool_router: ToolRouter<MemoryServer>,
}

/// Serialize a tool outcome into the flat result contract.
fn render(result: RemoraResult<Value>) -> CallToolResult {
    let body = match result {
        Ok(value) => value,
        Err(e) => json!({ "error": e.to_string() }),
    };
    CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&body).unwrap_or_default(),
    )])
}

#[tool_router]
impl MemoryServer {
    /// Create a new MemoryServer from the loaded configuration and client.
    pub fn new(config: Config, client: MemoryClient) -> Self {
        Self {
            config,
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// Refuse the call before any network I/O when no API key is configured.
    fn require_api_key(&self, action: &str) -> RemoraResult<()> {
        if self.config.has_api_key() {
            Ok(())
        } else {
            Err(RemoraError::missing_api_key(action))
        }
    }

    /// Store a memory in Mem0 Cloud.
    #[tool(
        name = "add_memory",
        description = "Store a memory in Mem0 Cloud. The content is saved verbatim with optional metadata and can be retrieved later by semantic search."
    )]
    async fn add_memory(
        &self,
        Parameters(input): Parameters<AddMemoryInput>,
    ) -> Result<CallToolResult, McpError> {
        let result = match self.require_api_key("Cannot add memory.") {
            Ok(()) => self.client.add(&input.content, input.metadata).await,
            Err(e) => Err(e),
        };
        Ok(render(result))
    }

    /// Search memories by semantic similarity.
    #[tool(
        name = "search_memory",
        description = "Search memories in Mem0 Cloud by semantic similarity. Returns the memories matching the query above the given threshold."
    )]
    async fn search_memory(
        &self,
        Parameters(input): Parameters<SearchMemoryInput>,
    ) -> Result<CallToolResult, McpError> {
        let result = match self.require_api_key("Cannot search memories.") {
            Ok(()) => self
                .client
                .search(&input.query, input.threshold)
                .await
                .map(Value::Array),
            Err(e) => Err(e),
        };
        Ok(render(result))
    }

    /// Delete a memory by its ID.
    #[tool(
        name = "delete_memory",
        description = "Delete a specific memory from Mem0 Cloud by its ID. This permanently removes the memory."
    )]
    async fn delete_memory(
        &self,
        Parameters(input): Parameters<DeleteMemoryInput>,
    ) -> Result<CallToolResult, McpError> {
        let result = match self.require_api_key("Cannot delete memory.") {
            Ok(()) => self.client.delete(&input.memory_id).await.map(|()| {
                json!({ "success": true, "message": "Memory deleted successfully" })
            }),
            Err(e) => Err(e),
        };
        Ok(render(result))
    }

    /// List every memory stored for the configured user.
    #[tool(
        name = "get_all_memories",
        description = "Retrieve all memories stored in Mem0 Cloud for the configured user."
    )]
    async fn get_all_memories(&self) -> Result<CallToolResult, McpError> {
        let result = match self.require_api_key("Cannot fetch memories.") {
            Ok(()) => self.client.get_all().await.map(Value::Array),
            Err(e) => Err(e),
        };
        Ok(render(result))
    }
}

#[tool_handler]
impl ServerHandler for MemoryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Mem0 Memory Server - long-term memory backed by Mem0 Cloud. \
                 Use add_memory to store new memories, search_memory to find \
                 relevant memories for a query, get_all_memories to list \
                 everything stored, and delete_memory to remove a memory by ID."
                    .to_string(),
            ),
        }
    }
}
