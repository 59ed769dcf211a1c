//! MCP tool input type definitions.
//!
//! These types are used with `schemars::JsonSchema` to generate the JSON Schema
//! that MCP clients use to understand tool parameters. None of them validate
//! beyond requiredness: thresholds, memory IDs, and metadata are forwarded to
//! Mem0 exactly as received.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

/// Input for the add_memory tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddMemoryInput {
    /// The text content to store as a memory.
    pub content: String,

    /// Optional metadata as a JSON object.
    /// Sent to Mem0 unchanged; an empty object is used when omitted.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Input for the search_memory tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchMemoryInput {
    /// The search query text.
    pub query: String,

    /// Similarity threshold, nominally between 0 and 1.
    /// Forwarded without bounds checking.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.7
}

/// Input for the delete_memory tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteMemoryInput {
    /// The ID of the memory to delete, as issued by Mem0.
    pub memory_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_memory_input_schema() {
        let schema = rmcp::schemars::schema_for!(AddMemoryInput);
        let json = serde_json::to_string_pretty(&schema).unwrap();
        assert!(json.contains("content"));
        assert!(json.contains("metadata"));
    }

    #[test]
    fn test_add_memory_input_metadata_defaults_to_none() {
        let input: AddMemoryInput = serde_json::from_str(r#"{"content": "hello"}"#).unwrap();
        assert!(input.metadata.is_none());
    }

    #[test]
    fn test_search_memory_input_default_threshold() {
        let input: SearchMemoryInput = serde_json::from_str(r#"{"query": "test"}"#).unwrap();
        assert_eq!(input.threshold, 0.7);
    }

    #[test]
    fn test_search_memory_input_accepts_any_threshold() {
        let input: SearchMemoryInput =
            serde_json::from_str(r#"{"query": "test", "threshold": -2.5}"#).unwrap();
        assert_eq!(input.threshold, -2.5);
    }

    #[test]
    fn test_delete_memory_input_schema() {
        let schema = rmcp::schemars::schema_for!(DeleteMemoryInput);
        let json = serde_json::to_string_pretty(&schema).unwrap();
        assert!(json.contains("memory_id"));
    }
}
