//! Memory client implementation for the Mem0 cloud API.

use remora_core::error::{RemoraError, RemoraResult};

use reqwest::Client;
use serde_json::{json, Value};

/// Client for the Mem0 cloud API.
///
/// Holds a pooled `reqwest::Client`, so one instance can serve concurrent
/// tool calls without any locking. Each operation is a single round trip;
/// no retries are attempted.
#[derive(Clone)]
pub struct MemoryClient {
    client: Client,
    api_key: String,
    base_url: String,
    user_id: String,
}

impl MemoryClient {
    /// Create a new memory client.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            user_id: user_id.into(),
        }
    }

    /// Create a client from a loaded configuration.
    pub fn from_config(config: &remora_core::Config) -> Self {
        Self::new(&config.api_key, &config.api_url, &config.user_id)
    }

    fn headers(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Ok(auth) = format!("Bearer {}", self.api_key).parse() {
            headers.insert("Authorization", auth);
        }
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers
    }

    /// Add a memory.
    ///
    /// Sends `{content, userId, metadata}` and returns the decoded response
    /// body verbatim. An absent metadata mapping is normalized to `{}`.
    pub async fn add(&self, content: &str, metadata: Option<Value>) -> RemoraResult<Value> {
        let body = json!({
            "content": content,
            "userId": self.user_id,
            "metadata": metadata.unwrap_or_else(|| json!({})),
        });

        tracing::debug!(user_id = %self.user_id, "adding memory");

        let response = self
            .client
            .post(format!("{}/memories", self.base_url))
            .headers(self.headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoraError::api(format!("Failed to add memory: {}", e)))?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(RemoraError::api(format!("Failed to add memory: {}", error)));
        }

        response
            .json()
            .await
            .map_err(|e| RemoraError::api(format!("Failed to parse response: {}", e)))
    }

    /// Search memories by semantic similarity.
    ///
    /// Returns the `memories` array of the response, or an empty vector when
    /// the field is absent. The threshold is forwarded unvalidated.
    pub async fn search(&self, query: &str, threshold: f64) -> RemoraResult<Vec<Value>> {
        let body = json!({
            "query": query,
            "userId": self.user_id,
            "threshold": threshold,
        });

        tracing::debug!(user_id = %self.user_id, threshold, "searching memories");

        let response = self
            .client
            .post(format!("{}/memories/search", self.base_url))
            .headers(self.headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoraError::api(format!("Failed to search memories: {}", e)))?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(RemoraError::api(format!(
                "Failed to search memories: {}",
                error
            )));
        }

        let result: Value = response
            .json()
            .await
            .map_err(|e| RemoraError::api(format!("Failed to parse response: {}", e)))?;

        Ok(extract_memories(result))
    }

    /// Delete a memory by ID.
    ///
    /// The remote response body is discarded on success.
    pub async fn delete(&self, memory_id: &str) -> RemoraResult<()> {
        tracing::debug!(user_id = %self.user_id, memory_id, "deleting memory");

        let response = self
            .client
            .delete(format!("{}/memories/{}", self.base_url, memory_id))
            .headers(self.headers())
            .query(&[("userId", self.user_id.as_str())])
            .send()
            .await
            .map_err(|e| RemoraError::api(format!("Failed to delete memory: {}", e)))?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(RemoraError::api(format!(
                "Failed to delete memory: {}",
                error
            )));
        }

        Ok(())
    }

    /// Get all memories for the configured user.
    ///
    /// Returns the `memories` array of the response, or an empty vector when
    /// the field is absent.
    pub async fn get_all(&self) -> RemoraResult<Vec<Value>> {
        tracing::debug!(user_id = %self.user_id, "fetching all memories");

        let response = self
            .client
            .get(format!("{}/memories", self.base_url))
            .headers(self.headers())
            .query(&[("userId", self.user_id.as_str())])
            .send()
            .await
            .map_err(|e| RemoraError::api(format!("Failed to fetch memories: {}", e)))?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(RemoraError::api(format!(
                "Failed to fetch memories: {}",
                error
            )));
        }

        let result: Value = response
            .json()
            .await
            .map_err(|e| RemoraError::api(format!("Failed to parse response: {}", e)))?;

        Ok(extract_memories(result))
    }
}

/// Pull the `memories` array out of a response body, defaulting to empty.
fn extract_memories(body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut map) => match map.remove("memories") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_memories_present() {
        let body = json!({"memories": [{"id": "a"}, {"id": "b"}]});
        let memories = extract_memories(body);
        assert_eq!(memories.len(), 2);
        assert_eq!(memories[0]["id"], "a");
    }

    #[test]
    fn test_extract_memories_absent_field() {
        assert!(extract_memories(json!({"results": []})).is_empty());
    }

    #[test]
    fn test_extract_memories_non_object_body() {
        assert!(extract_memories(json!([1, 2, 3])).is_empty());
        assert!(extract_memories(json!(null)).is_empty());
    }
}
