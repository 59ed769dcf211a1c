//! Configuration for remora.
//!
//! All configuration comes from environment variables, read once at startup
//! into an immutable [`Config`]. A missing `MEM0_API_KEY` is not a startup
//! error: the server boots anyway and every tool call reports the missing
//! key instead, so clients get a clear per-call message rather than a dead
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::error::{RemoraError, RemoraResult};

/// MCP transport selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Server-sent events over HTTP, bound to `host:port`.
    #[default]
    Sse,
    /// Standard input/output, for direct process embedding.
    Stdio,
}

/// Process-wide configuration, immutable after [`Config::from_env`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bearer token for the Mem0 cloud API. Empty means unconfigured.
    pub api_key: String,
    /// User identifier scoping every remote operation.
    pub user_id: String,
    /// Base URL for all Mem0 API requests.
    pub api_url: String,
    /// Transport the MCP server is exposed over.
    pub transport: Transport,
    /// Bind address for the SSE transport.
    pub host: String,
    /// Bind port for the SSE transport.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            user_id: "n8n_user".to_string(),
            api_url: "https://api.mem0.ai/v1".to_string(),
            transport: Transport::Sse,
            host: "0.0.0.0".to_string(),
            port: 6380,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// `TRANSPORT=sse` selects the SSE transport; any other value selects
    /// stdio. An unparseable `PORT` is a configuration error.
    pub fn from_env() -> RemoraResult<Self> {
        let defaults = Self::default();

        let transport = match std::env::var("TRANSPORT") {
            Ok(value) if value != "sse" => Transport::Stdio,
            _ => Transport::Sse,
        };

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| {
                RemoraError::Configuration(format!("PORT must be a valid port number, got '{value}'"))
            })?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            api_key: std::env::var("MEM0_API_KEY").unwrap_or(defaults.api_key),
            user_id: std::env::var("MEM0_USER_ID").unwrap_or(defaults.user_id),
            api_url: std::env::var("MEM0_API_URL").unwrap_or(defaults.api_url),
            transport,
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port,
        })
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 6] = [
        "MEM0_API_KEY",
        "MEM0_USER_ID",
        "MEM0_API_URL",
        "TRANSPORT",
        "HOST",
        "PORT",
    ];

    fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
        VARS.iter().map(|v| (*v, None)).collect()
    }

    #[test]
    fn test_defaults_when_env_unset() {
        temp_env::with_vars(unset_all(), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.api_key, "");
            assert!(!config.has_api_key());
            assert_eq!(config.user_id, "n8n_user");
            assert_eq!(config.api_url, "https://api.mem0.ai/v1");
            assert_eq!(config.transport, Transport::Sse);
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 6380);
        });
    }

    #[test]
    fn test_env_overrides() {
        temp_env::with_vars(
            [
                ("MEM0_API_KEY", Some("m0-test")),
                ("MEM0_USER_ID", Some("alice")),
                ("MEM0_API_URL", Some("http://localhost:9000/v1")),
                ("TRANSPORT", Some("sse")),
                ("HOST", Some("127.0.0.1")),
                ("PORT", Some("7777")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.has_api_key());
                assert_eq!(config.user_id, "alice");
                assert_eq!(config.api_url, "http://localhost:9000/v1");
                assert_eq!(config.transport, Transport::Sse);
                assert_eq!(config.host, "127.0.0.1");
                assert_eq!(config.port, 7777);
            },
        );
    }

    #[test]
    fn test_non_sse_transport_selects_stdio() {
        temp_env::with_vars([("TRANSPORT", Some("stdio")), ("PORT", None)], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.transport, Transport::Stdio);
        });

        // Any value other than "sse" means stdio, matching startup selection.
        temp_env::with_vars([("TRANSPORT", Some("bogus")), ("PORT", None)], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.transport, Transport::Stdio);
        });
    }

    #[test]
    fn test_invalid_port_is_configuration_error() {
        temp_env::with_vars([("PORT", Some("not-a-port"))], || {
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, RemoraError::Configuration(_)));
            assert!(err.to_string().contains("PORT"));
        });
    }
}
