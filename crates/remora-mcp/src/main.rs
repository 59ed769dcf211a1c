//! remora-mcp - MCP server bridging MCP clients to Mem0 Cloud.
//!
//! Reads configuration from the environment (optionally via a `.env` file),
//! then serves the memory tools over the selected transport. A missing
//! `MEM0_API_KEY` does not stop the server: each tool call reports the
//! missing key instead, so the endpoint stays reachable.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use remora_client::MemoryClient;
use remora_core::{Config, Transport};
use remora_mcp::{transport, MemoryServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing to stderr (stdout is used for MCP stdio transport)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = Config::from_env()?;

    if config.has_api_key() {
        tracing::info!(user_id = %config.user_id, "connecting to Mem0 Cloud");
    } else {
        tracing::warn!(
            "MEM0_API_KEY is not set; the server will start, but every tool call \
             will return an error until it is configured"
        );
    }

    let client = MemoryClient::from_config(&config);
    let server = MemoryServer::new(config.clone(), client);

    match config.transport {
        Transport::Sse => {
            tracing::info!(host = %config.host, port = config.port, "starting MCP server (SSE transport)");
            transport::run_sse(server, &config.host, config.port).await
        }
        Transport::Stdio => {
            tracing::info!("starting MCP server (stdio transport)");
            transport::run_stdio(server).await
        }
    }
}
