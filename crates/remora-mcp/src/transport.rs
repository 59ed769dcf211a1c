//! Transport front-ends for the MCP server.
//!
//! Both transports serve the same [`MemoryServer`]; selection happens once at
//! startup from configuration. The SSE transport mounts the MCP channel on
//! `/sse` (client-bound event stream) and `/message` (client POSTs) of an
//! axum app bound to the configured address; the stdio transport speaks over
//! the process's standard streams for direct embedding.

use std::future::IntoFuture;
use std::net::SocketAddr;

use anyhow::Result;
use rmcp::{
    transport::{
        sse_server::{SseServer, SseServerConfig},
        stdio,
    },
    ServiceExt,
};
use tokio_util::sync::CancellationToken;

use crate::server::MemoryServer;

/// Serve over standard input/output until the client disconnects.
pub async fn run_stdio(server: MemoryServer) -> Result<()> {
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Server error: {:?}", e);
    })?;

    tracing::info!("MCP server running on stdio");

    service.waiting().await?;
    Ok(())
}

/// Serve over SSE on the given bind address until ctrl-c.
pub async fn run_sse(server: MemoryServer, host: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    let shutdown_token = CancellationToken::new();
    let config = SseServerConfig {
        bind: addr,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: shutdown_token.clone(),
        sse_keep_alive: None,
    };

    let (sse_server, router) = SseServer::new(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    sse_server.with_service(move || server.clone());

    tracing::info!(%addr, "MCP server listening (SSE transport)");

    let server_shutdown = shutdown_token.child_token();
    let serve = axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            server_shutdown.cancelled().await;
        })
        .into_future();
    tokio::pin!(serve);

    tokio::select! {
        res = &mut serve => res?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("ctrl_c received; shutting down SSE server");
            shutdown_token.cancel();
            serve.as_mut().await?;
        }
    }

    Ok(())
}
