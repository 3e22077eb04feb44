//! Demo HTTP server: a greeting, a ping, a JSON echo and the email header.

mod routes;

use anyhow::{Context, Result};
use std::time::Duration;

pub use routes::router;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Mock user endpoint for `/email-header`.
    pub email_url: String,
    pub email_timeout: Duration,
}

/// Binds `bind` and serves until the process is stopped.
pub async fn serve(bind: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("bind {}", bind))?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .await
        .context("http server")?;
    Ok(())
}
