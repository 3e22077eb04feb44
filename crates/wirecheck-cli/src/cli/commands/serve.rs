//! `wirecheck serve` – run the demo HTTP server.

use anyhow::Result;
use std::time::Duration;
use wirecheck_core::config::WirecheckConfig;
use wirecheck_core::email_header;

use crate::cli::server::{self, AppState};

pub async fn run_serve(cfg: &WirecheckConfig, bind: Option<&str>) -> Result<()> {
    let bind = bind.unwrap_or(cfg.server.bind.as_str());
    let state = AppState {
        email_url: email_header::resolve_mock_user_url(cfg.email_header.url.as_deref()),
        email_timeout: Duration::from_secs(cfg.email_header.timeout_secs),
    };
    server::serve(bind, state).await
}
