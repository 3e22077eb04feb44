//! `wirecheck email-header` – build the CUSTOM-EMAIL header from the mock endpoint.

use anyhow::{Context, Result};
use std::time::Duration;
use wirecheck_core::config::WirecheckConfig;
use wirecheck_core::email_header;

pub async fn run_email_header(cfg: &WirecheckConfig, url: Option<&str>) -> Result<()> {
    let url = match url {
        Some(u) => u.to_string(),
        None => email_header::resolve_mock_user_url(cfg.email_header.url.as_deref()),
    };
    let timeout = Duration::from_secs(cfg.email_header.timeout_secs);
    let headers = tokio::task::spawn_blocking(move || {
        email_header::create_email_header(&url, timeout)
    })
    .await
    .context("email header task join")??;

    for (name, values) in &headers {
        for value in values {
            println!("{}: {}", name, value);
        }
    }
    Ok(())
}
