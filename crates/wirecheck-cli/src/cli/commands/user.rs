//! `wirecheck user <url>` – preflight, fetch, and pretty-print a user record.

use anyhow::{Context, Result};
use std::time::Duration;
use wirecheck_core::config::WirecheckConfig;
use wirecheck_core::user;

use super::preflight::{probe_blocking, PreflightArgs};

pub async fn run_user(cfg: &WirecheckConfig, url: &str, args: &PreflightArgs) -> Result<()> {
    probe_blocking(url, args.probe_options(&cfg.preflight))
        .await
        .context("preflight failed")?;

    let timeout = Duration::from_secs(args.timeout.unwrap_or(cfg.user.timeout_secs));
    let u = tokio::task::spawn_blocking({
        let url = url.to_string();
        move || user::fetch_user(&url, timeout)
    })
    .await
    .context("user fetch task join")??;

    println!("{}", user::to_pretty_json(&u).context("print")?);
    Ok(())
}
