//! `wirecheck preflight <url>` – reachability check.

use anyhow::{Context, Result};
use clap::Args;
use std::time::Duration;
use wirecheck_core::config::{PreflightConfig, WirecheckConfig};
use wirecheck_core::preflight::{self, CurlTransport, ProbeOptions, TimeoutScope};

/// Probe flags shared by `preflight` and `user`. Unset flags fall back to config.
#[derive(Debug, Clone, Default, Args)]
pub struct PreflightArgs {
    /// Timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
    /// Give HEAD and the fallback GET the full timeout each instead of one shared deadline.
    #[arg(long)]
    pub per_request_timeout: bool,
    /// Follow redirects and judge the final status instead of accepting 3xx.
    #[arg(long)]
    pub follow_redirects: bool,
}

impl PreflightArgs {
    pub fn probe_options(&self, cfg: &PreflightConfig) -> ProbeOptions {
        let mut opts = cfg.probe_options();
        if let Some(secs) = self.timeout {
            opts.timeout = Duration::from_secs(secs);
        }
        if self.per_request_timeout {
            opts.timeout_scope = TimeoutScope::PerRequest;
        }
        if self.follow_redirects {
            opts.follow_redirects = true;
        }
        opts
    }
}

/// Runs the probe on the blocking pool.
pub(super) async fn probe_blocking(url: &str, opts: ProbeOptions) -> Result<()> {
    let url = url.to_string();
    tokio::task::spawn_blocking(move || preflight::probe(&CurlTransport, &url, &opts))
        .await
        .context("preflight task join")??;
    Ok(())
}

pub async fn run_preflight(cfg: &WirecheckConfig, url: &str, args: &PreflightArgs) -> Result<()> {
    let opts = args.probe_options(&cfg.preflight);
    tracing::info!(url, ?opts, "preflight");
    probe_blocking(url, opts).await.context("preflight failed")?;
    println!("reachable: {}", url);
    Ok(())
}
