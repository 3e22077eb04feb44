use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::preflight::{ProbeOptions, TimeoutScope};

/// `[preflight]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreflightConfig {
    /// Probe timeout in seconds.
    pub timeout_secs: u64,
    /// "whole_probe" (one deadline for HEAD and GET) or "per_request".
    pub timeout_scope: TimeoutScope,
    /// Follow redirects and judge the final status instead of accepting 3xx.
    pub follow_redirects: bool,
}

impl Default for PreflightConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            timeout_scope: TimeoutScope::WholeProbe,
            follow_redirects: false,
        }
    }
}

impl PreflightConfig {
    pub fn probe_options(&self) -> ProbeOptions {
        ProbeOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            timeout_scope: self.timeout_scope,
            follow_redirects: self.follow_redirects,
        }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address for `wirecheck serve`.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

/// `[user]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub timeout_secs: u64,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

/// `[email_header]` section. `MOCK_USER_URL` overrides `url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailHeaderConfig {
    /// Mock user endpoint; unset means JSONPlaceholder user #2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for EmailHeaderConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 5,
        }
    }
}

/// Global configuration loaded from `~/.config/wirecheck/config.toml`.
/// Every section is optional; missing keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WirecheckConfig {
    pub preflight: PreflightConfig,
    pub server: ServerConfig,
    pub user: UserConfig,
    pub email_header: EmailHeaderConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wirecheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WirecheckConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<WirecheckConfig> {
    if !path.exists() {
        let default_cfg = WirecheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: WirecheckConfig = toml::from_str(&data)?;
    Ok(cfg)
}
