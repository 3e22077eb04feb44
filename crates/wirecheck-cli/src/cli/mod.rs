//! CLI for wirecheck.

mod commands;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use wirecheck_core::config;

use commands::{
    run_completions, run_email_header, run_preflight, run_serve, run_user, run_validate,
    PreflightArgs,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "wirecheck")]
#[command(about = "wirecheck: JSON validation, HTTP preflight and small REST demos", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check that a file (or stdin) holds exactly one JSON value.
    Validate {
        /// Path to the JSON file; omit or pass `-` for stdin.
        path: Option<PathBuf>,
    },

    /// Check that a URL is reachable (HEAD, then a one-byte GET).
    Preflight {
        /// Absolute http/https URL.
        url: String,
        #[command(flatten)]
        args: PreflightArgs,
    },

    /// Preflight a user endpoint, then fetch and pretty-print the user.
    User {
        /// Absolute http/https URL of the user record.
        url: String,
        #[command(flatten)]
        args: PreflightArgs,
    },

    /// Fetch an email from the mock user endpoint and print the CUSTOM-EMAIL header.
    EmailHeader {
        /// Mock user endpoint (default: $MOCK_USER_URL, then config, then JSONPlaceholder).
        #[arg(long)]
        url: Option<String>,
    },

    /// Run the demo HTTP server (/, /ping, /echo, /email-header).
    Serve {
        /// Listen address, e.g. 127.0.0.1:8080 (default from config).
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Validate { path } => run_validate(path.as_deref()).await?,
            CliCommand::Preflight { url, args } => run_preflight(&cfg, &url, &args).await?,
            CliCommand::User { url, args } => run_user(&cfg, &url, &args).await?,
            CliCommand::EmailHeader { url } => run_email_header(&cfg, url.as_deref()).await?,
            CliCommand::Serve { bind } => run_serve(&cfg, bind.as_deref()).await?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
