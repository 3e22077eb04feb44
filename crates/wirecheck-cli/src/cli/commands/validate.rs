//! `wirecheck validate [path]` – check a JSON document.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use wirecheck_core::validate;

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read(p).with_context(|| format!("read {}", p.display()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

/// Prints `ok` when the input is one non-empty JSON value; errors otherwise.
pub async fn run_validate(path: Option<&Path>) -> Result<()> {
    let data = read_input(path)?;
    validate::validate_body(&data).context("invalid JSON")?;
    println!("ok");
    Ok(())
}
