//! Logging init: append to a file under the XDG state dir, or stderr if that fails.

use anyhow::Result;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info,wirecheck=debug,wirecheck_core=debug";

/// Where log output ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

/// Per-event writer: a clone of the log file handle, or stderr if cloning failed.
enum LogWriter {
    File(File),
    Stderr,
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::File(f) => f.write(buf),
            LogWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::File(f) => f.flush(),
            LogWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct SharedLogFile(File);

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogWriter::File)
            .unwrap_or(LogWriter::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/wirecheck/wirecheck.log`, creating the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wirecheck")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir)?;
    Ok(log_dir.join("wirecheck.log"))
}

fn open_log_file() -> Result<(PathBuf, File)> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Install the global subscriber. Logs go to the state-dir file when it can be
/// opened, stderr otherwise. Call once, as early as possible.
pub fn init_logging() -> LogDestination {
    let (writer, destination) = match open_log_file() {
        Ok((path, file)) => (
            BoxMakeWriter::new(SharedLogFile(file)),
            LogDestination::File(path),
        ),
        Err(_) => (BoxMakeWriter::new(io::stderr), LogDestination::Stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    match &destination {
        LogDestination::File(path) => {
            tracing::info!("wirecheck logging initialized at {}", path.display())
        }
        LogDestination::Stderr => tracing::warn!("log file unavailable, logging to stderr"),
    }
    destination
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn log_writer_file_variant_writes() {
        use std::io::{Read, Seek, Write};
        let mut f = tempfile::tempfile().unwrap();
        let mut w = SharedLogFile(f.try_clone().unwrap()).make_writer();
        w.write_all(b"hello\n").unwrap();
        w.flush().unwrap();
        f.rewind().unwrap();
        let mut s = String::new();
        f.read_to_string(&mut s).unwrap();
        assert_eq!(s, "hello\n");
    }
}
