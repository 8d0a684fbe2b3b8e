//! File-backed structured logging.
//!
//! The terminal is owned by the UI, so log output goes to a file and never to
//! stdout/stderr. `RUST_LOG` takes precedence over the configured level.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::TyperError;

pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber appending to `path`
pub fn init(path: &Path, level: &str) -> Result<(), TyperError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TyperError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn invalid_level_falls_back() {
        let f = filter("not a [valid directive");
        assert!(!f.to_string().is_empty());
    }

    #[test]
    fn init_creates_log_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("typer.log");

        // Another test may already own the global subscriber.
        let _ = init(&path, "debug");

        assert!(path.exists());
    }
}
