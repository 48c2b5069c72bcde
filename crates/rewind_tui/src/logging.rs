//! Tracing subscriber setup.
//!
//! Both initializers return whether their subscriber was installed. When one
//! is already in place it is kept and the new one is discarded.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn installed<E: std::fmt::Display>(result: std::result::Result<(), E>, writer: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, writer, "Subscriber already installed, keeping it");
            false
        }
    }
}

/// Logs to a file so output does not corrupt the terminal UI.
pub fn init_file(path: &Path, default_filter: &str) -> Result<bool> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(installed(result, "file"))
}

/// Logs to stderr, keeping stdout for command output.
pub fn init_stderr(default_filter: &str) -> bool {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter))
        .with_writer(std::io::stderr)
        .try_init();
    installed(result, "stderr")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_existing_subscriber() {
        // The first call may lose to another test in this process.
        init_stderr("info");
        assert!(!init_stderr("info"));

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rewind.log");
        assert!(!init_file(&path, "info").expect("log file"));
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_log_path_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("rewind.log");
        assert!(init_file(&path, "info").is_err());
    }
}
