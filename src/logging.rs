use std::{
    fs::{File, OpenOptions},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[must_use]
pub fn file_subscriber(file: File, filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .finish()
}

/// The TUI owns the terminal, so without a log file tracing stays disabled.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let subscriber = file_subscriber(open_log_file(path)?, filter_from_env());
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;
    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_appended_to_the_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("weather.log");
        std::fs::write(&path, "existing\n").expect("seed file");

        let subscriber =
            file_subscriber(open_log_file(&path).expect("open"), EnvFilter::new("debug"));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(city = "Oslo", "weather query submitted");
            tracing::trace!("filtered out");
        });

        let contents = std::fs::read_to_string(&path).expect("read log");
        assert!(contents.starts_with("existing\n"));
        assert!(contents.contains("weather query submitted"));
        assert!(contents.contains("city=\"Oslo\""));
        assert!(!contents.contains("filtered out"));
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = open_log_file(&dir.path().join("nope").join("x.log")).expect_err("no dir");
        assert!(err.to_string().contains("failed to open log file"));
    }

    #[test]
    fn no_path_means_no_subscriber() {
        assert!(init(None).is_ok());
    }
}
