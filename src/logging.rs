use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// File that receives log output. Logging stays off when unset, since the
/// terminal belongs to the UI.
pub const LOG_FILE_ENV: &str = "ANIVISION_LOG";
pub const LOG_LEVEL_ENV: &str = "ANIVISION_LOG_LEVEL";

const DEFAULT_LEVEL: &str = "info";

pub fn log_path() -> Option<PathBuf> {
    std::env::var(LOG_FILE_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn filter() -> EnvFilter {
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LEVEL.to_string());
    EnvFilter::try_new(level.trim()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Returns whether a subscriber was installed.
pub fn init() -> Result<bool> {
    let Some(path) = log_path() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let installed = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter())
        .try_init()
        .is_ok();
    Ok(installed)
}
