//! Tracing subscriber setup.
//!
//! The table owns the terminal, so log output goes to a file. When no file
//! can be opened, logging stays disabled.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Build the filter from RUST_LOG, else from `fallback`
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(crate::constants::DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to `log_path`.
///
/// Returns `false` if logging could not be set up.
pub fn init(log_path: Option<&Path>, filter: &str) -> bool {
    let Some(file) = log_path.and_then(open_log_file) else {
        return false;
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
