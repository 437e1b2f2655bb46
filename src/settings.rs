//! Startup settings.
//!
//! Read once from `settings.json` in the platform config directory (or a path
//! passed on the command line). Settings only seed the initial view; the view
//! state is never written back.

use crate::constants::{
    APP_DIR_NAME, DEFAULT_LOG_FILTER, DEFAULT_PAGE_SIZE, LOG_FILE_NAME, SETTINGS_FILE_NAME,
};
use crate::data::DataResult;
use crate::query::ViewOptions;
use crate::types::{SortColumn, SortDirection};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rows per page on startup
    pub page_size: usize,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
    /// `tracing` filter directive, overridden by RUST_LOG
    pub log_filter: String,
    /// Log file; defaults to [`default_log_path`]
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort_column: SortColumn::default(),
            sort_direction: SortDirection::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON file
    pub fn load(path: &Path) -> DataResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load settings, falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or malformed one is logged.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            page_size: self.page_size,
            sort_column: self.sort_column,
            sort_direction: self.sort_direction,
        }
    }

    /// Configured log file, or the platform default
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(default_log_path)
    }
}

/// `<config dir>/userview/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// `<cache dir>/userview/userview.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}
