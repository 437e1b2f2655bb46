//! Application-wide constants.
//!
//! Centralizes limits, defaults and the fixed display labels so the parser,
//! query engine and table view agree on them.

// ============================================================================
// Parsing
// ============================================================================

/// Characters accepted as field separators (may vary from line to line)
pub const FIELD_DELIMITERS: &[char] = &[',', ';'];

/// Number of fields a record line must contain
pub const REQUIRED_FIELD_COUNT: usize = 6;

/// Maximum input file size in MB for eager loading
pub const MAX_FILE_SIZE_MB: usize = 256;

/// File name looked up next to the executable when no path is given
pub const DEFAULT_INPUT_FILE: &str = "user.txt";

// ============================================================================
// View Defaults
// ============================================================================

/// Rows per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ============================================================================
// Table Layout
// ============================================================================

/// Display width of each column, in characters, in column order
pub const COLUMN_WIDTHS: [usize; 6] = [5, 15, 15, 35, 12, 15];

/// Column header labels, in column order
pub const COLUMN_LABELS: [&str; 6] = ["ID", "First name", "Last name", "Email", "Gender", "IP address"];

/// Marker appended to values cut to fit their column
pub const TRUNCATION_MARKER: char = '~';

// ============================================================================
// Menu Labels
// ============================================================================

pub const MENU_TITLE: &str = "Controls:";

pub const MENU_NAVIGATION: &str =
    "Q - Quit | N - Next page | P - Previous page | S - Search | O - Page size";

pub const MENU_SORTING: &str = "1-6 - Sort by column | 7 - Toggle sort direction";

pub const SEARCH_PROMPT: &str = "Search text: ";

pub const PAGE_SIZE_PROMPT: &str = "New page size: ";

// ============================================================================
// Settings & Logging
// ============================================================================

/// Directory name used under the platform config and cache directories
pub const APP_DIR_NAME: &str = "userview";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const LOG_FILE_NAME: &str = "userview.log";

/// Filter used when neither RUST_LOG nor the settings file sets one
pub const DEFAULT_LOG_FILTER: &str = "warn";
