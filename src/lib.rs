//! # userview
//!
//! Loads a delimited file of user records and browses it as a paged,
//! sortable, searchable terminal table.
//!
//! - [`data`]: tolerant line parser producing [`Record`]s and per-line errors
//! - [`query`]: filter/sort/paginate engine over the loaded records
//! - [`tui`]: crossterm front end driving the engine
//!
//! ## Example
//!
//! ```rust,ignore
//! use userview::{QueryEngine, parse_file};
//!
//! let outcome = parse_file(["id,first,last,email,gender,ip", "1,John,Doe,j@x.com,M,1.1.1.1"]);
//! let mut engine = QueryEngine::new(outcome.records);
//! engine.set_search_term("john");
//! assert_eq!(engine.filtered_count(), 1);
//! ```

pub mod constants;
pub mod data;
pub mod logging;
pub mod query;
pub mod settings;
pub mod tui;
pub mod types;

pub use data::{
    DataError, DataResult, FormatError, LineError, ParseOutcome, clean_field, load_file,
    load_file_with_limit, parse_file, parse_line,
};
pub use query::{QueryEngine, ViewOptions, ViewState, compute_view};
pub use settings::Settings;
pub use types::{Record, SortColumn, SortDirection};
