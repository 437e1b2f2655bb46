//! Data loading module
//!
//! Turns a delimited user file into [`Record`](crate::types::Record)s.
//!
//! ## Error Handling
//!
//! Line-level problems never fail a load: they are returned as
//! [`LineError`]s next to the valid records. File-level operations return
//! `DataResult<T>` which uses the `DataError` type:
//! - `TooLarge`: File exceeds size limits
//! - `Io`: File system errors
//! - `Json`: Malformed settings file

mod error;
mod record_parser;

pub use error::*;
pub use record_parser::*;
