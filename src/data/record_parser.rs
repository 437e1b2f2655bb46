//! Delimited user record parsing
//!
//! Parses loosely-delimited text into [`Record`]s. Fields may be separated by
//! `,` or `;` (even mixed on one line), there is no quoting, and every field
//! is stripped of control characters and surrounding whitespace.
//!
//! A bad line never aborts a file: [`parse_file`] collects a [`LineError`]
//! for it and moves on.
//!
//! ## Memory Limits
//!
//! Files larger than [`MAX_FILE_SIZE_MB`] are refused by [`load_file`]; the
//! whole record set is held in memory.

use crate::constants::{FIELD_DELIMITERS, MAX_FILE_SIZE_MB, REQUIRED_FIELD_COUNT};
use crate::data::error::{DataError, DataResult, FormatError};
use crate::types::Record;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// A rejected input line
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineError {
    /// 1-based line number in the input, header included
    pub line_number: usize,
    #[serde(serialize_with = "serialize_display")]
    pub error: FormatError,
}

impl LineError {
    /// Human-readable reason the line was rejected
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.error)
    }
}

fn serialize_display<S: serde::Serializer>(
    error: &FormatError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Valid records and per-line errors from one input
#[derive(Clone, Debug, Default, Serialize)]
pub struct ParseOutcome {
    pub records: Vec<Record>,
    pub errors: Vec<LineError>,
}

impl ParseOutcome {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Read a record file from disk and parse it
///
/// # Memory Limits
/// - Files larger than [`MAX_FILE_SIZE_MB`]MB will return [`DataError::TooLarge`]
pub fn load_file(path: &Path) -> DataResult<ParseOutcome> {
    load_file_with_limit(path, MAX_FILE_SIZE_MB as u64 * 1024 * 1024)
}

/// [`load_file`] with an explicit size limit in bytes
pub fn load_file_with_limit(path: &Path, max_bytes: u64) -> DataResult<ParseOutcome> {
    let start = std::time::Instant::now();

    let size_bytes = std::fs::metadata(path)?.len();
    if size_bytes > max_bytes {
        return Err(DataError::TooLarge {
            size_bytes,
            max_bytes,
        });
    }

    let content = std::fs::read_to_string(path)?;
    let outcome = parse_file(content.lines());

    tracing::info!(
        "Loaded {} with {} records ({} rejected lines) in {:?}",
        path.display(),
        outcome.records.len(),
        outcome.errors.len(),
        start.elapsed()
    );

    Ok(outcome)
}

/// Parse every line after the header
///
/// The first line is skipped without looking at it. Line numbers in the
/// returned errors count the header as line 1.
pub fn parse_file<I, S>(lines: I) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut outcome = ParseOutcome::default();

    for (index, line) in lines.into_iter().enumerate().skip(1) {
        let line_number = index + 1;
        match parse_line(line.as_ref()) {
            Ok(record) => outcome.records.push(record),
            Err(error) => {
                tracing::debug!(line = line_number, %error, "Skipping malformed line");
                outcome.errors.push(LineError { line_number, error });
            }
        }
    }

    outcome
}

/// Parse a single record line
pub fn parse_line(raw: &str) -> Result<Record, FormatError> {
    if raw.trim().is_empty() {
        return Err(FormatError::EmptyLine);
    }

    let parts: Vec<&str> = raw.split(FIELD_DELIMITERS).collect();
    if parts.len() < REQUIRED_FIELD_COUNT {
        return Err(FormatError::TooFewFields {
            required: REQUIRED_FIELD_COUNT,
            actual: parts.len(),
        });
    }

    let mut fields = parts.into_iter().take(REQUIRED_FIELD_COUNT).map(clean_field);
    // take() above guarantees six items
    let mut next = || fields.next().unwrap_or_default();
    let record = Record {
        id: next(),
        first_name: next(),
        last_name: next(),
        email: next(),
        gender: next(),
        ip_address: next(),
    };

    if record.id.is_empty() {
        return Err(FormatError::EmptyId);
    }
    if record.email.is_empty() {
        return Err(FormatError::EmptyEmail);
    }

    Ok(record)
}

/// Remove control characters, then trim surrounding whitespace
pub fn clean_field(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !c.is_control()).collect();
    stripped.trim().to_string()
}
