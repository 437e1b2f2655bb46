//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestRecordsBuilder` - Builder pattern for record sets and engines
//! - `record()` / `ids()` helpers
//! - File fixtures written to a temp dir

use std::path::PathBuf;
use tempfile::TempDir;
use userview::{QueryEngine, Record, ViewOptions};

pub const HEADER: &str = "id,first_name,last_name,email,gender,ip_address";

// ============================================================================
// Records
// ============================================================================

/// Build a record from its six fields in column order.
pub fn record(fields: [&str; 6]) -> Record {
    let [id, first_name, last_name, email, gender, ip_address] = fields;
    Record {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        gender: gender.to_string(),
        ip_address: ip_address.to_string(),
    }
}

/// Ids of the given records, in order.
pub fn ids(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

/// Builder for record sets and engines over them.
///
/// # Example
/// ```ignore
/// let engine = TestRecordsBuilder::new()
///     .with_user("1", "John", "Doe")
///     .with_numbered(20)
///     .page_size(5)
///     .build_engine();
/// ```
pub struct TestRecordsBuilder {
    records: Vec<Record>,
    options: ViewOptions,
}

impl Default for TestRecordsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRecordsBuilder {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            options: ViewOptions::default(),
        }
    }

    /// Add a user; email and ip are derived from the id and name.
    pub fn with_user(mut self, id: &str, first_name: &str, last_name: &str) -> Self {
        let email = format!("{}.{}@example.com", first_name, last_name).to_lowercase();
        let ip = format!("10.0.0.{}", id);
        self.records
            .push(record([id, first_name, last_name, &email, "Female", &ip]));
        self
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    /// Add `count` users with ids "1".."count".
    pub fn with_numbered(mut self, count: usize) -> Self {
        for i in 1..=count {
            let id = i.to_string();
            self = self.with_user(&id, "User", &format!("Number{}", i));
        }
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.options.page_size = size;
        self
    }

    pub fn build(self) -> Vec<Record> {
        self.records
    }

    pub fn build_engine(self) -> QueryEngine {
        QueryEngine::with_options(self.records, self.options)
    }
}

// ============================================================================
// Files
// ============================================================================

/// Write `content` to `name` inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the file is used.
pub fn write_fixture(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
