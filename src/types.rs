//! Core types for the user table.
//!
//! Defines the parsed [`Record`] and the sort parameters the query engine
//! and the table view share.

use crate::constants::COLUMN_LABELS;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Records
// ============================================================================

/// One parsed user entry.
///
/// All six attributes are kept as cleaned strings; `id` is opaque and need
/// not be unique or numeric. Records are never mutated after parsing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub ip_address: String,
}

impl Record {
    /// Value of the given column
    pub fn field(&self, column: SortColumn) -> &str {
        (column.key())(self)
    }

    /// All six attribute values in column order
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.id,
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.gender,
            &self.ip_address,
        ]
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Extracts the sort key of one column from a record
pub type KeyFn = fn(&Record) -> &str;

fn id_key(r: &Record) -> &str {
    &r.id
}

fn first_name_key(r: &Record) -> &str {
    &r.first_name
}

fn last_name_key(r: &Record) -> &str {
    &r.last_name
}

fn email_key(r: &Record) -> &str {
    &r.email
}

fn gender_key(r: &Record) -> &str {
    &r.gender
}

fn ip_address_key(r: &Record) -> &str {
    &r.ip_address
}

/// Key extractors indexed by `SortColumn as usize`
const KEY_EXTRACTORS: [KeyFn; 6] = [
    id_key,
    first_name_key,
    last_name_key,
    email_key,
    gender_key,
    ip_address_key,
];

/// Column the view is ordered by
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    #[default]
    Id = 0,
    FirstName = 1,
    LastName = 2,
    Email = 3,
    Gender = 4,
    IpAddress = 5,
}

impl SortColumn {
    pub fn all() -> &'static [SortColumn] {
        &[
            SortColumn::Id,
            SortColumn::FirstName,
            SortColumn::LastName,
            SortColumn::Email,
            SortColumn::Gender,
            SortColumn::IpAddress,
        ]
    }

    /// Column for a 1-based menu position (1 = id ... 6 = ip address)
    pub fn from_position(position: usize) -> Option<SortColumn> {
        position
            .checked_sub(1)
            .and_then(|i| Self::all().get(i))
            .copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> KeyFn {
        KEY_EXTRACTORS[self.index()]
    }

    pub fn label(self) -> &'static str {
        COLUMN_LABELS[self.index()]
    }
}

/// Ascending or descending order
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}
