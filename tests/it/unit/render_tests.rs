//! Tests for the screen layout.
//!
//! Uses insta inline snapshots; update with `cargo insta test --accept`.

use crate::helpers::{TestRecordsBuilder, record};
use userview::tui::render::{screen_lines, sort_line, status_line, table_row};
use userview::{SortColumn, parse_file};

fn sample_engine() -> userview::QueryEngine {
    let outcome = parse_file([
        "header",
        "1,John,Doe,j@x.com,M,1.1.1.1",
        "2;Jane;Doe;jane@x.com;F;2.2.2.2",
        "bad,line",
    ]);
    userview::QueryEngine::new(outcome.records)
}

#[test]
fn snapshot_screen() {
    let engine = sample_engine();
    let screen = screen_lines(&engine, 1).join("\n");
    insta::assert_snapshot!(screen, @r"
Page 1 of 1. Records: 2. Skipped lines: 1
--------------------------------------------------------------------------------------------------------------------
| ID    | First name      | Last name       | Email                               | Gender       | IP address      |
--------------------------------------------------------------------------------------------------------------------
| 1     | John            | Doe             | j@x.com                             | M            | 1.1.1.1         |
| 2     | Jane            | Doe             | jane@x.com                          | F            | 2.2.2.2         |
--------------------------------------------------------------------------------------------------------------------

Controls:
Q - Quit | N - Next page | P - Previous page | S - Search | O - Page size
1-6 - Sort by column | 7 - Toggle sort direction
Current sort: ID (ascending)
");
}

#[test]
fn snapshot_truncated_row() {
    let long = record([
        "12345678",
        "Maximilian-Alexander",
        "O'Neil",
        "a.very.long.email.address.for.testing@example.com",
        "Non-binary",
        "255.255.255.255",
    ]);
    insta::assert_snapshot!(table_row(long.fields()), @"| 1234~ | Maximilian-Ale~ | O'Neil          | a.very.long.email.address.for.test~ | Non-binary   | 255.255.255.255 |");
}

#[test]
fn test_status_line_with_filter() {
    let mut engine = TestRecordsBuilder::new()
        .with_user("1", "Ann", "Lee")
        .with_user("2", "Ben", "Ray")
        .with_numbered(20)
        .build_engine();
    assert_eq!(status_line(&engine, 0), "Page 1 of 3. Records: 22");

    engine.set_search_term("lee");
    assert_eq!(status_line(&engine, 0), "Page 1 of 1. Records: 1 (of 22)");
}

#[test]
fn test_sort_line_shows_search() {
    let mut engine = sample_engine();
    engine.set_sort(SortColumn::Email);
    engine.toggle_sort_direction();
    engine.set_search_term("ja");
    assert_eq!(
        sort_line(&engine),
        "Current sort: Email (descending). Search: \"ja\""
    );
}

#[test]
fn test_empty_view_renders_header_only() {
    let mut engine = sample_engine();
    engine.set_search_term("nothing matches");
    let lines = screen_lines(&engine, 0);
    assert_eq!(lines[0], "Page 1 of 1. Records: 0 (of 2)");
    // status, rule, header, rule, rule, then the menu
    assert_eq!(lines[4], lines[1]);
    assert_eq!(lines[5], "");
}
