//! Screen layout for the record table.
//!
//! Everything here is a pure function from engine state to text lines, so the
//! layout can be tested without a terminal. The [`Viewer`](super::Viewer)
//! writes the lines out.

use crate::constants::{
    COLUMN_LABELS, COLUMN_WIDTHS, MENU_NAVIGATION, MENU_SORTING, MENU_TITLE, TRUNCATION_MARKER,
};
use crate::query::QueryEngine;

/// Fit `value` into exactly `width` characters, cutting with a marker if needed
pub fn format_cell(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len <= width {
        return format!("{value:<width$}");
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = value.chars().take(width - 1).collect();
    cut.push(TRUNCATION_MARKER);
    cut
}

/// One boxed table row
pub fn table_row(values: [&str; 6]) -> String {
    let mut line = String::from("|");
    for (value, width) in values.iter().zip(COLUMN_WIDTHS) {
        line.push(' ');
        line.push_str(&format_cell(value, width));
        line.push_str(" |");
    }
    line
}

/// Horizontal rule matching the table width
pub fn separator() -> String {
    let width: usize = COLUMN_WIDTHS.iter().map(|w| w + 3).sum::<usize>() + 1;
    "-".repeat(width)
}

/// `Page X of Y. Records: N`, with the rejected-line count when non-zero
pub fn status_line(engine: &QueryEngine, skipped_lines: usize) -> String {
    let mut line = format!(
        "Page {} of {}. Records: {}",
        engine.current_page(),
        engine.total_pages(),
        engine.filtered_count()
    );
    if engine.filtered_count() != engine.total_count() {
        line.push_str(&format!(" (of {})", engine.total_count()));
    }
    if skipped_lines > 0 {
        line.push_str(&format!(". Skipped lines: {skipped_lines}"));
    }
    line
}

/// Active sort and search description
pub fn sort_line(engine: &QueryEngine) -> String {
    let mut line = format!(
        "Current sort: {} ({})",
        engine.sort_column().label(),
        engine.sort_direction().label()
    );
    if !engine.search_term().is_empty() {
        line.push_str(&format!(". Search: \"{}\"", engine.search_term()));
    }
    line
}

/// The table: header, current page rows, closing rule
pub fn table_lines(engine: &QueryEngine) -> Vec<String> {
    let rule = separator();
    let mut lines = vec![rule.clone(), table_row(COLUMN_LABELS), rule.clone()];
    lines.extend(
        engine
            .current_page_records()
            .into_iter()
            .map(|record| table_row(record.fields())),
    );
    lines.push(rule);
    lines
}

pub fn menu_lines(engine: &QueryEngine) -> Vec<String> {
    vec![
        String::new(),
        MENU_TITLE.to_string(),
        MENU_NAVIGATION.to_string(),
        MENU_SORTING.to_string(),
        sort_line(engine),
    ]
}

/// Whole screen, top to bottom
pub fn screen_lines(engine: &QueryEngine, skipped_lines: usize) -> Vec<String> {
    let mut lines = vec![status_line(engine, skipped_lines)];
    lines.extend(table_lines(engine));
    lines.extend(menu_lines(engine));
    lines
}
