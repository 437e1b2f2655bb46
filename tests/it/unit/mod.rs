//! Unit tests for userview.

mod record_parser_tests;
mod render_tests;
mod snapshot_tests;
