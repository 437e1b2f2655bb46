//! Terminal front end for the query engine.
//!
//! - `command`: key bindings and actions
//! - `prompt`: single-line input for search and page size
//! - `render`: screen layout as plain text lines
//! - `terminal`: raw mode / alternate screen guard

mod app;
pub mod command;
pub mod prompt;
pub mod render;
pub mod terminal;

pub use app::Viewer;
pub use command::{Action, Command, Flow, apply_action, command_for_key};
