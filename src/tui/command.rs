//! Keyboard commands and their effect on the query engine.
//!
//! Keys map to a [`Command`]. Commands that need text (search, page size) are
//! completed by a prompt into an [`Action`], which [`apply_action`] forwards to
//! the engine.

use crate::query::QueryEngine;
use crate::types::SortColumn;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A user command decoded from a single key press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    /// Prompt for a search term
    Search,
    /// Prompt for a page size
    PageSize,
    SortBy(SortColumn),
    ToggleDirection,
}

/// A fully resolved command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    Search(String),
    PageSize(String),
    SortBy(SortColumn),
    ToggleDirection,
}

/// Whether the loop keeps running after an action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Decode a key press. Releases and unmapped keys yield `None`.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(Command::Quit),
            'n' => Some(Command::NextPage),
            'p' => Some(Command::PreviousPage),
            's' => Some(Command::Search),
            'o' => Some(Command::PageSize),
            '7' => Some(Command::ToggleDirection),
            d @ '1'..='6' => d
                .to_digit(10)
                .and_then(|n| SortColumn::from_position(n as usize))
                .map(Command::SortBy),
            _ => None,
        },
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Right | KeyCode::PageDown => Some(Command::NextPage),
        KeyCode::Left | KeyCode::PageUp => Some(Command::PreviousPage),
        KeyCode::Home => Some(Command::FirstPage),
        KeyCode::End => Some(Command::LastPage),
        _ => None,
    }
}

impl Command {
    /// Resolve a command that needs no prompt
    pub fn into_action(self) -> Option<Action> {
        match self {
            Command::Quit => Some(Action::Quit),
            Command::NextPage => Some(Action::NextPage),
            Command::PreviousPage => Some(Action::PreviousPage),
            Command::FirstPage => Some(Action::FirstPage),
            Command::LastPage => Some(Action::LastPage),
            Command::SortBy(column) => Some(Action::SortBy(column)),
            Command::ToggleDirection => Some(Action::ToggleDirection),
            Command::Search | Command::PageSize => None,
        }
    }
}

/// Apply an action to the engine
pub fn apply_action(engine: &mut QueryEngine, action: Action) -> Flow {
    match action {
        Action::Quit => return Flow::Exit,
        Action::NextPage => {
            engine.next_page();
        }
        Action::PreviousPage => {
            engine.previous_page();
        }
        Action::FirstPage => {
            engine.first_page();
        }
        Action::LastPage => {
            engine.last_page();
        }
        Action::Search(term) => {
            engine.set_search_term(&term);
        }
        Action::PageSize(text) => {
            engine.set_page_size_text(&text);
        }
        Action::SortBy(column) => {
            engine.set_sort(column);
        }
        Action::ToggleDirection => {
            engine.toggle_sort_direction();
        }
    }
    Flow::Continue
}
