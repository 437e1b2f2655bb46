//! Interactive viewer loop.

use super::command::{Action, Command, Flow, apply_action, command_for_key};
use super::prompt::read_line;
use super::render::screen_lines;
use super::terminal::TerminalGuard;
use crate::constants::{PAGE_SIZE_PROMPT, SEARCH_PROMPT};
use crate::query::QueryEngine;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write, stdout};

/// Draws the table and forwards keys to the query engine.
pub struct Viewer {
    engine: QueryEngine,
    /// Lines rejected while loading, shown in the status line
    skipped_lines: usize,
}

impl Viewer {
    pub fn new(engine: QueryEngine, skipped_lines: usize) -> Self {
        Self {
            engine,
            skipped_lines,
        }
    }

    /// Run until the user quits. The terminal is restored on return.
    pub fn run(&mut self) -> io::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let mut out = stdout();

        loop {
            let prompt_row = self.draw(&mut out)?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            let Some(command) = command_for_key(key) else {
                continue;
            };

            let action = match command {
                Command::Search => {
                    read_line(&mut out, SEARCH_PROMPT, prompt_row)?.map(Action::Search)
                }
                Command::PageSize => {
                    read_line(&mut out, PAGE_SIZE_PROMPT, prompt_row)?.map(Action::PageSize)
                }
                other => other.into_action(),
            };
            let Some(action) = action else {
                continue;
            };

            tracing::trace!(?action, "Applying action");
            if apply_action(&mut self.engine, action) == Flow::Exit {
                break;
            }
        }

        guard.restore()
    }

    /// Redraw the screen; returns the row below the last line
    fn draw(&self, out: &mut impl Write) -> io::Result<u16> {
        queue!(out, Clear(ClearType::All))?;
        let lines = screen_lines(&self.engine, self.skipped_lines);
        for (row, line) in lines.iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(out, MoveTo(0, row), Print(line))?;
        }
        out.flush()?;
        Ok(u16::try_from(lines.len()).unwrap_or(u16::MAX))
    }
}
