//! Single-line text prompt.
//!
//! [`LineEditor`] holds the text being typed and decides what each key does;
//! [`read_line`] drives it from terminal events.

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{self, Write};

/// Result of feeding one key to the editor
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Keep reading keys
    Pending,
    /// Enter pressed; carries the text
    Submit(String),
    /// Escape pressed; the command is dropped
    Cancel,
}

/// Editable text with the cursor always at the end
#[derive(Clone, Debug, Default)]
pub struct LineEditor {
    text: String,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        if key.kind == KeyEventKind::Release {
            return PromptOutcome::Pending;
        }
        match key.code {
            KeyCode::Enter => PromptOutcome::Submit(std::mem::take(&mut self.text)),
            KeyCode::Esc => PromptOutcome::Cancel,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PromptOutcome::Cancel
            }
            KeyCode::Char(c) if !c.is_control() => {
                self.text.push(c);
                PromptOutcome::Pending
            }
            KeyCode::Backspace => {
                self.text.pop();
                PromptOutcome::Pending
            }
            _ => PromptOutcome::Pending,
        }
    }
}

/// Show `label` on `row` and read a line. `None` means cancelled.
pub fn read_line(out: &mut impl Write, label: &str, row: u16) -> io::Result<Option<String>> {
    let mut editor = LineEditor::new();
    execute!(out, Show)?;

    let result = loop {
        queue!(
            out,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            Print(label),
            Print(editor.text())
        )?;
        out.flush()?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        match editor.handle_key(key) {
            PromptOutcome::Pending => {}
            PromptOutcome::Submit(text) => break Some(text),
            PromptOutcome::Cancel => break None,
        }
    };

    execute!(out, Hide)?;
    Ok(result)
}
