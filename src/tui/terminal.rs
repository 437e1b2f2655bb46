//! Terminal setup and teardown.
//!
//! Raw mode and the alternate screen are entered by [`TerminalGuard::enter`]
//! and restored when the guard drops, including on early return or panic
//! unwinding.

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{self, stdout};

/// Terminal setup/teardown handle.
pub struct TerminalGuard {
    is_raw: bool,
    is_alternate: bool,
}

impl TerminalGuard {
    /// Enable raw mode, switch to the alternate screen and hide the cursor.
    pub fn enter() -> io::Result<Self> {
        let mut guard = Self {
            is_raw: false,
            is_alternate: false,
        };

        enable_raw_mode()?;
        guard.is_raw = true;

        execute!(stdout(), EnterAlternateScreen, Hide)?;
        guard.is_alternate = true;

        Ok(guard)
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.is_alternate {
            execute!(stdout(), Show, LeaveAlternateScreen)?;
            self.is_alternate = false;
        }
        if self.is_raw {
            disable_raw_mode()?;
            self.is_raw = false;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::error!("Failed to restore terminal: {}", e);
        }
    }
}
