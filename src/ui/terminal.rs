//! Terminal lifecycle for the chat shell.
//!
//! Raw mode and the alternate screen are claimed on construction and given
//! back on drop, so the terminal is restored even when the draw loop bails
//! out through `?`.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::domain::shell_state::ShellState;

use super::view;

pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout))?,
        })
    }

    /// Draws one frame of the chat shell. Mutable state access is needed
    /// because rendering settles the scroll offset against the viewport.
    pub fn draw_shell(&mut self, state: &mut ShellState) -> Result<()> {
        self.terminal.draw(|frame| view::render(frame, state))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(error) = disable_raw_mode() {
            tracing::warn!(%error, "failed to leave raw mode");
        }
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
