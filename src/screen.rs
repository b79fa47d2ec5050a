// src/screen.rs

//! Terminal clearing used before the restart banner.
//!
//! Purely cosmetic; every call is best-effort and failures are ignored so a
//! dumb terminal never breaks a run.

use std::io;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Clear the visible screen and the scrollback, then move the cursor to the
/// top-left corner.
pub fn clear() {
    let mut stdout = io::stdout();
    let _ = execute!(
        stdout,
        Clear(ClearType::All),
        Clear(ClearType::Purge),
        MoveTo(0, 0)
    );
}
