//! Screen clearing and the title banner

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, IsTerminal, Write};

/// Title shown at the top of every screen
pub const TITLE: &str = "AWS RDS IOPS Calculator";

/// Decides whether screens are cleared before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    clear: bool,
}

impl Screen {
    pub fn new(clear: bool) -> Self {
        Self { clear }
    }

    /// Clear only when stdout is an interactive terminal and the user did
    /// not opt out. Piped output never receives escape sequences.
    pub fn detect(no_clear: bool) -> Self {
        Self::new(!no_clear && io::stdout().is_terminal())
    }

    /// Screen that never clears (tests, piped output)
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Start a fresh screen: optionally clear, then print the title.
    pub fn main_screen<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.clear {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(out, "{}\n\n\n", TITLE)?;
        out.flush()
    }
}
