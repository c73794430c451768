//! TerminalRenderer: flushes composited rows to a real terminal.
//!
//! Full clear-and-reprint every frame; the render cadence is slow enough
//! that diffing buys nothing here.

use std::io::{self, Write};

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::error::{Error, Result};
use crate::types::Space;

/// Two-character glyph policy for cell states. Presentation detail of this
/// layer, not of the core.
pub fn push_glyph(line: &mut String, space: Space) {
    match space {
        Space::Empty => line.push_str("  "),
        Space::Filled => line.push_str("□ "),
        Space::Text(ch) => {
            line.push(ch);
            line.push(' ');
        }
        Space::Digit(d) => {
            line.push(char::from_digit(u32::from(d) % 10, 10).unwrap_or('0'));
            line.push(' ');
        }
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    line: String,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            line: String::new(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.stdout
            .queue(terminal::EnterAlternateScreen)
            .and_then(|out| out.queue(cursor::Hide))
            .and_then(|out| out.flush())
            .map_err(Error::TerminalUnavailable)
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout
            .queue(cursor::Show)
            .and_then(|out| out.queue(terminal::LeaveAlternateScreen))
            .and_then(|out| out.flush())
            .map_err(Error::TerminalUnavailable)
    }

    /// Clear the screen and print every row. Fails fatally with
    /// `TerminalUnavailable`; retrying a frame has no benefit.
    pub fn draw<'a>(&mut self, rows: impl Iterator<Item = &'a [Space]>) -> Result<()> {
        self.queue_frame(rows).map_err(Error::TerminalUnavailable)
    }

    fn queue_frame<'a>(&mut self, rows: impl Iterator<Item = &'a [Space]>) -> io::Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        for (y, row) in rows.enumerate() {
            self.line.clear();
            for &space in row {
                push_glyph(&mut self.line, space);
            }
            self.stdout.queue(cursor::MoveTo(0, y as u16))?;
            self.stdout.queue(Print(&self.line))?;
        }

        self.stdout.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_two_characters_wide() {
        for space in [
            Space::Empty,
            Space::Filled,
            Space::Text('G'),
            Space::Digit(7),
        ] {
            let mut line = String::new();
            push_glyph(&mut line, space);
            assert_eq!(line.chars().count(), 2, "{:?} -> {:?}", space, line);
        }
    }

    #[test]
    fn glyph_values_match_policy() {
        let mut line = String::new();
        push_glyph(&mut line, Space::Empty);
        push_glyph(&mut line, Space::Filled);
        push_glyph(&mut line, Space::Text('X'));
        push_glyph(&mut line, Space::Digit(4));
        assert_eq!(line, "  □ X 4 ");
    }
}
