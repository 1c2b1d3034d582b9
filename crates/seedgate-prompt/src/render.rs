//! Line rendering for the edit buffer
//!
//! The visible line is always `label` followed by the buffer padded to its
//! fixed width, with the terminal cursor on the buffer's logical cursor.

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::Print;
use std::io::{self, Write};

use crate::buffer::EditBuffer;

#[derive(Debug, Clone)]
pub struct LineRenderer {
    label: String,
    origin: u16,
}

impl LineRenderer {
    pub fn new(label: &str) -> Self {
        let origin = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
        Self {
            label: label.to_string(),
            origin,
        }
    }

    fn cursor_column(&self, buffer: &EditBuffer) -> u16 {
        let offset = u16::try_from(buffer.cursor()).unwrap_or(u16::MAX);
        self.origin.saturating_add(offset)
    }

    /// Label plus buffer, for the first frame.
    pub fn draw<W: Write>(&self, out: &mut W, buffer: &EditBuffer) -> io::Result<()> {
        queue!(
            out,
            MoveToColumn(0),
            Print(&self.label),
            Print(buffer.padded()),
            MoveToColumn(self.cursor_column(buffer))
        )?;
        out.flush()
    }

    /// Rewrite the buffer area after a content change.
    pub fn redraw<W: Write>(&self, out: &mut W, buffer: &EditBuffer) -> io::Result<()> {
        queue!(
            out,
            MoveToColumn(self.origin),
            Print(buffer.padded()),
            MoveToColumn(self.cursor_column(buffer))
        )?;
        out.flush()
    }

    /// Reposition the cursor only.
    pub fn move_cursor<W: Write>(&self, out: &mut W, buffer: &EditBuffer) -> io::Result<()> {
        queue!(out, MoveToColumn(self.cursor_column(buffer)))?;
        out.flush()
    }

    /// Leave the prompt line. Raw mode needs the explicit carriage return.
    pub fn finish<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, Print("\r\n"))?;
        out.flush()
    }
}
