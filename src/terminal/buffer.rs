//! Text Buffer
//!
//! A 2-D grid of [`TerminalCharacter`] cells, owned by the device emulator.
//! The terminal never holds a reference into the buffer; every mutation is
//! expressed as "set/fill at this position, in the context of this size",
//! which keeps buffer swaps (e.g. on resize) safe without invalidation
//! logic in the terminal.

use serde::{Deserialize, Serialize};

use super::character::TerminalCharacter;
use super::geometry::{TerminalPosition, TerminalSize};

/// The character grid backing a device emulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBuffer {
    rows: Vec<Vec<TerminalCharacter>>,
    size: TerminalSize,
}

impl TextBuffer {
    /// Create a buffer of the given size, seeded with blank cells
    pub fn new(size: TerminalSize) -> Self {
        Self {
            rows: (0..size.rows)
                .map(|_| vec![TerminalCharacter::DEFAULT; size.columns])
                .collect(),
            size,
        }
    }

    /// Dimensions of the buffer
    pub fn size(&self) -> TerminalSize {
        self.size
    }

    /// Resize the buffer, preserving overlapping content and seeding new
    /// cells with the default character
    pub fn resize(&mut self, size: TerminalSize) {
        for row in &mut self.rows {
            row.resize(size.columns, TerminalCharacter::DEFAULT);
        }
        self.rows
            .resize_with(size.rows, || vec![TerminalCharacter::DEFAULT; size.columns]);
        self.size = size;
    }

    /// Read the cell at a position, if it is inside the buffer
    pub fn character_at(&self, position: TerminalPosition) -> Option<TerminalCharacter> {
        if position.column < 0 || position.row < 0 {
            return None;
        }
        self.rows
            .get(position.row as usize)
            .and_then(|row| row.get(position.column as usize))
            .copied()
    }

    /// Write a cell at a position. Positions outside either the given size
    /// or the buffer extent are ignored; this is a total function with no
    /// error path for bad geometry.
    pub fn set_character(
        &mut self,
        size: TerminalSize,
        position: TerminalPosition,
        character: TerminalCharacter,
    ) {
        if !size.contains(position) {
            return;
        }
        if let Some(cell) = self
            .rows
            .get_mut(position.row as usize)
            .and_then(|row| row.get_mut(position.column as usize))
        {
            *cell = character;
        }
    }

    /// Fill every cell inside both the given size and the buffer extent
    pub fn fill(&mut self, size: TerminalSize, character: TerminalCharacter) {
        for row in self.rows.iter_mut().take(size.rows) {
            for cell in row.iter_mut().take(size.columns) {
                *cell = character;
            }
        }
    }

    /// Render the buffer as plain text, one line per row, with trailing
    /// blanks trimmed. Used by snapshots and tests.
    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                let line: String = row.iter().map(|cell| cell.glyph).collect();
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serialize the buffer to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
