//! Virtual terminal implementation
//!
//! Presents the terminal-operation contract (cursor control, character
//! output, attribute and color control, clearing, resize notification,
//! input retrieval) entirely in terms of an injected [`DeviceEmulator`].
//!
//! Two boundary rules are easy to get backwards and are pinned down here:
//!
//! - An explicit `move_cursor` *clamps* to the grid and never wraps.
//! - The implicit advance after `put_character` *wraps* at the right edge
//!   and clamps at the bottom row; no scrolling happens at this layer.
//!
//! The terminal is not internally thread-safe. Callers (or a surrounding
//! component that serializes access) must ensure at most one thread issues
//! operations at a time; in return, operations apply to local state and to
//! the backend buffer in exactly the order issued.

use std::time::Duration;

use tracing::debug;

use super::character::{Sgr, SgrSet, TerminalCharacter};
use super::color::TextColor;
use super::device::{DeviceEmulator, TerminalError};
use super::geometry::{TerminalPosition, TerminalSize};
use crate::input::KeyStroke;

/// Callback fired with the new size whenever the declared size changes
pub type ResizeListener = Box<dyn FnMut(TerminalSize)>;

/// The virtual terminal core
pub struct VirtualTerminal<D: DeviceEmulator> {
    device: D,
    size: TerminalSize,
    cursor: TerminalPosition,
    foreground: TextColor,
    background: TextColor,
    active_sgr: SgrSet,
    resize_listeners: Vec<ResizeListener>,
}

impl<D: DeviceEmulator> VirtualTerminal<D> {
    /// Create a terminal over the given device, with cursor at the top-left
    /// corner, default colors and no active attributes
    pub fn new(device: D, initial_size: TerminalSize) -> Self {
        Self {
            device,
            size: initial_size,
            cursor: TerminalPosition::TOP_LEFT,
            foreground: TextColor::Default,
            background: TextColor::Default,
            active_sgr: SgrSet::new(),
            resize_listeners: Vec::new(),
        }
    }

    /// Wait for the next key event from the device. May block; failures
    /// from the backend propagate unchanged.
    pub fn read_input(&mut self) -> Result<KeyStroke, TerminalError> {
        self.device.read_input()
    }

    /// Non-blocking input check; `Ok(None)` when nothing is pending
    pub fn poll_input(&mut self) -> Result<Option<KeyStroke>, TerminalError> {
        self.device.poll_input()
    }

    /// Signal the backend to switch to its alternate rendering mode
    pub fn enter_private_mode(&mut self) {
        self.device.enter_private_mode();
    }

    /// Signal the backend to switch back to its normal rendering mode
    pub fn exit_private_mode(&mut self) {
        self.device.exit_private_mode();
    }

    /// Fill the device buffer with the default character. Cursor position,
    /// colors and active attributes persist across a clear; that is the
    /// real-terminal convention.
    pub fn clear_screen(&mut self) {
        let size = self.size;
        self.device.buffer_mut().fill(size, TerminalCharacter::DEFAULT);
    }

    /// Absolute cursor positioning. Both axes clamp to the grid: negative
    /// inputs clamp to 0, inputs at or past the edge clamp to the last
    /// valid index. An explicit move never wraps.
    pub fn move_cursor(&mut self, column: i32, row: i32) {
        let column = clamp_axis(column, self.size.columns);
        let row = clamp_axis(row, self.size.rows);
        self.cursor = TerminalPosition::new(column, row);
    }

    /// Write a character at the cursor with the current colors and
    /// attributes, then advance the cursor, wrapping at the right edge and
    /// clamping at the bottom row.
    ///
    /// If a shrink has left the cursor outside the grid, the wrap rules are
    /// applied to the stale position first, so the character lands inside
    /// the new bounds.
    pub fn put_character(&mut self, glyph: char) {
        let position = wrap_into_bounds(self.cursor, self.size);
        let character = TerminalCharacter::styled(
            glyph,
            self.foreground,
            self.background,
            self.active_sgr,
        );
        let size = self.size;
        self.device.buffer_mut().set_character(size, position, character);
        self.cursor = advance(position, size);
    }

    /// Ask the backend to show or hide the cursor; visibility is a backend
    /// concern, not terminal state
    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.device.set_cursor_visible(visible);
    }

    /// Add an attribute to the active set; applies to subsequently written
    /// characters only
    pub fn enable_sgr(&mut self, sgr: Sgr) {
        self.active_sgr.insert(sgr);
    }

    /// Remove an attribute from the active set
    pub fn disable_sgr(&mut self, sgr: Sgr) {
        self.active_sgr.remove(sgr);
    }

    /// Clear the active attribute set
    pub fn reset_all_sgr(&mut self) {
        self.active_sgr.clear();
    }

    /// Replace the active foreground color. `TextColor`'s constructors
    /// cover named ANSI entries, palette indices and RGB triples.
    pub fn set_foreground_color(&mut self, color: impl Into<TextColor>) {
        self.foreground = color.into();
    }

    /// Replace the active background color
    pub fn set_background_color(&mut self, color: impl Into<TextColor>) {
        self.background = color.into();
    }

    /// Update the declared terminal size and notify resize listeners.
    ///
    /// The cursor is deliberately not re-clamped here; a cursor left
    /// outside the new bounds keeps its raw value until the next
    /// `move_cursor` or `put_character`.
    pub fn set_terminal_size(&mut self, size: TerminalSize) {
        if size == self.size {
            return;
        }
        debug!(columns = size.columns, rows = size.rows, "terminal resized");
        self.size = size;
        for listener in &mut self.resize_listeners {
            listener(size);
        }
    }

    /// Register a resize listener. The listener fires immediately with the
    /// current size (this is how the surrounding system learns the initial
    /// size), then again on every subsequent size change, in registration
    /// order.
    pub fn add_resize_listener(&mut self, mut listener: ResizeListener) {
        listener(self.size);
        self.resize_listeners.push(listener);
    }

    /// The declared terminal size
    pub fn terminal_size(&self) -> TerminalSize {
        self.size
    }

    /// The raw cursor position. May lie outside the declared size after a
    /// shrink, until the next move or put re-clamps it.
    pub fn cursor_position(&self) -> TerminalPosition {
        self.cursor
    }

    /// The active foreground color
    pub fn foreground_color(&self) -> TextColor {
        self.foreground
    }

    /// The active background color
    pub fn background_color(&self) -> TextColor {
        self.background
    }

    /// The active attribute set
    pub fn active_sgr(&self) -> SgrSet {
        self.active_sgr
    }

    /// Query the backend's identification string. The timeout is accepted
    /// for interface compatibility but not enforced at this layer; timing
    /// is the backend's contract.
    pub fn enquire_terminal(&mut self, _timeout: Duration) -> Vec<u8> {
        self.device.terminal_identification()
    }

    /// Signal the backend to present pending changes
    pub fn flush(&mut self) {
        self.device.flush();
    }

    /// Borrow the underlying device
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Mutably borrow the underlying device
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Consume the terminal, returning the device
    pub fn into_device(self) -> D {
        self.device
    }
}

/// Clamp a requested coordinate to `[0, dim - 1]`
fn clamp_axis(value: i32, dim: usize) -> i32 {
    if value < 0 {
        return 0;
    }
    let last = dim.saturating_sub(1) as i32;
    value.min(last)
}

/// Apply the wrap rules to a possibly stale cursor: a column past the right
/// edge wraps to column 0 of the next row, negative axes pull to 0, a row
/// past the bottom clamps to the last row.
fn wrap_into_bounds(position: TerminalPosition, size: TerminalSize) -> TerminalPosition {
    let mut column = position.column.max(0);
    let mut row = position.row;
    if column >= size.columns as i32 && size.columns > 0 {
        column = 0;
        row += 1;
    }
    if row < 0 {
        row = 0;
    } else if row >= size.rows as i32 {
        row = size.rows.saturating_sub(1) as i32;
    }
    TerminalPosition::new(column, row)
}

/// Advance the cursor one column, wrapping at the right edge and clamping
/// at the bottom row. No scroll happens at this layer.
fn advance(position: TerminalPosition, size: TerminalSize) -> TerminalPosition {
    let mut column = position.column.max(0) + 1;
    let mut row = position.row;
    if column >= size.columns as i32 {
        column = 0;
        row += 1;
    }
    if row < 0 {
        row = 0;
    } else if row >= size.rows as i32 {
        row = size.rows.saturating_sub(1) as i32;
    }
    TerminalPosition::new(column, row)
}
