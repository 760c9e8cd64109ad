//! Device emulator contract
//!
//! The pluggable backend behind a [`VirtualTerminal`]: it owns the actual
//! character buffer and handles real input and output. Swapping the
//! concrete implementation is how the terminal is retargeted (a pixel
//! surface, a test double, a headless snapshot device).
//!
//! [`VirtualTerminal`]: crate::terminal::VirtualTerminal

use std::io;

use thiserror::Error;

use super::buffer::TextBuffer;
use crate::input::KeyStroke;

/// Errors surfaced by a device emulator.
///
/// Geometry operations never fail; the only declared failure mode is an
/// input read going wrong, and that is propagated to the caller unchanged.
#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input source is closed")]
    InputClosed,
}

/// The capability set every backend must provide
pub trait DeviceEmulator {
    /// Wait for the next key event. May block until input is available;
    /// I/O failures propagate to the caller unchanged.
    fn read_input(&mut self) -> Result<KeyStroke, TerminalError>;

    /// Non-blocking input check; `Ok(None)` when no key event is pending
    fn poll_input(&mut self) -> Result<Option<KeyStroke>, TerminalError>;

    /// Switch to the alternate rendering mode (e.g. alternate screen)
    fn enter_private_mode(&mut self);

    /// Switch back to the normal rendering mode
    fn exit_private_mode(&mut self);

    /// The device's character grid
    fn buffer(&self) -> &TextBuffer;

    /// The device's character grid, for fill/set operations
    fn buffer_mut(&mut self) -> &mut TextBuffer;

    /// Show or hide the cursor
    fn set_cursor_visible(&mut self, visible: bool);

    /// Present pending buffer changes
    fn flush(&mut self);

    /// Raw terminal identification bytes (answer-back string)
    fn terminal_identification(&self) -> Vec<u8>;
}
