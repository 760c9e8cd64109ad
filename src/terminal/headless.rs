//! Headless device emulator
//!
//! An in-memory [`DeviceEmulator`] with no real input source or display.
//! Useful for tests, deterministic snapshots and driving the terminal from
//! batch tools. Input is supplied by queueing key strokes ahead of time;
//! mode switches, visibility changes and flushes are recorded so callers
//! can observe them.

use std::collections::VecDeque;

use tracing::trace;

use super::buffer::TextBuffer;
use super::device::{DeviceEmulator, TerminalError};
use super::geometry::TerminalSize;
use crate::input::KeyStroke;

/// Identification answered by the headless device (VT102 answer-back)
const IDENTIFICATION: &[u8] = b"\x1b[?6c";

/// An in-memory device emulator backed by a [`TextBuffer`]
#[derive(Debug)]
pub struct HeadlessDevice {
    buffer: TextBuffer,
    input_queue: VecDeque<KeyStroke>,
    private_mode: bool,
    cursor_visible: bool,
    flush_count: usize,
    mode_switches: usize,
}

impl HeadlessDevice {
    /// Create a device with a buffer of the given size
    pub fn new(size: TerminalSize) -> Self {
        Self {
            buffer: TextBuffer::new(size),
            input_queue: VecDeque::new(),
            private_mode: false,
            cursor_visible: true,
            flush_count: 0,
            mode_switches: 0,
        }
    }

    /// Queue a key stroke for a later `read_input`/`poll_input`
    pub fn queue_input(&mut self, stroke: KeyStroke) {
        self.input_queue.push_back(stroke);
    }

    /// Resize the backing buffer (a backend concern, not a terminal one)
    pub fn resize_buffer(&mut self, size: TerminalSize) {
        self.buffer.resize(size);
    }

    /// Whether the device is currently in private mode
    pub fn is_private_mode(&self) -> bool {
        self.private_mode
    }

    /// Whether the cursor is currently visible
    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Number of `flush` calls observed
    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    /// Number of private-mode transitions observed
    pub fn mode_switches(&self) -> usize {
        self.mode_switches
    }
}

impl DeviceEmulator for HeadlessDevice {
    fn read_input(&mut self) -> Result<KeyStroke, TerminalError> {
        // A headless device has no key source to wait on; an empty queue
        // means the input is gone for good.
        self.input_queue
            .pop_front()
            .ok_or(TerminalError::InputClosed)
    }

    fn poll_input(&mut self) -> Result<Option<KeyStroke>, TerminalError> {
        Ok(self.input_queue.pop_front())
    }

    fn enter_private_mode(&mut self) {
        trace!("entering private mode");
        self.private_mode = true;
        self.mode_switches += 1;
    }

    fn exit_private_mode(&mut self) {
        trace!("exiting private mode");
        self.private_mode = false;
        self.mode_switches += 1;
    }

    fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn flush(&mut self) {
        self.flush_count += 1;
    }

    fn terminal_identification(&self) -> Vec<u8> {
        IDENTIFICATION.to_vec()
    }
}
