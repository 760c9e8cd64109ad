//! Virtual Terminal Core
//!
//! This module implements the terminal-operation contract entirely in terms
//! of an injected backend (the [`DeviceEmulator`]). The terminal owns all
//! terminal-local state (cursor, colors, active attributes, declared size)
//! and translates every operation into buffer mutations and backend calls.
//! How pixels are actually produced is the backend's business.

pub mod buffer;
pub mod character;
pub mod color;
pub mod device;
pub mod geometry;
pub mod headless;
pub mod virtual_terminal;

pub use buffer::TextBuffer;
pub use character::{Sgr, SgrSet, TerminalCharacter};
pub use color::{AnsiColor, TextColor};
pub use device::{DeviceEmulator, TerminalError};
pub use geometry::{TerminalPosition, TerminalSize};
pub use headless::HeadlessDevice;
pub use virtual_terminal::{ResizeListener, VirtualTerminal};
