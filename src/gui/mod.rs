//! Window and widget layer
//!
//! Conventional composition code sitting on top of the terminal core:
//! window abstractions with placement hints, and list-style widgets bound
//! to observable data models. Widgets consume decoded [`KeyStroke`] input
//! and expose their state for a renderer to draw; rendering itself is the
//! backend's concern.
//!
//! [`KeyStroke`]: crate::input::KeyStroke

pub mod listbox;
pub mod window;

pub use listbox::{
    ActionListBox, BasicListBoxModel, CheckBoxList, ListBoxModel, ListBoxResult, RadioBoxList,
};
pub use window::{BasicWindow, Window, WindowHint, WindowStack};
