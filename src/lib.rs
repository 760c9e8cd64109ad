//! Weft Text-UI Toolkit
//!
//! A toolkit for building text-based user interfaces on top of a virtual
//! terminal emulation layer. This crate provides:
//!
//! - `terminal`: the virtual terminal core, character buffer, color model
//!   and the pluggable `DeviceEmulator` backend contract
//! - `input`: decoded keyboard input events
//! - `gui`: window abstractions and list-style widgets with observable
//!   data models

pub mod gui;
pub mod input;
pub mod terminal;
