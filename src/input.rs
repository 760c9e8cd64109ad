//! Decoded keyboard input events
//!
//! Backends decode whatever raw input they capture (window events, byte
//! streams) into [`KeyStroke`] values before handing them to the terminal's
//! caller. This module defines only the decoded representation; raw
//! byte-stream decoding is a backend concern.

use serde::{Deserialize, Serialize};

/// The kind of key a [`KeyStroke`] represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    /// A printable character; the character itself is carried on the stroke
    Character,
    Enter,
    Escape,
    Backspace,
    Tab,
    /// Shift+Tab
    ReverseTab,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    /// Function key F1-F12
    Function(u8),
    /// The input source reached end-of-file
    Eof,
}

/// A single decoded key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStroke {
    pub key_type: KeyType,
    /// The character for `KeyType::Character` strokes, `None` otherwise
    pub character: Option<char>,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyStroke {
    /// A plain stroke of the given key type
    pub fn of(key_type: KeyType) -> Self {
        Self {
            key_type,
            character: None,
            ctrl: false,
            alt: false,
        }
    }

    /// A printable character stroke
    pub fn from_char(character: char) -> Self {
        Self {
            key_type: KeyType::Character,
            character: Some(character),
            ctrl: false,
            alt: false,
        }
    }

    /// Return a copy of this stroke with modifier flags set
    pub fn with_modifiers(self, ctrl: bool, alt: bool) -> Self {
        Self { ctrl, alt, ..self }
    }

    /// The printable character, if this is a character stroke
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Whether this stroke is the given printable character, unmodified
    pub fn is_character(&self, character: char) -> bool {
        self.key_type == KeyType::Character
            && self.character == Some(character)
            && !self.ctrl
            && !self.alt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_stroke() {
        let stroke = KeyStroke::from_char('q');
        assert_eq!(stroke.key_type, KeyType::Character);
        assert_eq!(stroke.character(), Some('q'));
        assert!(stroke.is_character('q'));
        assert!(!stroke.is_character('w'));
    }

    #[test]
    fn test_modifiers() {
        let stroke = KeyStroke::from_char('c').with_modifiers(true, false);
        assert!(stroke.ctrl);
        assert!(!stroke.alt);
        // Modified characters don't match as plain characters
        assert!(!stroke.is_character('c'));
    }

    #[test]
    fn test_special_key() {
        let stroke = KeyStroke::of(KeyType::ArrowDown);
        assert_eq!(stroke.character(), None);
        assert_eq!(stroke.key_type, KeyType::ArrowDown);
    }
}
