//! Terminal characters and graphic-rendition attributes
//!
//! A [`TerminalCharacter`] is the unit stored in the character buffer: a
//! glyph plus the colors and SGR attributes that were active when it was
//! written. Values are immutable; attribute changes on the terminal only
//! affect characters written afterwards.

use serde::{Deserialize, Serialize};

use super::color::TextColor;

/// Graphic-rendition flags affecting how a character is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sgr {
    Bold,
    Reverse,
    Underline,
    Blink,
    Bordered,
    Fraktur,
    CrossedOut,
    Circled,
    Italic,
}

impl Sgr {
    /// All flags, in bit order
    pub const ALL: [Sgr; 9] = [
        Sgr::Bold,
        Sgr::Reverse,
        Sgr::Underline,
        Sgr::Blink,
        Sgr::Bordered,
        Sgr::Fraktur,
        Sgr::CrossedOut,
        Sgr::Circled,
        Sgr::Italic,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// A set of [`Sgr`] flags, stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SgrSet {
    bits: u16,
}

impl SgrSet {
    /// The empty set
    pub const EMPTY: SgrSet = SgrSet { bits: 0 };

    /// Create an empty set
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Add a flag to the set
    pub fn insert(&mut self, sgr: Sgr) {
        self.bits |= sgr.bit();
    }

    /// Remove a flag from the set
    pub fn remove(&mut self, sgr: Sgr) {
        self.bits &= !sgr.bit();
    }

    /// Whether the set contains a flag
    pub fn contains(self, sgr: Sgr) -> bool {
        self.bits & sgr.bit() != 0
    }

    /// Remove all flags
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Number of flags in the set
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over the flags in the set
    pub fn iter(self) -> impl Iterator<Item = Sgr> {
        Sgr::ALL.into_iter().filter(move |sgr| self.contains(*sgr))
    }
}

impl FromIterator<Sgr> for SgrSet {
    fn from_iter<I: IntoIterator<Item = Sgr>>(iter: I) -> Self {
        let mut set = SgrSet::new();
        for sgr in iter {
            set.insert(sgr);
        }
        set
    }
}

/// A single cell's worth of content: glyph, colors and active attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalCharacter {
    /// The displayable symbol
    pub glyph: char,
    /// Foreground color
    pub foreground: TextColor,
    /// Background color
    pub background: TextColor,
    /// Graphic-rendition attributes active when the character was written
    pub attributes: SgrSet,
}

impl TerminalCharacter {
    /// The blank character seeding cleared cells
    pub const DEFAULT: TerminalCharacter = TerminalCharacter {
        glyph: ' ',
        foreground: TextColor::Default,
        background: TextColor::Default,
        attributes: SgrSet::EMPTY,
    };

    /// Create a character with default colors and no attributes
    pub fn new(glyph: char) -> Self {
        Self {
            glyph,
            ..Self::DEFAULT
        }
    }

    /// Create a fully styled character
    pub fn styled(glyph: char, foreground: TextColor, background: TextColor, attributes: SgrSet) -> Self {
        Self {
            glyph,
            foreground,
            background,
            attributes,
        }
    }

    /// Display width of the glyph in terminal columns
    pub fn width(&self) -> usize {
        use unicode_width::UnicodeWidthChar;
        self.glyph.width().unwrap_or(0)
    }

    /// Whether this is an unstyled blank cell
    pub fn is_blank(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for TerminalCharacter {
    fn default() -> Self {
        Self::DEFAULT
    }
}
