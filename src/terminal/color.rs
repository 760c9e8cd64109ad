//! Color representation for terminal cells
//!
//! Supports:
//! - Default foreground/background
//! - 16 named ANSI colors
//! - 256-color palette (0-255)
//! - 24-bit true color (RGB)
//!
//! Colors are carried as a tagged value and resolved to concrete RGB only
//! at draw time, by the backend.

use serde::{Deserialize, Serialize};

/// The 16 named ANSI palette entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// Palette index of this color (0-15)
    pub fn index(self) -> u8 {
        match self {
            AnsiColor::Black => 0,
            AnsiColor::Red => 1,
            AnsiColor::Green => 2,
            AnsiColor::Yellow => 3,
            AnsiColor::Blue => 4,
            AnsiColor::Magenta => 5,
            AnsiColor::Cyan => 6,
            AnsiColor::White => 7,
            AnsiColor::BrightBlack => 8,
            AnsiColor::BrightRed => 9,
            AnsiColor::BrightGreen => 10,
            AnsiColor::BrightYellow => 11,
            AnsiColor::BrightBlue => 12,
            AnsiColor::BrightMagenta => 13,
            AnsiColor::BrightCyan => 14,
            AnsiColor::BrightWhite => 15,
        }
    }
}

/// Color of a terminal cell, resolved to a concrete value at draw time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextColor {
    /// Default terminal color (foreground or background)
    Default,
    /// Named ANSI palette entry (0-15)
    Ansi(AnsiColor),
    /// Indexed color (0-255)
    /// 0-7: standard colors
    /// 8-15: bright colors
    /// 16-231: 6x6x6 color cube
    /// 232-255: grayscale
    Indexed(u8),
    /// 24-bit RGB color. Channel values are accepted as given, without
    /// range validation; interpretation is the backend's concern.
    Rgb { r: u8, g: u8, b: u8 },
}

impl Default for TextColor {
    fn default() -> Self {
        TextColor::Default
    }
}

impl TextColor {
    /// Create an indexed color
    pub fn indexed(index: u8) -> Self {
        TextColor::Indexed(index)
    }

    /// Create an RGB color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        TextColor::Rgb { r, g, b }
    }

    /// Resolve this color to RGB using the standard xterm palette.
    /// `is_foreground` selects the default when no explicit color is set.
    pub fn to_rgb(self, is_foreground: bool) -> (u8, u8, u8) {
        match self {
            TextColor::Default => {
                if is_foreground {
                    (229, 229, 229)
                } else {
                    (0, 0, 0)
                }
            }
            TextColor::Ansi(ansi) => index_to_rgb(ansi.index()),
            TextColor::Indexed(index) => index_to_rgb(index),
            TextColor::Rgb { r, g, b } => (r, g, b),
        }
    }
}

impl From<AnsiColor> for TextColor {
    fn from(color: AnsiColor) -> Self {
        TextColor::Ansi(color)
    }
}

/// Convert a 256-color index to RGB values using the xterm palette
fn index_to_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        // Standard colors (0-7)
        0 => (0, 0, 0),       // Black
        1 => (205, 0, 0),     // Red
        2 => (0, 205, 0),     // Green
        3 => (205, 205, 0),   // Yellow
        4 => (0, 0, 238),     // Blue
        5 => (205, 0, 205),   // Magenta
        6 => (0, 205, 205),   // Cyan
        7 => (229, 229, 229), // White

        // Bright colors (8-15)
        8 => (127, 127, 127),  // Bright Black (Gray)
        9 => (255, 0, 0),      // Bright Red
        10 => (0, 255, 0),     // Bright Green
        11 => (255, 255, 0),   // Bright Yellow
        12 => (92, 92, 255),   // Bright Blue
        13 => (255, 0, 255),   // Bright Magenta
        14 => (0, 255, 255),   // Bright Cyan
        15 => (255, 255, 255), // Bright White

        // 6x6x6 color cube (16-231)
        16..=231 => {
            let idx = index - 16;
            let r = idx / 36;
            let g = (idx % 36) / 6;
            let b = idx % 6;
            let to_val = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            (to_val(r), to_val(g), to_val(b))
        }

        // Grayscale (232-255)
        232..=255 => {
            let gray = 8 + (index - 232) * 10;
            (gray, gray, gray)
        }
    }
}
