//! Named color categories
//!
//! `Color` is the closed set of labels the classifier can produce. Each
//! variant carries a stable integer tag so it can travel through systems
//! that store colors as plain numbers.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ColorError;

/// Human-friendly color category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Color {
    #[default]
    Unknown,
    White,
    Black,
    Red,
    Orange,
    Yellow,
    Green,
    LightBlue,
    Blue,
    Purple,
}

impl Color {
    /// Every variant, ordered by tag
    pub const ALL: [Color; 10] = [
        Color::Unknown,
        Color::White,
        Color::Black,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::LightBlue,
        Color::Blue,
        Color::Purple,
    ];

    /// Canonical name shown to users
    pub const fn display_name(self) -> &'static str {
        match self {
            Color::Unknown => "Unknown",
            Color::White => "White",
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Orange => "Orange",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::LightBlue => "Light Blue",
            Color::Blue => "Blue",
            Color::Purple => "Purple",
        }
    }

    /// Integer tag of this variant (Unknown = 0 through Purple = 9)
    pub const fn tag(self) -> i32 {
        match self {
            Color::Unknown => 0,
            Color::White => 1,
            Color::Black => 2,
            Color::Red => 3,
            Color::Orange => 4,
            Color::Yellow => 5,
            Color::Green => 6,
            Color::LightBlue => 7,
            Color::Blue => 8,
            Color::Purple => 9,
        }
    }

    /// Look up the variant for an integer tag
    pub fn from_tag(tag: i32) -> Option<Self> {
        usize::try_from(tag)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<Color> for i32 {
    fn from(color: Color) -> Self {
        color.tag()
    }
}

impl TryFrom<i32> for Color {
    type Error = ColorError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        Color::from_tag(tag).ok_or(ColorError::UnknownTag { tag })
    }
}

/// Raw integer color tag, possibly outside the known range
///
/// Display falls back to `Color(<n>)` for tags that name no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorTag(pub i32);

impl ColorTag {
    pub fn color(self) -> Option<Color> {
        Color::from_tag(self.0)
    }

    pub fn display_name(self) -> Cow<'static, str> {
        match self.color() {
            Some(color) => Cow::Borrowed(color.display_name()),
            None => Cow::Owned(format!("Color({})", self.0)),
        }
    }
}

impl From<Color> for ColorTag {
    fn from(color: Color) -> Self {
        ColorTag(color.tag())
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
