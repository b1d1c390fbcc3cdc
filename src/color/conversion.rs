//! Color representation and conversion utilities
//!
//! Provides the two value types the classifier works on and the
//! conversions between them:
//! - Hex color code to RGB (`#RGB`, `#RRGGBB`, `#RRGGBBAA`)
//! - 8-bit RGB to HSL
//! - RGB to and from `palette::Srgb<u8>`
//!
//! The HSL produced here is the simplified variant the classification
//! thresholds are tuned against: saturation is the raw chroma rather than
//! chroma divided by `1 - |2L - 1|`.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::constants::{sextant, CHANNEL_MAX, DEGREES_PER_SEXTANT};
use crate::{ColorError, Result};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RgbComponents {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbComponents {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Format as an upper case `#RRGGBB` hex color code
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for RgbComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RgbComponents {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex(s)
    }
}

impl From<Srgb<u8>> for RgbComponents {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<RgbComponents> for Srgb<u8> {
    fn from(rgb: RgbComponents) -> Self {
        Srgb::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<(u8, u8, u8)> for RgbComponents {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

/// HSL color
///
/// Hue is in degrees [0, 360), saturation and lightness are percentages
/// [0, 100]. Values outside those ranges are accepted and classify as
/// `Color::Unknown` when no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HslComponents {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslComponents {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Decode a single ASCII hex digit
fn nibble(digit: u8) -> Option<u8> {
    char::from(digit).to_digit(16).map(|value| value as u8)
}

/// Parse a hex color code into RGB
///
/// # Arguments
///
/// * `input` - Hex color code with an optional leading `#`: 3 digits
///   (shorthand, each digit doubled), 6 digits, or 8 digits (trailing
///   alpha byte is validated and discarded). Digits are case-insensitive.
///
/// # Returns
///
/// The decoded RGB triple
///
/// # Errors
///
/// Returns `ColorError::InvalidFormat` if the digit count is not 3, 6 or 8,
/// or if any character is not a hex digit
pub fn parse_hex(input: &str) -> Result<RgbComponents> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    if !matches!(digits.len(), 3 | 6 | 8) {
        log::debug!("rejecting hex color {:?}: {} digits", input, digits.len());
        return Err(ColorError::invalid_format(
            digits,
            "expected 3, 6 or 8 hex digits",
        ));
    }

    // Byte-wise so multi-byte characters are rejected rather than split
    let nibbles = digits
        .bytes()
        .map(nibble)
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| {
            log::debug!("rejecting hex color {:?}: non-hex digit", input);
            ColorError::invalid_format(digits, "contains a non-hex digit")
        })?;

    let channel = |index: usize| -> u8 {
        if nibbles.len() == 3 {
            // 0xF -> 0xFF
            nibbles[index] * 17
        } else {
            (nibbles[2 * index] << 4) | nibbles[2 * index + 1]
        }
    };

    let rgb = RgbComponents::new(channel(0), channel(1), channel(2));
    log::trace!("parsed hex color {:?} as {:?}", input, rgb);
    Ok(rgb)
}

/// Convert 8-bit RGB to HSL
///
/// Hue is chosen by the dominant channel, checking red, then green, then
/// blue when channels tie. Achromatic colors (zero chroma) get hue 0.
///
/// # Arguments
///
/// * `rgb` - RGB color
///
/// # Returns
///
/// HSL with hue in degrees, saturation as `chroma * 100` and lightness as
/// `(max + min) * 50`
pub fn rgb_to_hsl(rgb: RgbComponents) -> HslComponents {
    let r = f64::from(rgb.red) / CHANNEL_MAX;
    let g = f64::from(rgb.green) / CHANNEL_MAX;
    let b = f64::from(rgb.blue) / CHANNEL_MAX;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let sextants = if chroma == 0.0 {
        0.0
    } else if max == r {
        let segment = (g - b) / chroma;
        if segment < 0.0 {
            segment + sextant::FULL_TURN
        } else {
            segment
        }
    } else if max == g {
        (b - r) / chroma + sextant::GREEN
    } else {
        (r - g) / chroma + sextant::BLUE
    };

    let hsl = HslComponents::new(
        sextants * DEGREES_PER_SEXTANT,
        chroma * 100.0,
        (max + min) * 50.0,
    );
    log::trace!("converted {:?} to {:?}", rgb, hsl);
    hsl
}
