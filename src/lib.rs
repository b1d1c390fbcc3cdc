//! # HSL Namer
//!
//! A Rust crate for naming colors in plain words.
//!
//! This library turns an RGB color into one of a small fixed set of
//! categories (White, Black, Red, Orange, Yellow, Green, Light Blue, Blue,
//! Purple, or Unknown) by:
//! - Decoding hex color codes (`#RGB`, `#RRGGBB`, `#RRGGBBAA`)
//! - Converting 8-bit RGB to HSL
//! - Applying ordered hue, saturation and lightness thresholds
//!
//! ## Example
//!
//! ```rust
//! use hsl_namer::{color_from_hex, color_from_rgb, Color};
//!
//! assert_eq!(color_from_hex("#0f0")?, Color::Green);
//! assert_eq!(color_from_rgb(255, 0, 0), Color::Red);
//! assert_eq!(Color::LightBlue.to_string(), "Light Blue");
//! # Ok::<(), hsl_namer::ColorError>(())
//! ```

pub mod error;
pub mod constants;
pub mod color;

pub use color::{Color, ColorTag, HslComponents, RgbComponents};
pub use error::{ColorError, Result};

/// Name the color given by a hex color code
///
/// # Arguments
///
/// * `hex` - Hex color code, optionally prefixed with `#`, of 3, 6 or 8 digits
///
/// # Errors
///
/// Returns `ColorError::InvalidFormat` if the code has the wrong length or
/// contains a non-hex digit
pub fn color_from_hex(hex: &str) -> Result<Color> {
    let rgb = color::parse_hex(hex)?;
    Ok(color_from_rgb_components(rgb))
}

/// Name the color given by 8-bit RGB channels
pub fn color_from_rgb(red: u8, green: u8, blue: u8) -> Color {
    color_from_rgb_components(RgbComponents::new(red, green, blue))
}

pub fn color_from_rgb_components(rgb: RgbComponents) -> Color {
    color::classify(color::rgb_to_hsl(rgb))
}

/// Name the color given by hue (degrees), saturation and lightness (percent)
pub fn color_from_hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
    color_from_hsl_components(HslComponents::new(hue, saturation, lightness))
}

pub fn color_from_hsl_components(hsl: HslComponents) -> Color {
    color::classify(hsl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_serialization() {
        let rgb = RgbComponents::new(12, 200, 34);
        let json = serde_json::to_string(&rgb).unwrap();
        assert_eq!(json, r#"{"red":12,"green":200,"blue":34}"#);
        let deserialized: RgbComponents = serde_json::from_str(&json).unwrap();
        assert_eq!(rgb, deserialized);

        let hsl = HslComponents::new(210.5, 40.0, 60.25);
        let json = serde_json::to_string(&hsl).unwrap();
        let deserialized: HslComponents = serde_json::from_str(&json).unwrap();
        assert_eq!(hsl, deserialized);
    }

    #[test]
    fn test_facade_composes_pipeline() {
        let rgb = RgbComponents::new(30, 144, 255);
        let hsl = color::rgb_to_hsl(rgb);
        assert_eq!(color_from_rgb_components(rgb), color::classify(hsl));
        assert_eq!(
            color_from_hsl(hsl.hue, hsl.saturation, hsl.lightness),
            color_from_rgb(30, 144, 255)
        );
    }
}
