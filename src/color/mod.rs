//! Color representation, conversion and classification module
//!
//! This module handles hex decoding, the RGB to HSL transform, and
//! bucketing of HSL values into named color categories.

pub mod classify;
pub mod conversion;
pub mod name;

pub use classify::classify;
pub use conversion::{parse_hex, rgb_to_hsl, HslComponents, RgbComponents};
pub use name::{Color, ColorTag};
