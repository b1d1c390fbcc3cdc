//! HSL to named color classification
//!
//! Buckets an HSL value into a [`Color`] by walking an ordered list of
//! threshold rules; the first rule that matches wins. Components are
//! floored to whole numbers before any comparison.

use crate::color::{Color, HslComponents};
use crate::constants::thresholds::{achromatic, brown, hue};

/// Classify an HSL color into a named color
///
/// Total over all inputs: values outside the nominal ranges (including
/// NaN) fall through to `Color::Unknown`.
#[allow(clippy::if_same_then_else)]
pub fn classify(hsl: HslComponents) -> Color {
    let h = hsl.hue.floor();
    let s = hsl.saturation.floor();
    let l = hsl.lightness.floor();

    let color = if s <= achromatic::MAX_SATURATION && l >= achromatic::WHITE_MIN_LIGHTNESS {
        Color::White
    } else if l <= achromatic::BLACK_MAX_LIGHTNESS {
        Color::Black
    } else if (s <= achromatic::MAX_SATURATION && l <= achromatic::GRAY_MAX_LIGHTNESS) || s == 0.0 {
        // Gray
        Color::Black
    } else if (h >= 0.0 && h <= hue::RED_MAX) || h >= hue::RED_WRAP_MIN {
        Color::Red
    } else if h > hue::RED_MAX && h <= hue::ORANGE_MAX {
        if s < brown::MAX_SATURATION {
            // Brown
            Color::Orange
        } else {
            Color::Orange
        }
    } else if h > hue::ORANGE_MAX && h <= hue::YELLOW_MAX {
        if s < brown::MAX_SATURATION {
            // Brown
            Color::Yellow
        } else {
            Color::Yellow
        }
    } else if h > hue::YELLOW_MAX && h <= hue::GREEN_MAX {
        Color::Green
    } else if h > hue::GREEN_MAX && h <= hue::LIGHT_BLUE_MAX {
        Color::LightBlue
    } else if h > hue::LIGHT_BLUE_MAX && h <= hue::BLUE_MAX {
        Color::Blue
    } else if h > hue::BLUE_MAX && h <= hue::PURPLE_MAX {
        Color::Purple
    } else if h > hue::PURPLE_MAX && h <= hue::PINK_MAX {
        // Pink
        Color::Purple
    } else {
        Color::Unknown
    };

    log::trace!("classified {:?} as {}", hsl, color);
    color
}
