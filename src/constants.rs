//! Classification thresholds and conversion constants
//!
//! This module contains the compile-time constants the classifier buckets
//! HSL values against. All percentages are on the 0-100 scale produced by
//! [`rgb_to_hsl`](crate::color::conversion::rgb_to_hsl), hues are in degrees.

/// Maximum value of an 8-bit color channel, used for normalization
pub const CHANNEL_MAX: f64 = 255.0;

/// Width of one hue sextant in degrees (360° / 6 hexagon sides)
pub const DEGREES_PER_SEXTANT: f64 = 60.0;

/// Sextant offsets added to the chroma-normalized segment for each dominant channel
pub mod sextant {
    /// Full rotation applied when the red-dominant segment is negative (360° / 60°)
    pub const FULL_TURN: f64 = 6.0;

    /// Green sits at 120° (120° / 60°)
    pub const GREEN: f64 = 2.0;

    /// Blue sits at 240° (240° / 60°)
    pub const BLUE: f64 = 4.0;
}

/// Threshold rules applied to the floored HSL components
pub mod thresholds {
    /// Rules for colors with little or no chroma
    pub mod achromatic {
        /// Saturation at or below which a color counts as washed out
        pub const MAX_SATURATION: f64 = 10.0;

        /// Lightness at or above which a washed out color is White
        pub const WHITE_MIN_LIGHTNESS: f64 = 90.0;

        /// Lightness at or below which any color is Black
        pub const BLACK_MAX_LIGHTNESS: f64 = 13.0;

        /// Lightness at or below which a washed out color is gray (reported as Black)
        pub const GRAY_MAX_LIGHTNESS: f64 = 70.0;
    }

    /// Upper (inclusive) hue bounds of each chromatic bucket, in degrees
    pub mod hue {
        /// Red covers [0, 16] on the low side of the wheel
        pub const RED_MAX: f64 = 16.0;
        pub const ORANGE_MAX: f64 = 36.0;
        pub const YELLOW_MAX: f64 = 64.0;
        pub const GREEN_MAX: f64 = 165.0;
        pub const LIGHT_BLUE_MAX: f64 = 208.0;
        pub const BLUE_MAX: f64 = 260.0;
        pub const PURPLE_MAX: f64 = 290.0;
        pub const PINK_MAX: f64 = 345.0;

        /// Red wraps around again from here up to 360
        pub const RED_WRAP_MIN: f64 = 346.0;
    }

    /// Saturation below which orange and yellow hues read as brown
    pub mod brown {
        pub const MAX_SATURATION: f64 = 90.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_bounds_are_ascending() {
        use thresholds::hue::*;
        let bounds = [
            RED_MAX,
            ORANGE_MAX,
            YELLOW_MAX,
            GREEN_MAX,
            LIGHT_BLUE_MAX,
            BLUE_MAX,
            PURPLE_MAX,
            PINK_MAX,
            RED_WRAP_MIN,
        ];
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert!(RED_WRAP_MIN < 360.0);
    }

    #[test]
    fn test_hue_buckets_leave_no_integer_gap() {
        // Rules compare floored hues, so the pink bucket must end right before red wraps
        assert_eq!(thresholds::hue::PINK_MAX + 1.0, thresholds::hue::RED_WRAP_MIN);
    }

    #[test]
    fn test_achromatic_ranges() {
        use thresholds::achromatic::*;
        assert!(BLACK_MAX_LIGHTNESS < GRAY_MAX_LIGHTNESS);
        assert!(GRAY_MAX_LIGHTNESS < WHITE_MIN_LIGHTNESS);
        assert!(MAX_SATURATION < thresholds::brown::MAX_SATURATION);
    }

    #[test]
    fn test_sextant_offsets_match_primary_hues() {
        assert_eq!(sextant::GREEN * DEGREES_PER_SEXTANT, 120.0);
        assert_eq!(sextant::BLUE * DEGREES_PER_SEXTANT, 240.0);
        assert_eq!(sextant::FULL_TURN * DEGREES_PER_SEXTANT, 360.0);
    }
}
