//! Error types for the hsl_namer library

use thiserror::Error;

/// Result type alias for hsl_namer operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors raised while decoding color input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex color string has the wrong length or contains a non-hex digit
    #[error("invalid hex color code: {input} ({reason})")]
    InvalidFormat {
        input: String,
        reason: &'static str,
    },

    /// Raw integer does not name any `Color` variant
    #[error("unknown color tag: {tag}")]
    UnknownTag { tag: i32 },
}

impl ColorError {
    /// Create an invalid format error for the offending input
    pub fn invalid_format(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            reason,
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidFormat { input, .. } => format!(
                "\"{}\" is not a color code. Use #RGB, #RRGGBB or #RRGGBBAA.",
                input
            ),
            ColorError::UnknownTag { tag } => {
                format!("{} does not identify a known color.", tag)
            }
        }
    }
}
