//! Error types for color conversion.

use thiserror::Error;

/// Errors that can occur while parsing or converting colors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex string with the wrong length or a non-hex character
    #[error("Invalid hex color '{input}': expected '#' followed by 6 hex digits")]
    InvalidFormat {
        /// The rejected input
        input: String,
    },
}

impl ColorError {
    /// Create an invalid format error for the given input.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_message_names_input() {
        let err = ColorError::invalid_format("#ABC");
        assert_eq!(
            err.to_string(),
            "Invalid hex color '#ABC': expected '#' followed by 6 hex digits"
        );
    }
}
