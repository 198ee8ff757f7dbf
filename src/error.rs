//! Error types for the conversion pipeline

use std::fmt;

/// Errors that can occur while turning Base64 text into audio
///
/// Only the conversion path returns these. The diagnostic analyzer embeds the
/// same messages in [`crate::AnalysisResult::error`] instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Text is not valid Base64 (bad alphabet, bad padding, wrong length)
    ///
    /// Carries the underlying decoder message.
    InvalidEncoding(String),

    /// Text decoded to zero bytes
    EmptyPayload,

    /// Conversion parameters cannot produce a playable container
    InvalidConfig(String),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidEncoding(msg) => write!(f, "Invalid Base64 input: {}", msg),
            ConversionError::EmptyPayload => write!(f, "Base64 decoded to empty data"),
            ConversionError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConversionError {}
