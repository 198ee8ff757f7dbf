//! Analysis result types

use serde::{Deserialize, Serialize};

/// Size and timing figures behind an [`AnalysisResult`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStats {
    /// Length of the Base64 input in characters
    pub input_chars: usize,

    /// Decoded payload size in bytes (0 when decoding failed)
    pub decoded_bytes: usize,

    /// Estimated 16-bit sample count, `decoded_bytes / 2`
    ///
    /// Absent for inputs that are already WAV files or failed to decode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<usize>,

    /// Estimated duration in seconds, `(decoded_bytes / 2) / sample_rate`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

/// Diagnostic report on whether some Base64 text will make useful audio
///
/// Always fully populated: decode failures are reported through `error` and
/// `suggestions` rather than as an `Err`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// True when no issues were found
    pub valid: bool,

    /// Whether the payload already is a WAV container
    ///
    /// `None` when the input never decoded to a payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_wav: Option<bool>,

    /// Decode failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// One-line summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Problems that make the output less useful as audio
    pub issues: Vec<String>,

    /// How to fix the issues
    pub suggestions: Vec<String>,

    /// Neutral or positive observations
    pub facts: Vec<String>,

    /// Raw figures
    pub stats: AnalysisStats,
}

impl AnalysisResult {
    /// Whether the input failed before any heuristics could run
    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }
}
