//! Diagnostic analysis of Base64 input
//!
//! Explains why some text will or will not make useful audio without
//! converting it. Analysis never fails: decode errors become a report with
//! `valid == false`.
//!
//! # Sample-count convention
//!
//! The duration and sample-count estimates here assume two bytes per 16-bit
//! sample (`L / 2`), whereas [`crate::io::encoder`] emits one sample per
//! input byte. The two conventions disagree by a factor of two.
//!
//! # Example
//!
//! ```
//! use textwave::analyze;
//!
//! let report = analyze("AAEC");
//! assert!(!report.valid); // 3 bytes: very short and odd-length
//! assert_eq!(report.issues.len(), 2);
//! ```

use super::result::{AnalysisResult, AnalysisStats};
use crate::config::ConversionConfig;
use crate::error::ConversionError;
use crate::io::container::is_wav_container;
use crate::io::decoder::decode_payload;

const ALPHABET_HINT: &str =
    "Use only standard Base64 characters: A-Z, a-z, 0-9, '+' and '/' (no spaces or line breaks)";
const PADDING_HINT: &str = "Make sure '=' padding appears only at the end, at most twice";
const LENGTH_HINT: &str = "The text length must be a multiple of 4 characters";
const EMPTY_HINT: &str = "Provide non-empty Base64 content";

/// Analyze Base64 text with the default configuration
pub fn analyze(text: &str) -> AnalysisResult {
    analyze_with_config(text, &ConversionConfig::default())
}

/// Analyze Base64 text
///
/// # Arguments
///
/// * `text` - Base64 input (callers reject blank text beforehand)
/// * `config` - Sample rate and short-payload threshold
///
/// # Returns
///
/// A report that is `valid` only when no issues were found
pub fn analyze_with_config(text: &str, config: &ConversionConfig) -> AnalysisResult {
    let input_chars = text.chars().count();
    log::debug!("Analyzing {} chars of Base64 input", input_chars);

    let bytes = match decode_payload(text) {
        Ok(bytes) => bytes,
        Err(err) => return rejected(input_chars, err),
    };
    let len = bytes.len();

    if is_wav_container(&bytes) {
        log::debug!("Payload is already a WAV container ({} bytes)", len);
        return AnalysisResult {
            valid: true,
            is_wav: Some(true),
            error: None,
            message: Some("Input is already a valid WAV file and will be played as-is".to_string()),
            issues: vec![],
            suggestions: vec![],
            facts: vec![],
            stats: AnalysisStats {
                input_chars,
                decoded_bytes: len,
                sample_count: None,
                duration_seconds: None,
            },
        };
    }

    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut facts = vec![
        format!("Input length: {} Base64 characters", input_chars),
        format!("Decoded size: {} bytes", len),
    ];

    if len < config.min_recommended_bytes {
        issues.push(format!(
            "Very short payload ({} bytes) will produce only a brief click",
            len
        ));
        suggestions.push(format!(
            "Provide at least {} bytes of data for audible output",
            config.min_recommended_bytes
        ));
    }

    let duration_seconds = if config.sample_rate == 0 {
        issues.push("Sample rate is 0 Hz, so no playable audio can be produced".to_string());
        suggestions.push("Configure a positive sample rate such as 44100 Hz".to_string());
        0.0
    } else {
        (len as f64 / 2.0) / f64::from(config.sample_rate)
    };
    facts.push(format!(
        "Estimated duration: {:.3} seconds at {} Hz",
        duration_seconds, config.sample_rate
    ));

    if len % 2 == 1 {
        issues.push(format!(
            "Odd byte count ({}) breaks 16-bit sample alignment",
            len
        ));
        suggestions.push(
            "Pad the input by one character so the decoded data has an even length".to_string(),
        );
    } else {
        facts.push("Even byte count aligns with 16-bit samples".to_string());
    }

    let sample_count = len / 2;
    facts.push(format!("Sample count: {} 16-bit samples", sample_count));

    let valid = issues.is_empty();
    log::debug!("Analysis found {} issue(s) in {} bytes", issues.len(), len);

    let message = if valid {
        "Input looks suitable for audio conversion".to_string()
    } else {
        format!("Found {} issue(s) that may affect playback", issues.len())
    };

    AnalysisResult {
        valid,
        is_wav: Some(false),
        error: None,
        message: Some(message),
        issues,
        suggestions,
        facts,
        stats: AnalysisStats {
            input_chars,
            decoded_bytes: len,
            sample_count: Some(sample_count),
            duration_seconds: Some(duration_seconds),
        },
    }
}

/// Report for input that never produced a payload
fn rejected(input_chars: usize, err: ConversionError) -> AnalysisResult {
    log::debug!("Input rejected before analysis: {}", err);

    let suggestions = match err {
        ConversionError::EmptyPayload => vec![EMPTY_HINT.to_string()],
        _ => vec![
            ALPHABET_HINT.to_string(),
            PADDING_HINT.to_string(),
            LENGTH_HINT.to_string(),
        ],
    };

    AnalysisResult {
        valid: false,
        is_wav: None,
        error: Some(err.to_string()),
        message: None,
        issues: vec![],
        suggestions,
        facts: vec![],
        stats: AnalysisStats {
            input_chars,
            decoded_bytes: 0,
            sample_count: None,
            duration_seconds: None,
        },
    }
}
