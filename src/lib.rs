//! # textwave
//!
//! Turns arbitrary Base64 text into a playable WAV buffer, and explains in
//! plain words why a given input will or will not make useful audio.
//!
//! ## Features
//!
//! - **Strict Base64 decoding**: standard alphabet, canonical padding, length divisible by 4
//! - **Container detection**: input that already is a RIFF/WAVE file is passed through untouched
//! - **PCM encoding**: anything else becomes mono 16-bit PCM, one sample per input byte
//! - **Diagnostics**: facts, issues and suggestions about the input, without converting it
//!
//! ## Quick Start
//!
//! ```
//! use textwave::{analyze, convert};
//!
//! let wav = convert("AIAA/w==")?; // bytes 0x00 0x80 0x00 0xFF
//! assert_eq!(&wav[0..4], b"RIFF");
//!
//! let report = analyze("AIAA/w==");
//! println!("valid: {}, issues: {:?}", report.valid, report.issues);
//! # Ok::<(), textwave::ConversionError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! text → Base64 decode → container check → pass-through | PCM encode → WAV bytes
//! text → Base64 decode → container check → heuristics → AnalysisResult
//! ```
//!
//! All operations are pure and synchronous. Requests share no state and can
//! run on as many threads as the caller likes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;

// Re-export main types
pub use analysis::diagnostics::{analyze, analyze_with_config};
pub use analysis::result::{AnalysisResult, AnalysisStats};
pub use config::ConversionConfig;
pub use error::ConversionError;

use io::container::is_wav_container;
use io::decoder::decode_payload;
use io::encoder::encode_pcm_wav;
use serde::{Deserialize, Serialize};

/// Media type to serve converted buffers with
pub const WAV_MEDIA_TYPE: &str = "audio/wav";

/// How a converted buffer was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
    /// Input already was a WAV file and is returned byte-for-byte
    PassThrough,
    /// Input bytes were wrapped as mono 16-bit PCM
    Encoded,
}

/// Output of [`convert_with_config`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedAudio {
    /// Complete WAV container
    pub bytes: Vec<u8>,

    /// Whether `bytes` is the decoded input or a synthesized container
    pub kind: ContainerKind,

    /// Number of bytes the Base64 input decoded to
    pub payload_len: usize,
}

impl ConvertedAudio {
    /// Media type for inline playback
    pub fn media_type(&self) -> &'static str {
        WAV_MEDIA_TYPE
    }

    /// Take the WAV buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Whether `text` is empty or whitespace only
///
/// Transports reject such input before calling [`convert`] or [`analyze`];
/// the core itself does not check it.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Convert Base64 text into a playable WAV buffer
///
/// Uses the default configuration (44100 Hz).
///
/// # Errors
///
/// `InvalidEncoding` for malformed Base64, `EmptyPayload` when the text
/// decodes to nothing.
///
/// # Example
///
/// ```
/// use textwave::{convert, ConversionError};
///
/// assert_eq!(convert(""), Err(ConversionError::EmptyPayload));
/// assert!(matches!(convert("not-base64!"), Err(ConversionError::InvalidEncoding(_))));
/// ```
pub fn convert(text: &str) -> Result<Vec<u8>, ConversionError> {
    convert_with_config(text, &ConversionConfig::default()).map(ConvertedAudio::into_bytes)
}

/// Convert Base64 text into a WAV buffer
///
/// # Arguments
///
/// * `text` - Base64 input (callers reject blank text beforehand)
/// * `config` - Sample rate for synthesized containers
///
/// # Returns
///
/// The decoded bytes unchanged when they already form a RIFF/WAVE container,
/// otherwise a freshly encoded mono 16-bit PCM container
///
/// # Errors
///
/// `InvalidConfig` for a zero sample rate, otherwise as for [`convert`]
pub fn convert_with_config(
    text: &str,
    config: &ConversionConfig,
) -> Result<ConvertedAudio, ConversionError> {
    log::debug!("Starting conversion of {} Base64 chars", text.len());

    if config.sample_rate == 0 {
        return Err(ConversionError::InvalidConfig(
            "sample rate must be greater than 0".to_string(),
        ));
    }

    let payload = decode_payload(text)?;
    let payload_len = payload.len();

    if is_wav_container(&payload) {
        log::debug!("Passing through existing WAV container ({} bytes)", payload_len);
        return Ok(ConvertedAudio {
            bytes: payload,
            kind: ContainerKind::PassThrough,
            payload_len,
        });
    }

    let bytes = encode_pcm_wav(&payload, config.sample_rate);
    log::debug!(
        "Encoded {} bytes into {} byte WAV container",
        payload_len,
        bytes.len()
    );

    Ok(ConvertedAudio {
        bytes,
        kind: ContainerKind::Encoded,
        payload_len,
    })
}
