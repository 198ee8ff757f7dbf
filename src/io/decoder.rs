//! Strict Base64 decoding
//!
//! Input must use the standard alphabet (`A-Z`, `a-z`, `0-9`, `+`, `/`), carry
//! canonical `=` padding, and have a length divisible by 4. Whitespace is not
//! skipped.
//!
//! # Example
//!
//! ```
//! use textwave::io::decoder::decode_text;
//!
//! assert_eq!(decode_text("aGk=")?, b"hi".to_vec());
//! assert!(decode_text("aGk").is_err());
//! # Ok::<(), textwave::ConversionError>(())
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ConversionError;

/// Decode Base64 text into raw bytes
///
/// An empty string decodes to an empty vector; use [`decode_payload`] when a
/// zero-length result must be rejected.
///
/// # Errors
///
/// Returns `ConversionError::InvalidEncoding` carrying the decoder's message
/// for invalid characters, bad length, bad padding, or non-canonical trailing
/// bits.
pub fn decode_text(text: &str) -> Result<Vec<u8>, ConversionError> {
    STANDARD
        .decode(text)
        .map_err(|e| ConversionError::InvalidEncoding(e.to_string()))
}

/// Decode Base64 text and reject an empty result
///
/// This is the decode step shared by conversion and analysis.
///
/// # Errors
///
/// `InvalidEncoding` as for [`decode_text`], or `EmptyPayload` when the text
/// decodes to zero bytes.
pub fn decode_payload(text: &str) -> Result<Vec<u8>, ConversionError> {
    let bytes = decode_text(text)?;
    if bytes.is_empty() {
        return Err(ConversionError::EmptyPayload);
    }
    log::debug!("Decoded {} Base64 chars into {} bytes", text.len(), bytes.len());
    Ok(bytes)
}
