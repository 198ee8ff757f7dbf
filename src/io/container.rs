//! RIFF/WAVE container detection
//!
//! A shallow prefix check: only the two ASCII markers are inspected. Chunk
//! sizes, format fields and the data section are trusted as-is, so crafted
//! input carrying both markers is accepted.

/// Marker at bytes 0..4
pub const RIFF_MARKER: &[u8; 4] = b"RIFF";

/// Marker at bytes 8..12
pub const WAVE_MARKER: &[u8; 4] = b"WAVE";

/// Shortest byte sequence that can carry both markers
pub const MIN_HEADER_LEN: usize = 12;

/// Check whether `bytes` already is a complete WAV container
///
/// # Example
///
/// ```
/// use textwave::io::container::is_wav_container;
///
/// assert!(is_wav_container(b"RIFF\x24\x00\x00\x00WAVEfmt "));
/// assert!(!is_wav_container(b"RIFF"));
/// ```
pub fn is_wav_container(bytes: &[u8]) -> bool {
    bytes.len() >= MIN_HEADER_LEN && &bytes[0..4] == RIFF_MARKER && &bytes[8..12] == WAVE_MARKER
}
