//! PCM container encoder
//!
//! Wraps arbitrary bytes as mono 16-bit little-endian PCM WAV. Every input
//! byte is treated as one unsigned 8-bit sample and rescaled to signed 16-bit,
//! so N input bytes produce N samples and `2 * N` data bytes.
//!
//! # Example
//!
//! ```
//! use textwave::io::encoder::{encode_pcm_wav, WAV_HEADER_LEN};
//!
//! let wav = encode_pcm_wav(&[0, 128, 255], 44100);
//! assert_eq!(wav.len(), WAV_HEADER_LEN + 6);
//! assert_eq!(&wav[WAV_HEADER_LEN..], &[0x00, 0x80, 0x00, 0x00, 0x00, 0x7F]);
//! ```

use super::container::{RIFF_MARKER, WAVE_MARKER};

/// Channel count of every synthesized container
pub const CHANNELS: u16 = 1;

/// Bit depth of every synthesized container
pub const BITS_PER_SAMPLE: u16 = 16;

/// Size of the canonical RIFF + fmt + data header
pub const WAV_HEADER_LEN: usize = 44;

/// WAVE_FORMAT_PCM
const FORMAT_PCM: u16 = 0x0001;

/// Size of a plain PCM `fmt ` chunk body
const FMT_CHUNK_LEN: u32 = 16;

const BYTES_PER_SAMPLE: usize = (BITS_PER_SAMPLE / 8) as usize;

/// Map one input byte to a 16-bit sample: `(byte - 128) * 256`
///
/// 0 maps to -32768, 128 to 0 and 255 to 32512.
#[inline]
pub fn byte_to_sample(byte: u8) -> i16 {
    (i16::from(byte) - 128) * 256
}

/// Encode `bytes` as a complete mono 16-bit PCM WAV container
///
/// The declared RIFF size is `36 + data_len` and the declared data size is
/// exactly `2 * bytes.len()`, so the header always agrees with the buffer
/// length. Empty input yields a valid container with an empty data section.
pub fn encode_pcm_wav(bytes: &[u8], sample_rate: u32) -> Vec<u8> {
    let data_len = bytes.len() * BYTES_PER_SAMPLE;
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = sample_rate.saturating_mul(u32::from(block_align));

    log::debug!(
        "Encoding {} bytes as {} PCM samples at {} Hz",
        bytes.len(),
        bytes.len(),
        sample_rate
    );

    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + data_len);

    wav.extend_from_slice(RIFF_MARKER);
    wav.extend_from_slice(&(36 + data_len as u32).to_le_bytes());
    wav.extend_from_slice(WAVE_MARKER);

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    wav.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    wav.extend_from_slice(&CHANNELS.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(data_len as u32).to_le_bytes());
    for &byte in bytes {
        wav.extend_from_slice(&byte_to_sample(byte).to_le_bytes());
    }

    wav
}

/// Playback length in seconds of an encoded payload of `byte_len` bytes
///
/// One sample per byte, matching [`encode_pcm_wav`].
pub fn encoded_duration_seconds(byte_len: usize, sample_rate: u32) -> f64 {
    if sample_rate == 0 {
        return 0.0;
    }
    byte_len as f64 / f64::from(sample_rate)
}
