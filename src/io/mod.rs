//! Byte-level I/O modules
//!
//! Strict Base64 decoding, RIFF/WAVE container detection, and the PCM
//! container encoder.

pub mod container;
pub mod decoder;
pub mod encoder;
