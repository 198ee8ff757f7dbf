//! Configuration parameters for conversion and analysis

/// Default output sample rate in Hz
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Payloads shorter than this many bytes are flagged as very short
pub const DEFAULT_MIN_RECOMMENDED_BYTES: usize = 100;

/// Conversion configuration parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Sample rate written into synthesized containers (default: 44100)
    ///
    /// Also used by the analyzer when estimating duration.
    pub sample_rate: u32,

    /// Minimum decoded length the analyzer considers long enough to be
    /// audible (default: 100)
    pub min_recommended_bytes: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            min_recommended_bytes: DEFAULT_MIN_RECOMMENDED_BYTES,
        }
    }
}

impl ConversionConfig {
    /// Config with a custom sample rate and default thresholds
    pub fn with_sample_rate(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }
}
