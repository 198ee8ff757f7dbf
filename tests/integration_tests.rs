//! Integration tests for the Base64-to-WAV pipeline

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Cursor;
use textwave::io::container::is_wav_container;
use textwave::io::encoder::encode_pcm_wav;
use textwave::{analyze, convert, convert_with_config, ContainerKind, ConversionConfig, ConversionError};

/// Read a WAV buffer back with an independent decoder
fn read_wav(bytes: &[u8]) -> Result<(hound::WavSpec, Vec<i16>), Box<dyn std::error::Error>> {
    let mut reader = hound::WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();
    let samples = reader.samples::<i16>().collect::<Result<Vec<_>, _>>()?;
    Ok((spec, samples))
}

/// Deterministic pseudo-random payload covering every byte value
fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 31 + 7) % 256) as u8).collect()
}

fn declared_data_len(wav: &[u8]) -> u32 {
    u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converted_audio_is_readable() {
        let bytes = payload(1000);
        let wav = convert(&STANDARD.encode(&bytes)).expect("Conversion should succeed");

        let (spec, samples) = read_wav(&wav).expect("hound should parse the container");
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);
        assert_eq!(samples.len(), bytes.len());

        for (i, (&b, &s)) in bytes.iter().zip(samples.iter()).enumerate() {
            assert_eq!(
                i32::from(s),
                (i32::from(b) - 128) * 256,
                "sample {} for byte {}",
                i,
                b
            );
        }
    }

    #[test]
    fn test_declared_lengths_match_buffer() {
        for n in [1usize, 2, 3, 99, 100, 4096] {
            let wav = convert(&STANDARD.encode(payload(n))).unwrap();
            assert_eq!(declared_data_len(&wav) as usize, 2 * n, "data length for n={}", n);
            let riff_len = u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]) as usize;
            assert_eq!(riff_len + 8, wav.len(), "riff length for n={}", n);

            let (_, samples) = read_wav(&wav).unwrap();
            assert_eq!(samples.len(), n);
        }
    }

    #[test]
    fn test_sample_mapping_extremes() {
        let wav = convert(&STANDARD.encode([0u8, 128, 255])).unwrap();
        let (_, samples) = read_wav(&wav).unwrap();
        assert_eq!(samples, vec![-32768, 0, 32512]);
    }

    #[test]
    fn test_wav_input_passes_through_unchanged() {
        // A real file produced by another writer
        let mut original: Vec<u8> = Vec::new();
        {
            let spec = hound::WavSpec {
                channels: 2,
                sample_rate: 48000,
                bits_per_sample: 16,
                sample_format: hound::SampleFormat::Int,
            };
            let mut writer = hound::WavWriter::new(Cursor::new(&mut original), spec).unwrap();
            for i in 0..480i16 {
                writer.write_sample(i * 10).unwrap();
            }
            writer.finalize().unwrap();
        }
        assert!(is_wav_container(&original));

        let converted = convert_with_config(&STANDARD.encode(&original), &ConversionConfig::default())
            .unwrap();
        assert_eq!(converted.kind, ContainerKind::PassThrough);
        assert_eq!(converted.bytes, original);
    }

    #[test]
    fn test_reconverting_output_is_identity() {
        let first = convert(&STANDARD.encode(payload(333))).unwrap();
        let second = convert(&STANDARD.encode(&first)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_crafted_markers_pass_through_without_validation() {
        let mut crafted = b"RIFF\xFF\xFF\xFF\xFFWAVE".to_vec();
        crafted.extend_from_slice(&[0x55; 20]);
        let out = convert(&STANDARD.encode(&crafted)).unwrap();
        assert_eq!(out, crafted);
    }

    #[test]
    fn test_encoder_round_trips_through_detector() {
        for n in [1usize, 11, 12, 13, 10_000] {
            assert!(is_wav_container(&encode_pcm_wav(&payload(n), 44100)));
        }
    }

    #[test]
    fn test_conversion_errors() {
        assert_eq!(convert(""), Err(ConversionError::EmptyPayload));

        let err = convert("not-base64!").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidEncoding(_)));
        assert!(err.to_string().starts_with("Invalid Base64 input:"));

        // Failures are deterministic
        assert_eq!(convert("not-base64!").unwrap_err(), err);
    }

    #[test]
    fn test_custom_sample_rate_is_written() {
        let config = ConversionConfig::with_sample_rate(8000);
        let converted = convert_with_config(&STANDARD.encode(payload(800)), &config).unwrap();
        let (spec, samples) = read_wav(&converted.bytes).unwrap();
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(samples.len(), 800);
    }

    #[test]
    fn test_analyze_and_convert_agree_on_rejection() {
        for text in ["", "not-base64!", "SGVsbG8", "SGVs\nbG8="] {
            let report = analyze(text);
            let converted = convert(text);
            assert!(!report.valid, "{:?}", text);
            assert_eq!(
                report.error,
                converted.err().map(|e| e.to_string()),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn test_analyze_odd_length() {
        let report = analyze(&STANDARD.encode(payload(257)));
        assert!(!report.valid);
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].contains("16-bit"));
        assert_eq!(report.stats.sample_count, Some(128));
    }

    #[test]
    fn test_analyze_wav_reports_no_heuristics() {
        let wav = convert(&STANDARD.encode(payload(10))).unwrap();
        let report = analyze(&STANDARD.encode(&wav));
        assert!(report.valid);
        assert_eq!(report.is_wav, Some(true));
        assert_eq!(report.stats.decoded_bytes, wav.len());
        assert!(report.stats.sample_count.is_none());
    }

    #[test]
    fn test_analysis_serializes_to_json() {
        let report = analyze(&STANDARD.encode(payload(1000)));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["valid"], true);
        assert_eq!(json["is_wav"], false);
        assert_eq!(json["stats"]["input_chars"], 1336);
        assert_eq!(json["stats"]["decoded_bytes"], 1000);
        assert_eq!(json["stats"]["sample_count"], 500);
        assert!(json["facts"].as_array().unwrap().len() >= 4);

        let back: textwave::AnalysisResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.valid, report.valid);
        assert_eq!(back.facts, report.facts);
        assert_eq!(back.stats.sample_count, report.stats.sample_count);
    }

    #[test]
    fn test_analyze_rejection_serializes_error() {
        let json = serde_json::to_value(analyze("")).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["error"], "Base64 decoded to empty data");
        assert!(json.get("is_wav").is_none());
    }
}
