//! Example: Convert a Base64 text file into a WAV file
//!
//! Usage:
//!   cargo run --example convert_text -- [--rate HZ] <input.txt|-> <output.wav>
//!
//! Reads the Base64 text from a file, or from stdin when the input is `-`.
//! Trailing newlines are trimmed; any other whitespace is rejected by the decoder.

use std::env;
use std::fs;
use std::io::Read;
use textwave::{convert_with_config, is_blank, ContainerKind, ConversionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let mut config = ConversionConfig::default();

    if args.first().map(String::as_str) == Some("--rate") {
        args.remove(0);
        let rate = args.first().ok_or("--rate requires a value")?.parse::<u32>()?;
        args.remove(0);
        config.sample_rate = rate;
    }

    if args.len() != 2 {
        eprintln!("Usage: convert_text [--rate HZ] <input.txt|-> <output.wav>");
        std::process::exit(2);
    }

    let mut text = String::new();
    if args[0] == "-" {
        std::io::stdin().read_to_string(&mut text)?;
    } else {
        text = fs::read_to_string(&args[0])?;
    }
    let text = text.trim_end_matches(['\r', '\n']);

    if is_blank(text) {
        eprintln!("No text provided");
        std::process::exit(2);
    }

    let audio = match convert_with_config(text, &config) {
        Ok(audio) => audio,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let how = match audio.kind {
        ContainerKind::PassThrough => "passed through existing WAV",
        ContainerKind::Encoded => "encoded as 16-bit mono PCM",
    };
    println!(
        "{}: {} payload bytes, {} ({} bytes, {})",
        args[1],
        audio.payload_len,
        how,
        audio.bytes.len(),
        audio.media_type()
    );

    fs::write(&args[1], audio.into_bytes())?;
    Ok(())
}
