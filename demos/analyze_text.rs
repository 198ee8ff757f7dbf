//! Example: Explain whether Base64 text will make useful audio
//!
//! Usage:
//!   cargo run --example analyze_text -- [--json] <input.txt|->

use std::env;
use std::fs;
use std::io::Read;
use textwave::{analyze, is_blank};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let json = args.first().map(String::as_str) == Some("--json");
    if json {
        args.remove(0);
    }

    let Some(input) = args.first() else {
        eprintln!("Usage: analyze_text [--json] <input.txt|->");
        std::process::exit(2);
    };

    let mut text = String::new();
    if input == "-" {
        std::io::stdin().read_to_string(&mut text)?;
    } else {
        text = fs::read_to_string(input)?;
    }
    let text = text.trim_end_matches(['\r', '\n']);

    if is_blank(text) {
        eprintln!("No text provided");
        std::process::exit(2);
    }

    let report = analyze(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Analysis Results:");
    println!("  Valid: {}", report.valid);
    if let Some(error) = &report.error {
        println!("  Error: {}", error);
    }
    if let Some(message) = &report.message {
        println!("  {}", message);
    }
    for fact in &report.facts {
        println!("  + {}", fact);
    }
    for issue in &report.issues {
        println!("  ! {}", issue);
    }
    for suggestion in &report.suggestions {
        println!("  > {}", suggestion);
    }

    Ok(())
}
