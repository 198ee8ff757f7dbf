//! Example: Analyze many Base64 text files in parallel
//!
//! Usage:
//!   cargo run --release --example analyze_batch -- [--jobs N] [--json] <file1> <file2> ...
//!
//! Notes:
//! - Parallelism is across files. Each analysis is independent and single-threaded.
//! - Default workers: (available CPU threads - 1), keeping one core free for the system.

use rayon::prelude::*;
use std::env;
use std::fs;
use std::time::Instant;
use textwave::{analyze, is_blank, AnalysisResult};

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism().map(|v| v.get()).unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

struct ItemOut {
    path: String,
    report: Result<AnalysisResult, String>,
}

fn analyze_file(path: &str) -> Result<AnalysisResult, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("read failed: {e}"))?;
    let text = text.trim_end_matches(['\r', '\n']);
    if is_blank(text) {
        return Err("No text provided".to_string());
    }
    Ok(analyze(text))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut jobs: Option<usize> = None;
    let mut paths: Vec<String> = Vec::new();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--jobs" => {
                let v = args
                    .first()
                    .ok_or("--jobs requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
                jobs = Some(std::cmp::max(1, v));
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: analyze_batch [--jobs N] [--json] <file1> <file2> ...\n\
                     \n\
                     --jobs N   Parallel workers (default: CPU-1)\n\
                     --json     Emit one JSON object per line (JSONL)\n"
                );
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    if paths.is_empty() {
        eprintln!("ERROR: Provide at least one text file path. Use --help for usage.");
        std::process::exit(2);
    }

    let jobs = jobs.unwrap_or_else(default_jobs);
    eprintln!("Batch: {} files, jobs={}", paths.len(), jobs);

    let t0 = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    let outs: Vec<ItemOut> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| ItemOut {
                path: path.clone(),
                report: analyze_file(path),
            })
            .collect()
    });

    for (idx, o) in outs.iter().enumerate() {
        match (&o.report, json) {
            (Ok(report), true) => println!(
                "{{\"file\":{},\"report\":{}}}",
                serde_json::to_string(&o.path)?,
                serde_json::to_string(report)?
            ),
            (Err(e), true) => println!(
                "{{\"file\":{},\"error\":{}}}",
                serde_json::to_string(&o.path)?,
                serde_json::to_string(e)?
            ),
            (Ok(report), false) => println!(
                "[{}/{}] {}: valid={} bytes={} issues={}{}",
                idx + 1,
                outs.len(),
                o.path,
                report.valid,
                report.stats.decoded_bytes,
                report.issues.len(),
                report
                    .error
                    .as_deref()
                    .map(|e| format!(" error={e}"))
                    .unwrap_or_default()
            ),
            (Err(e), false) => println!("[{}/{}] {}: ERROR: {}", idx + 1, outs.len(), o.path, e),
        }
    }

    let valid = outs
        .iter()
        .filter(|o| matches!(&o.report, Ok(r) if r.valid))
        .count();
    eprintln!(
        "Done: valid={}/{} wall={:.0}ms",
        valid,
        outs.len(),
        t0.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
