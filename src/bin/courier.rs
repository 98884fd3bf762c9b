//! Courier command-line interface
//!
//! Moves signed transactions over any text carrier: `encode` turns hex into
//! frame lines, `decode` turns received lines back into hex.

use anyhow::{Context, Result};
use courier::{DecodeReport, EncodeOptions};
use log::{info, warn};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Exit status for `decode --strict` when the payload is empty or truncated
const EXIT_INCOMPLETE: i32 = 2;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = courier::build_cli().get_matches();

    match matches.subcommand() {
        Some(("encode", sub_matches)) => handle_encode(sub_matches),
        Some(("decode", sub_matches)) => handle_decode(sub_matches),
        Some((cmd, _)) => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
        None => {
            eprintln!("Error: No command specified");
            eprintln!("\nUse 'courier --help' for usage information");
            std::process::exit(1);
        }
    }
}

fn handle_encode(matches: &clap::ArgMatches) -> Result<()> {
    let raw_hex = match matches.get_one::<String>("hex") {
        Some(hex) => hex.clone(),
        None => read_input(matches.get_one::<String>("input"))?,
    };
    let tx_hex = courier::normalize_hex(&raw_hex);

    let options = EncodeOptions::from_args(matches);
    let frames = courier::encode(&tx_hex, &options).context("Failed to encode transaction")?;

    let out: String = frames.iter().map(|frame| format!("{}\n", frame)).collect();
    write_output(matches.get_one::<String>("output"), &out)?;

    if let Some(path) = matches.get_one::<String>("output") {
        info!("Wrote {} frames to {}", frames.len(), path);
    }
    Ok(())
}

fn handle_decode(matches: &clap::ArgMatches) -> Result<()> {
    let text = read_input(matches.get_one::<String>("input"))?;
    let report = courier::decode_with_report(text.lines());
    report_summary(&report);

    let mut out = hex::encode(&report.payload);
    out.push('\n');
    write_output(matches.get_one::<String>("output"), &out)?;

    if let Some(path) = matches.get_one::<String>("output") {
        info!("Decoded transaction written to {}", path);
    }

    if matches.get_flag("strict") && (report.is_empty() || !report.is_complete()) {
        std::process::exit(EXIT_INCOMPLETE);
    }
    Ok(())
}

fn report_summary(report: &DecodeReport) {
    if report.is_empty() {
        warn!("No frames could be decoded");
    } else if report.is_complete() {
        info!("Decoded {}", report);
    } else {
        warn!("Decoded {}", report);
    }
}

/// Read a file, or all of stdin when no path is given
fn read_input(path: Option<&String>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(Path::new(path))
            .with_context(|| format!("Failed to read {}", path)),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Write to a file, or to stdout when no path is given
fn write_output(path: Option<&String>, contents: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(Path::new(path), contents)
            .with_context(|| format!("Failed to write {}", path)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write stdout")
        }
    }
}
