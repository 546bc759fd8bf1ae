//! Command-line interface for scrawl
//! This binary scans scrawl files and prints the resulting token stream, for
//! inspecting how a renderer will see a given post.
//!
//! Usage:
//!   scrawl scan `<path>` [--flags `<mask>`] [--format `<format>`]

use clap::{Arg, Command};
use scrawl::{scan, Flags};

fn main() {
    let matches = Command::new("scrawl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting scrawl token streams")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("scan")
                .about("Scan a file and print its tokens")
                .arg(
                    Arg::new("path")
                        .help("Path to the scrawl file to scan")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("flags")
                        .long("flags")
                        .help("Feature flag mask as an integer (default: all families)")
                        .default_value("2047"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'lines')")
                        .default_value("lines"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("scan", scan_matches)) => {
            let path = scan_matches.get_one::<String>("path").unwrap();
            let flags = scan_matches.get_one::<String>("flags").unwrap();
            let format = scan_matches.get_one::<String>("format").unwrap();
            handle_scan_command(path, flags, format);
        }
        _ => unreachable!(),
    }
}

/// Handle the scan command
fn handle_scan_command(path: &str, flags: &str, format: &str) {
    let mask: u16 = flags.parse().unwrap_or_else(|_| {
        eprintln!("Error: --flags expects an integer mask, got '{flags}'");
        std::process::exit(1);
    });

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let tokens = scan(&source, Flags::from_bits_truncate(mask));

    match format {
        "json" => {
            let output = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        "lines" => {
            for token in &tokens {
                println!("{} {:?}", token.kind, token.raw);
            }
        }
        other => {
            eprintln!("Error: unknown format '{other}' (expected 'json' or 'lines')");
            std::process::exit(1);
        }
    }
}
