//! `fc`-compatible command-line driver over the fcheck comparison engine.
//!
//! Options use the classic `fc.exe` syntax (`/B`, `-b`, `/20`, `/LB50`),
//! which is why argument handling is a small hand-rolled loop instead of a
//! declarative parser: slash-prefixed, digit-valued options fall outside
//! what conventional option grammars express.

use fcheck_common::{
    CompareConfig, CompareError, CompareMode, CompareOutcome, DiffBlock, DiffContext,
};
use fcheck_core::CompareEngine;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Exit code for syntax and usage errors; comparison errors use 2.
const EXIT_USAGE: i32 = -1;

struct CliOptions {
    config: CompareConfig,
    path_a: PathBuf,
    path_b: PathBuf,
}

fn print_usage() {
    println!("Usage: fcheck [options] file1 file2");
    println!("Options:");
    println!("  /B    Binary comparison");
    println!("  /C    Case-insensitive comparison");
    println!("  /W    Ignore whitespace differences");
    println!("  /L    ASCII text comparison");
    println!("  /N    Show line numbers in text mode");
    println!("  /T    Do not expand tabs");
    println!("  /U    Unicode text comparison");
    println!("  /nnnn Set resync line threshold (default 2)");
    println!("  /LBn  Set internal buffer size for text lines (default 100)");
    println!("(If neither L, B nor U is specified, auto-detect is used)");
}

fn parse_numeric_option(text: &str) -> Result<u32, String> {
    match text.parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(format!("Invalid numeric option: {}", text)),
    }
}

/// Parse the argument list (without the program name) into a configuration
/// and the two file paths. All arguments before the final two must be
/// options prefixed with `/` or `-`; option letters are case-insensitive.
fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    if args.len() < 2 {
        return Err("Two file arguments are required".to_string());
    }

    let mut config = CompareConfig::default();

    for option in &args[..args.len() - 2] {
        let body = option
            .strip_prefix('/')
            .or_else(|| option.strip_prefix('-'))
            .ok_or_else(|| format!("Invalid argument: {}", option))?;

        if body.is_empty() {
            return Err(format!("Invalid option: {}", option));
        }

        if body.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            config.resync_lines = parse_numeric_option(body)?;
        } else if body.len() > 2 && body.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("LB")) {
            config.buffer_lines = parse_numeric_option(&body[2..])?;
        } else if let [letter] = body.as_bytes() {
            match letter.to_ascii_uppercase() {
                b'B' => config.mode = CompareMode::Binary,
                b'C' => config.ignore_case = true,
                b'W' => config.ignore_whitespace = true,
                b'L' => config.mode = CompareMode::TextAscii,
                b'N' => config.show_line_numbers = true,
                b'T' => config.raw_tabs = true,
                b'U' => config.mode = CompareMode::TextUnicode,
                _ => return Err(format!("Invalid option: {}", option)),
            }
        } else {
            return Err(format!("Invalid option: {}", option));
        }
    }

    Ok(CliOptions {
        config,
        path_a: PathBuf::from(&args[args.len() - 2]),
        path_b: PathBuf::from(&args[args.len() - 1]),
    })
}

/// Print one difference in classic `fc` style.
fn print_block(context: &DiffContext<'_>, block: &DiffBlock, show_line_numbers: bool) {
    match *block {
        DiffBlock::Lines {
            kind: _,
            start_a,
            end_a,
            start_b,
            end_b,
        } => {
            let lines_a = context.lines_a.unwrap_or(&[]);
            let lines_b = context.lines_b.unwrap_or(&[]);

            println!("***** {}", context.path_a.display());
            print_side(lines_a, start_a, end_a, show_line_numbers);
            println!("***** {}", context.path_b.display());
            print_side(lines_b, start_b, end_b, show_line_numbers);
            println!("*****");
        }
        DiffBlock::Bytes {
            offset,
            byte_a,
            byte_b,
        } => {
            println!("{:08X}: {:02X} {:02X}", offset, byte_a, byte_b);
        }
        DiffBlock::Size { size_a, size_b } => {
            if size_a > size_b {
                println!(
                    "FC: {} longer than {}",
                    context.path_a.display(),
                    context.path_b.display()
                );
            } else {
                println!(
                    "FC: {} shorter than {}",
                    context.path_a.display(),
                    context.path_b.display()
                );
            }
        }
    }
}

/// Print one file's share of a diff block, bracketed fc-style by the last
/// matching line before it and the first matching line after it.
fn print_side(lines: &[fcheck_common::Line], start: usize, end: usize, show_line_numbers: bool) {
    if start > 0 {
        print_line(start - 1, lines[start - 1].text(), show_line_numbers);
    }
    for (offset, line) in lines[start..end].iter().enumerate() {
        print_line(start + offset, line.text(), show_line_numbers);
    }
    if end < lines.len() {
        print_line(end, lines[end].text(), show_line_numbers);
    }
}

fn print_line(index: usize, text: &[u8], show_line_numbers: bool) {
    let text = String::from_utf8_lossy(text);
    if show_line_numbers {
        println!("{}:  {}", index + 1, text);
    } else {
        println!("{}", text);
    }
}

fn main() {
    // Diagnostics go to stderr so comparison output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            print_usage();
            std::process::exit(EXIT_USAGE);
        }
    };

    println!(
        "Comparing files {} and {}",
        options.path_a.display(),
        options.path_b.display()
    );

    let show_line_numbers = options.config.show_line_numbers;
    let engine = CompareEngine::with_config(options.config);

    let result = engine.compare(&options.path_a, &options.path_b, |context, block| {
        print_block(context, block, show_line_numbers)
    });

    match result {
        Ok(CompareOutcome::Identical) => {
            println!("FC: no differences encountered");
            std::process::exit(0);
        }
        Ok(CompareOutcome::Different) => std::process::exit(1),
        Err(CompareError::InvalidParameter(message)) => {
            error!("Invalid parameter: {}", message);
            std::process::exit(EXIT_USAGE);
        }
        Err(err) => {
            error!("Error during comparison: {}", err);
            std::process::exit(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_with_two_files() {
        let options = parse_args(&args(&["a.txt", "b.txt"])).unwrap();
        assert_eq!(options.config.mode, CompareMode::Auto);
        assert_eq!(options.config.resync_lines, 2);
        assert_eq!(options.config.buffer_lines, 100);
        assert_eq!(options.path_a, PathBuf::from("a.txt"));
        assert_eq!(options.path_b, PathBuf::from("b.txt"));
    }

    #[test]
    fn too_few_arguments() {
        assert!(parse_args(&args(&["only.txt"])).is_err());
        assert!(parse_args(&args(&[])).is_err());
    }

    #[test]
    fn mode_options() {
        let options = parse_args(&args(&["/B", "a", "b"])).unwrap();
        assert_eq!(options.config.mode, CompareMode::Binary);
        let options = parse_args(&args(&["/L", "a", "b"])).unwrap();
        assert_eq!(options.config.mode, CompareMode::TextAscii);
        let options = parse_args(&args(&["/U", "a", "b"])).unwrap();
        assert_eq!(options.config.mode, CompareMode::TextUnicode);
    }

    #[test]
    fn flag_options() {
        let options = parse_args(&args(&["/C", "/W", "/N", "/T", "a", "b"])).unwrap();
        assert!(options.config.ignore_case);
        assert!(options.config.ignore_whitespace);
        assert!(options.config.show_line_numbers);
        assert!(options.config.raw_tabs);
    }

    #[test]
    fn dash_prefix_and_lowercase_accepted() {
        let options = parse_args(&args(&["-b", "a", "b"])).unwrap();
        assert_eq!(options.config.mode, CompareMode::Binary);
        let options = parse_args(&args(&["-c", "a", "b"])).unwrap();
        assert!(options.config.ignore_case);
    }

    #[test]
    fn numeric_resync_option() {
        let options = parse_args(&args(&["/4", "a", "b"])).unwrap();
        assert_eq!(options.config.resync_lines, 4);
        let options = parse_args(&args(&["/1000", "a", "b"])).unwrap();
        assert_eq!(options.config.resync_lines, 1000);
    }

    #[test]
    fn buffer_lines_option() {
        let options = parse_args(&args(&["/LB50", "a", "b"])).unwrap();
        assert_eq!(options.config.buffer_lines, 50);
        let options = parse_args(&args(&["-lb200", "a", "b"])).unwrap();
        assert_eq!(options.config.buffer_lines, 200);
    }

    #[test]
    fn invalid_numeric_options_rejected() {
        assert!(parse_args(&args(&["/0", "a", "b"])).is_err());
        assert!(parse_args(&args(&["/2x", "a", "b"])).is_err());
        assert!(parse_args(&args(&["/LB0", "a", "b"])).is_err());
        assert!(parse_args(&args(&["/LB", "a", "b"])).is_err());
    }

    #[test]
    fn unknown_options_rejected() {
        assert!(parse_args(&args(&["/Z", "a", "b"])).is_err());
        assert!(parse_args(&args(&["/XY", "a", "b"])).is_err());
        assert!(parse_args(&args(&["notanoption", "a", "b"])).is_err());
    }

    #[test]
    fn later_mode_option_wins() {
        let options = parse_args(&args(&["/L", "/B", "a", "b"])).unwrap();
        assert_eq!(options.config.mode, CompareMode::Binary);
    }
}
