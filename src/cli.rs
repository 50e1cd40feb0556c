// Idiomatic Rust CLI for fuzzyhash.
//
// Mirrors the reference implementation's command-line tool: hashing
// stdin/files by default, with explicit subcommands for comparison and
// for printing build constants.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueHint};

use crate::engine;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Context-triggered piecewise (fuzzy) hashing, ssdeep/SpamSum-compatible.
#[derive(Parser, Debug)]
#[command(
    name = "fuzzyhash",
    version,
    about = "Context-triggered piecewise hashing",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit machine-readable JSON instead of plain text.
    #[arg(long = "json", global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Compute the fuzzy hash of one or more inputs.
    Hash(HashArgs),
    /// Compare two fuzzy-hash digests and print their similarity score.
    Compare(CompareArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(clap::Args, Debug)]
struct HashArgs {
    /// Files to hash (default: read a single input from stdin).
    #[arg(value_hint = ValueHint::FilePath)]
    files: Vec<PathBuf>,

    /// Require input to be valid UTF-8 text; reject invalid encodings
    /// instead of hashing the raw bytes.
    #[arg(long)]
    text: bool,

    /// Hash files in parallel (requires the `parallel` feature).
    #[arg(long)]
    parallel: bool,
}

#[derive(clap::Args, Debug)]
struct CompareArgs {
    /// First digest string, or a path when `--file` is set.
    left: String,
    /// Second digest string, or a path when `--file` is set.
    right: String,
    /// Treat `left`/`right` as paths to files to hash before comparing.
    #[arg(long)]
    file: bool,
}

// ---------------------------------------------------------------------------
// Subcommand implementations
// ---------------------------------------------------------------------------

fn read_stdin_to_end(text: bool) -> Result<Vec<u8>, String> {
    let mut buf = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .map_err(|e| format!("stdin: {e}"))?;
    if text && std::str::from_utf8(&buf).is_err() {
        return Err("input is not valid UTF-8 text".to_string());
    }
    Ok(buf)
}

fn hash_one(path: &PathBuf, text: bool) -> Result<String, String> {
    if text {
        let data = std::fs::read(path).map_err(|e| format!("{}: {e}", path.display()))?;
        if std::str::from_utf8(&data).is_err() {
            return Err(format!("{}: not valid UTF-8 text", path.display()));
        }
    }
    engine::hash_from_file(path).map_err(|e| format!("{}: {e}", path.display()))
}

fn cmd_hash(args: &HashArgs, json: bool) -> i32 {
    if args.files.is_empty() {
        let data = match read_stdin_to_end(args.text) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("fuzzyhash: {e}");
                return 1;
            }
        };
        return match engine::hash(&data[..]) {
            Ok(digest) => {
                print_hash_result(None, &digest, json);
                0
            }
            Err(e) => {
                eprintln!("fuzzyhash: {e}");
                1
            }
        };
    }

    #[cfg(feature = "parallel")]
    let results: Vec<(PathBuf, Result<String, String>)> = if args.parallel {
        use rayon::prelude::*;
        args.files
            .par_iter()
            .map(|p| (p.clone(), hash_one(p, args.text)))
            .collect()
    } else {
        args.files
            .iter()
            .map(|p| (p.clone(), hash_one(p, args.text)))
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results: Vec<(PathBuf, Result<String, String>)> = args
        .files
        .iter()
        .map(|p| (p.clone(), hash_one(p, args.text)))
        .collect();

    let mut exit_code = 0;
    for (path, result) in results {
        match result {
            Ok(digest) => print_hash_result(Some(&path), &digest, json),
            Err(e) => {
                eprintln!("fuzzyhash: {e}");
                exit_code = 1;
            }
        }
    }
    exit_code
}

fn print_hash_result(path: Option<&PathBuf>, digest: &str, json: bool) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        let value = serde_json::json!({
            "path": path.map(|p| p.display().to_string()),
            "hash": digest,
        });
        let _ = writeln!(out, "{value}");
        return;
    }
    match path {
        Some(p) => {
            let _ = writeln!(out, "{digest},{}", p.display());
        }
        None => {
            let _ = writeln!(out, "{digest}");
        }
    }
}

fn cmd_compare(args: &CompareArgs, json: bool) -> i32 {
    let (left, right) = if args.file {
        let l = match engine::hash_from_file(&args.left) {
            Ok(h) => h,
            Err(e) => {
                eprintln!("fuzzyhash: {}: {e}", args.left);
                return 1;
            }
        };
        let r = match engine::hash_from_file(&args.right) {
            Ok(h) => h,
            Err(e) => {
                eprintln!("fuzzyhash: {}: {e}", args.right);
                return 1;
            }
        };
        (l, r)
    } else {
        (args.left.clone(), args.right.clone())
    };

    match engine::compare(&left, &right) {
        Ok(score) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if json {
                let value = serde_json::json!({ "score": score });
                let _ = writeln!(out, "{value}");
            } else {
                let _ = writeln!(out, "{score}");
            }
            0
        }
        Err(e) => {
            eprintln!("fuzzyhash: {e}");
            1
        }
    }
}

fn cmd_config() -> i32 {
    println!("block size minimum: {}", crate::hash::BLOCKSIZE_MIN);
    println!("spamsum length: {}", crate::hash::SPAMSUM_LENGTH);
    println!("rolling window: {}", crate::hash::rolling::ROLL_WINDOW);
    println!("parallel feature: {}", cfg!(feature = "parallel"));
    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Cmd::Hash(args) => cmd_hash(args, cli.json),
        Cmd::Compare(args) => cmd_compare(args, cli.json),
        Cmd::Config => cmd_config(),
    };

    process::exit(exit_code);
}

/// Parse `args` (excluding the program name) without running the command.
/// Exposed so fuzz targets can exercise the argument parser directly.
#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[&str]) -> bool {
    let argv: Vec<String> = std::iter::once("fuzzyhash".to_string())
        .chain(args.iter().map(|s| s.to_string()))
        .collect();
    Cli::try_parse_from(argv).is_ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let argv: Vec<String> = std::iter::once("fuzzyhash".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        Cli::try_parse_from(argv).expect("cli parse failed")
    }

    #[test]
    fn hash_subcommand_defaults() {
        let cli = parse(&["hash"]);
        match cli.command {
            Cmd::Hash(a) => {
                assert!(a.files.is_empty());
                assert!(!a.text);
            }
            _ => panic!("expected Hash"),
        }
    }

    #[test]
    fn hash_subcommand_with_files_and_text_flag() {
        let cli = parse(&["hash", "--text", "a.txt", "b.txt"]);
        match cli.command {
            Cmd::Hash(a) => {
                assert_eq!(a.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
                assert!(a.text);
            }
            _ => panic!("expected Hash"),
        }
    }

    #[test]
    fn compare_subcommand_maps_digests() {
        let cli = parse(&["compare", "3:AAA:BBB", "3:CCC:DDD"]);
        match cli.command {
            Cmd::Compare(a) => {
                assert_eq!(a.left, "3:AAA:BBB");
                assert_eq!(a.right, "3:CCC:DDD");
                assert!(!a.file);
            }
            _ => panic!("expected Compare"),
        }
    }

    #[test]
    fn compare_subcommand_file_flag() {
        let cli = parse(&["compare", "--file", "a.bin", "b.bin"]);
        match cli.command {
            Cmd::Compare(a) => assert!(a.file),
            _ => panic!("expected Compare"),
        }
    }

    #[test]
    fn config_command_maps() {
        assert!(matches!(parse(&["config"]).command, Cmd::Config));
    }

    #[test]
    fn global_json_and_verbose_flags() {
        let cli = parse(&["--json", "-v", "-v", "hash"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn fuzz_hook_rejects_unknown_subcommand() {
        assert!(!fuzz_try_parse_args(&["bogus-subcommand"]));
        assert!(fuzz_try_parse_args(&["hash"]));
    }
}
