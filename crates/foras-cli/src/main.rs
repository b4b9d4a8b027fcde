//! Foras command-line compression tool.
//!
//! ## Usage
//!
//! ```bash
//! # Compress (writes infile.hc unless -o is given)
//! foras -c input.txt
//!
//! # Decompress
//! foras -d -o output.txt input.txt.hc
//!
//! # Compress with timing and ratio report
//! foras -c -v -l 9 input.txt
//! ```
//!
//! Exit codes: 0 success, 2 bad arguments, 3 I/O failure,
//! 4 compression/decompression failure.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgGroup, Parser};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use foras_core::{
    Algorithm, CompressionLevel, CompressionStats, Compressor, Decompressor, Error, Result,
};
use foras_huffman::HuffmanCodec;

const EXIT_IO: u8 = 3;
const EXIT_CODEC: u8 = 4;

#[derive(Parser, Debug)]
#[command(name = "foras")]
#[command(author = "Daemoniorum LLC")]
#[command(version)]
#[command(about = "Huffman compression tool", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["compress", "decompress"])))]
struct Args {
    /// Compress the input file
    #[arg(short = 'c')]
    compress: bool,

    /// Decompress the input file
    #[arg(short = 'd')]
    decompress: bool,

    /// Compression level (accepted for compatibility; Huffman output is
    /// level-independent)
    #[arg(short = 'l', value_parser = clap::value_parser!(i32).range(1..=9))]
    level: Option<i32>,

    /// Print timing and size information
    #[arg(short = 'v')]
    verbose: bool,

    /// Output file (default: input file plus ".hc" or ".hd")
    #[arg(short = 'o')]
    output: Option<PathBuf>,

    /// Input file
    infile: PathBuf,
}

struct Report {
    stats: CompressionStats,
    outfile: PathBuf,
}

fn run(args: &Args) -> Result<Report> {
    let input = fs::read(&args.infile)?;
    let started = Instant::now();

    let level = args
        .level
        .map(CompressionLevel::from_level)
        .unwrap_or_default();
    let codec = HuffmanCodec::with_level(level);

    let (output, outfile) = if args.compress {
        let compressed = codec.compress(&input)?;
        let outfile = args
            .output
            .clone()
            .unwrap_or_else(|| default_outfile(&args.infile, "hc"));
        (compressed, outfile)
    } else {
        let decompressed = codec.decompress(&input)?;
        let outfile = args
            .output
            .clone()
            .unwrap_or_else(|| default_outfile(&args.infile, "hd"));
        (decompressed, outfile)
    };

    let elapsed_us = started.elapsed().as_micros() as u64;
    debug!(outfile = %outfile.display(), bytes = output.len(), "writing output");
    fs::write(&outfile, &output)?;

    // Report sizes as original/compressed regardless of direction, so the
    // ratio reads the same way for both.
    let (original, compressed) = if args.compress {
        (input.len(), output.len())
    } else {
        (output.len(), input.len())
    };

    Ok(Report {
        stats: CompressionStats::from_operation(Algorithm::Huffman, original, compressed, elapsed_us),
        outfile,
    })
}

fn default_outfile(infile: &PathBuf, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", infile.display(), suffix))
}

fn print_report(args: &Args, report: &Report) {
    let stats = &report.stats;
    let direction = if args.compress {
        "compressed"
    } else {
        "decompressed"
    };
    println!(
        "{} {} -> {}",
        direction,
        args.infile.display(),
        report.outfile.display()
    );
    println!(
        "  {} -> {} bytes (ratio {:.3}x, saved {:.1}%)",
        stats.original_size,
        stats.compressed_size,
        stats.ratio().ratio(),
        stats.savings_percent()
    );
    println!(
        "  {:.3} ms, {:.1} MB/s",
        stats.time_us as f64 / 1000.0,
        stats.throughput_mbs()
    );
}

fn exit_code(err: &Error) -> u8 {
    match err {
        Error::Io(_) => EXIT_IO,
        _ => EXIT_CODEC,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match run(&args) {
        Ok(report) => {
            if args.verbose {
                print_report(&args, &report);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("foras: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}
