//! Operation-counting benchmark for the nextcomb generators.
//!
//! Sweeps each variant over every subset size and prints the four counters.
//!
//! Run with: cargo run -p nextcomb-bench -- --length 12 --length 16
//! Or:       cargo run -p nextcomb-bench -- --config bench.toml
//!
//! Set `RUST_LOG=nextcomb_benchmark=debug` for per-subset progress lines.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use nextcomb::{run_benchmark, ConfigError, HarnessConfig, InputKind, TextReport, Variant};
use owo_colors::OwoColorize;

#[derive(Parser, Debug)]
#[command(
    name = "nextcomb-bench",
    version,
    about = "Counts the primitive operations of each next-combination variant"
)]
struct Cli {
    /// Harness configuration file; `.yaml`/`.yml` is read as YAML, anything else as TOML
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Sequence length to sweep (repeatable)
    #[arg(long = "length", value_name = "N")]
    lengths: Vec<usize>,

    /// Variant to run (repeatable): reversal_scan, visitor, gapped_rotation, linear_rotation
    #[arg(long = "variant", value_name = "NAME")]
    variants: Vec<Variant>,

    /// Draw each input from this many distinct values instead of using 0..n
    #[arg(long, value_name = "VALUES")]
    duplicates: Option<u32>,

    /// Seed for duplicate-valued input
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write one CSV row per subset size to FILE
    #[arg(long = "csv", value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    csv_path: Option<PathBuf>,

    /// Write a Markdown report to FILE
    #[arg(long = "markdown", value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    markdown_path: Option<PathBuf>,
}

impl Cli {
    // Flags given on the command line override the file.
    fn into_config(self) -> Result<HarnessConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => HarnessConfig::load(path)?,
            None => HarnessConfig::default(),
        };
        if !self.lengths.is_empty() {
            config = config.with_lengths(self.lengths);
        }
        if !self.variants.is_empty() {
            config = config.with_variants(self.variants);
        }
        if let Some(values) = self.duplicates {
            config = config.with_input(InputKind::Duplicates {
                values,
                seed: self.seed,
            });
        }
        if let Some(path) = self.csv_path {
            config = config.with_csv_path(path);
        }
        if let Some(path) = self.markdown_path {
            config = config.with_markdown_path(path);
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(err) => return fail(&err),
    };

    match run_benchmark(config) {
        Ok(suite) => {
            println!();
            print!("{}", TextReport::to_string(&suite));
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

fn fail(err: &dyn std::error::Error) -> ExitCode {
    eprintln!("{} {}", "error:".bright_red().bold(), err);
    ExitCode::FAILURE
}
