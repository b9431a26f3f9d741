use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use sift::index::{load_files, InvertedIndex};
use sift::output;
use sift::utils::tokenize;
use std::path::PathBuf;
use std::time::Instant;
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Local in-memory full-text search over a directory of text files")]
struct Cli {
    /// Search terms (AND semantics: every term must be present)
    #[arg(required = true)]
    terms: Vec<String>,

    /// Directory to ingest and search
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// Maximum number of results to display
    #[arg(short, long)]
    limit: Option<usize>,

    /// Show occurrence counts and highlighted snippets
    #[arg(short, long)]
    verbose: bool,

    /// Number of ingestion worker threads (0 = one per CPU)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// When to use colored output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let query = cli.terms.join(" ");
    let terms = tokenize(&query);
    if terms.is_empty() {
        bail!("search query contains no indexable words");
    }

    let index = InvertedIndex::new();
    let stats = load_files(&index, &cli.path, cli.threads, cli.quiet)?;
    if stats.files_skipped > 0 && !cli.quiet {
        eprintln!("({} file(s) could not be read)", stats.files_skipped);
    }

    let start = Instant::now();
    let results = index.search(&terms);
    let elapsed = start.elapsed();

    let limit = cli.limit.unwrap_or(usize::MAX);
    let color = cli.color.into();
    if cli.verbose {
        output::print_verbose(&index, &results, &query, &terms, limit, elapsed, color)?;
    } else {
        output::print_simple(&results, &query, limit, elapsed, color)?;
    }

    Ok(())
}
