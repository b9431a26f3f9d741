//! Result printing for simple and verbose search modes.

use crate::index::InvertedIndex;
use crate::query::{highlight_boundaries, runs, snippet};
use rustc_hash::FxHashSet;
use std::io::{self, Write};
use std::time::Duration;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn path_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Magenta));
    spec
}

fn count_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Green));
    spec
}

fn highlight_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Yellow)).set_bold(true);
    spec
}

fn print_header(
    stdout: &mut StandardStream,
    result_count: usize,
    query: &str,
) -> io::Result<()> {
    write!(stdout, "Found ")?;
    stdout.set_color(&count_spec())?;
    write!(stdout, "{result_count}")?;
    stdout.reset()?;
    writeln!(stdout, " result(s) for \"{query}\".")?;
    Ok(())
}

fn print_elapsed(stdout: &mut StandardStream, elapsed: Duration) -> io::Result<()> {
    writeln!(
        stdout,
        "Search time: {:.4} milliseconds",
        elapsed.as_secs_f64() * 1000.0
    )
}

/// Print an unordered result set: header, up to `limit` paths, elapsed
/// time. Paths are emitted in sorted order so output is reproducible.
pub fn print_simple(
    results: &FxHashSet<String>,
    query: &str,
    limit: usize,
    elapsed: Duration,
    color: ColorChoice,
) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color);
    print_header(&mut stdout, results.len(), query)?;

    let mut paths: Vec<&String> = results.iter().collect();
    paths.sort();
    for path in paths.into_iter().take(limit) {
        stdout.set_color(&path_spec())?;
        writeln!(stdout, "{path}")?;
        stdout.reset()?;
    }

    print_elapsed(&mut stdout, elapsed)
}

/// Print ranked results with occurrence counts and highlighted snippets.
///
/// Documents are ordered by descending occurrence count, ties by ascending
/// path; each snippet is re-read from disk and query terms inside it are
/// highlighted as merged runs.
pub fn print_verbose(
    index: &InvertedIndex,
    results: &FxHashSet<String>,
    query: &str,
    terms: &[String],
    limit: usize,
    elapsed: Duration,
    color: ColorChoice,
) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color);
    print_header(&mut stdout, results.len(), query)?;

    let ranked = crate::query::rank(index, results, terms);
    for (path, count) in ranked.into_iter().take(limit) {
        writeln!(stdout)?;
        write!(stdout, "File: ")?;
        stdout.set_color(&path_spec())?;
        writeln!(stdout, "{path}")?;
        stdout.reset()?;

        write!(stdout, "Occurrences: ")?;
        stdout.set_color(&count_spec())?;
        writeln!(stdout, "{count}")?;
        stdout.reset()?;

        let text = snippet(&path, terms);
        write!(stdout, "Snippet: ")?;
        let boundaries = highlight_boundaries(&text, terms);
        for run in runs(&text, &boundaries) {
            if run.highlighted {
                stdout.set_color(&highlight_spec())?;
                write!(stdout, "{}", run.text)?;
                stdout.reset()?;
            } else {
                write!(stdout, "{}", run.text)?;
            }
        }
        writeln!(stdout)?;
    }

    writeln!(stdout)?;
    print_elapsed(&mut stdout, elapsed)
}
