use crate::index::InvertedIndex;
use anyhow::{bail, Context, Result};
use ignore::WalkBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Summary of one ingestion run.
#[derive(Debug, Clone)]
pub struct IngestStats {
    pub files_indexed: usize,
    pub files_skipped: usize,
    pub elapsed: Duration,
}

/// Recursively ingest every regular file under `root` into `index`.
///
/// Files are read and inserted on a bounded rayon pool of `threads` workers
/// (0 means rayon's CPU-count default). The call returns only after every
/// submitted read+insert has completed, so a subsequent search always sees
/// the fully populated index.
///
/// An inaccessible `root` is fatal and reported to the caller before any
/// worker starts. A single unreadable file is not: it is reported on
/// stderr, counted in [`IngestStats::files_skipped`], and ingestion of the
/// remaining files continues.
pub fn load_files(
    index: &InvertedIndex,
    root: &Path,
    threads: usize,
    quiet: bool,
) -> Result<IngestStats> {
    let meta = root
        .metadata()
        .with_context(|| format!("cannot read search root {}", root.display()))?;
    if !meta.is_dir() {
        bail!("search root {} is not a directory", root.display());
    }

    let start = Instant::now();

    // Phase 1: collect every regular file. Standard filters are disabled so
    // hidden files and gitignored files are indexed like any other text.
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let files: Vec<PathBuf> = walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .collect();

    let progress = if quiet {
        None
    } else {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░  "),
        );
        pb.set_message("Indexing files...");
        Some(pb)
    };

    // Phase 2: read and insert on a fixed-size worker pool. `for_each`
    // joins all workers before returning; completion is never time-bounded.
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("failed to build ingestion thread pool")?;

    let indexed = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);

    pool.install(|| {
        files.par_iter().for_each(|path| {
            match fs::read_to_string(path) {
                Ok(content) => {
                    index.insert(&path.to_string_lossy(), &content);
                    indexed.fetch_add(1, Ordering::Relaxed);
                }
                Err(err) => {
                    skipped.fetch_add(1, Ordering::Relaxed);
                    eprintln!("sift: skipping {}: {}", path.display(), err);
                }
            }
            if let Some(ref pb) = progress {
                pb.inc(1);
            }
        });
    });

    let stats = IngestStats {
        files_indexed: indexed.load(Ordering::Relaxed),
        files_skipped: skipped.load(Ordering::Relaxed),
        elapsed: start.elapsed(),
    };

    if let Some(pb) = progress {
        pb.finish_with_message(format!("Indexed {} files", stats.files_indexed));
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn missing_root_is_fatal() {
        let index = InvertedIndex::new();
        let missing = std::env::temp_dir().join("sift_no_such_dir_48151623");
        assert!(load_files(&index, &missing, 0, true).is_err());
    }

    #[test]
    fn file_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "not a directory").unwrap();

        let index = InvertedIndex::new();
        assert!(load_files(&index, &file, 0, true).is_err());
    }

    #[test]
    fn ingests_every_file_before_returning() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.txt"), "Content of file 1").unwrap();
        fs::write(dir.path().join("two.txt"), "Content of file 2").unwrap();

        let index = InvertedIndex::new();
        let stats = load_files(&index, dir.path(), 4, true).unwrap();

        assert_eq!(stats.files_indexed, 2);
        assert_eq!(stats.files_skipped, 0);
        assert_eq!(index.search(&terms(&["content"])).len(), 2);
        assert_eq!(index.search(&terms(&["file"])).len(), 2);
    }

    #[test]
    fn walks_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.txt"), "alpha").unwrap();
        fs::write(dir.path().join("a/mid.txt"), "alpha beta").unwrap();
        fs::write(dir.path().join("a/b/deep.txt"), "alpha beta gamma").unwrap();

        let index = InvertedIndex::new();
        let stats = load_files(&index, dir.path(), 0, true).unwrap();

        assert_eq!(stats.files_indexed, 3);
        assert_eq!(index.search(&terms(&["alpha"])).len(), 3);
        assert_eq!(index.search(&terms(&["gamma"])).len(), 1);
    }

    #[test]
    fn identifiers_are_the_ingested_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie.txt");
        fs::write(&path, "romantic comedy").unwrap();

        let index = InvertedIndex::new();
        load_files(&index, dir.path(), 0, true).unwrap();

        let result = index.search(&terms(&["romantic"]));
        assert!(result.contains(&path.to_string_lossy().into_owned()));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_is_skipped_not_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ok.txt"), "readable content").unwrap();
        let locked = dir.path().join("locked.txt");
        fs::write(&locked, "secret").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read(&locked).is_ok() {
            // Running as root, permissions are not enforced.
            return;
        }

        let index = InvertedIndex::new();
        let stats = load_files(&index, dir.path(), 0, true).unwrap();

        assert_eq!(stats.files_indexed, 1);
        assert_eq!(stats.files_skipped, 1);
        assert_eq!(index.search(&terms(&["readable"])).len(), 1);
        assert!(index.search(&terms(&["secret"])).is_empty());

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
    }
}
