//! # sift - Local Full-Text Directory Search
//!
//! sift recursively ingests a directory of text files into an in-memory
//! inverted index and answers multi-term AND queries with ranked,
//! highlighted snippets.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - The inverted index and its parallel population from disk
//! - [`query`] - Ranking, snippet extraction, and highlight merging
//! - [`output`] - Result formatting (simple and verbose modes)
//! - [`utils`] - Tokenization
//!
//! ## Quick Start
//!
//! ```no_run
//! use sift::index::build::load_files;
//! use sift::index::InvertedIndex;
//! use sift::utils::tokenize;
//! use std::path::Path;
//!
//! let index = InvertedIndex::new();
//! load_files(&index, Path::new("./docs"), 0, true).unwrap();
//!
//! let terms = tokenize("action movie");
//! let matches = index.search(&terms);
//! for path in matches {
//!     println!("{}", path);
//! }
//! ```
//!
//! ## Model
//!
//! The index maps each lowercase word token to the set of file paths that
//! contain it. It is populated once per run by a bounded rayon worker pool,
//! then read-only for the lifetime of the process. Queries intersect the
//! posting sets of every term, starting from the smallest set.

pub mod index;
pub mod output;
pub mod query;
pub mod utils;
