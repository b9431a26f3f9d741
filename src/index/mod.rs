//! The inverted index and its population from disk.

pub mod build;
pub mod types;

pub use build::{load_files, IngestStats};
pub use types::InvertedIndex;
