//! Shared utilities.
//!
//! - [`tokenizer`] - lowercase word extraction used by both ingestion and
//!   query normalization

pub mod tokenizer;

pub use tokenizer::*;
