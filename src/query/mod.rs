//! Query-side operations over a populated index.
//!
//! - [`rank`] - occurrence-count ordering with deterministic tie-breaks
//! - [`snippet`] - first-matching-sentence extraction
//! - [`highlight`] - merged case-insensitive highlight spans

pub mod highlight;
pub mod rank;
pub mod snippet;

pub use highlight::{highlight, highlight_boundaries, runs, Run};
pub use rank::rank;
pub use snippet::{snippet, NO_PREVIEW};
