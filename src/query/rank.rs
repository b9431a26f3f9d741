use crate::index::InvertedIndex;
use rustc_hash::FxHashSet;

/// Order matching documents by descending query-term occurrence count,
/// ties broken by ascending identifier. The order is total, so repeated
/// calls over the same index and result set are identical.
pub fn rank(
    index: &InvertedIndex,
    results: &FxHashSet<String>,
    terms: &[String],
) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = results
        .iter()
        .map(|doc| (doc.clone(), index.count_occurrences(doc, terms)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}
