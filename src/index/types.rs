use crate::utils::tokenize;
use rustc_hash::{FxHashMap, FxHashSet, FxHasher};
use std::hash::{Hash, Hasher};
use std::sync::{PoisonError, RwLock};

/// Number of shards the token space is split across. Power of two so the
/// shard can be picked by masking the token hash.
const SHARD_COUNT: usize = 32;

type PostingMap = FxHashMap<String, FxHashSet<String>>;

/// In-memory inverted index: lowercase word token -> set of file paths
/// containing it.
///
/// The token space is sharded across independent maps so concurrent
/// ingestion workers contend per shard instead of on one global lock.
/// After ingestion the index is read-only; queries take read locks only
/// and always return caller-owned sets.
pub struct InvertedIndex {
    shards: Vec<RwLock<PostingMap>>,
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl InvertedIndex {
    pub fn new() -> Self {
        let shards = (0..SHARD_COUNT)
            .map(|_| RwLock::new(PostingMap::default()))
            .collect();
        Self { shards }
    }

    fn shard(&self, token: &str) -> &RwLock<PostingMap> {
        let mut hasher = FxHasher::default();
        token.hash(&mut hasher);
        &self.shards[(hasher.finish() as usize) & (SHARD_COUNT - 1)]
    }

    /// Tokenize `content` and record `doc_id` under every token.
    ///
    /// Safe to call concurrently from multiple ingestion workers; inserts
    /// for the same token serialize on that token's shard lock. Inserting
    /// the same (document, content) pair twice is a no-op: postings are
    /// sets, not multisets.
    pub fn insert(&self, doc_id: &str, content: &str) {
        for token in tokenize(content) {
            let mut shard = self
                .shard(&token)
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            shard.entry(token).or_default().insert(doc_id.to_string());
        }
    }

    /// AND-search: the set of documents containing every term.
    ///
    /// Terms are lowercased before lookup. An empty term list yields the
    /// empty set; a single term yields a copy of its posting set. For
    /// multiple terms the intersection starts from the rarest term, so the
    /// cost is bounded by its posting count, and short-circuits to empty
    /// as soon as any term is unindexed.
    pub fn search(&self, terms: &[String]) -> FxHashSet<String> {
        if terms.is_empty() {
            return FxHashSet::default();
        }

        let terms: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();

        let mut sized: Vec<(usize, &str)> = Vec::with_capacity(terms.len());
        for term in &terms {
            match self.posting_len(term) {
                Some(len) => sized.push((len, term)),
                None => return FxHashSet::default(),
            }
        }
        sized.sort_by_key(|&(len, _)| len);

        let mut result = self.posting_set(sized[0].1);
        for &(_, term) in &sized[1..] {
            if result.is_empty() {
                break;
            }
            result.retain(|doc| self.contains(term, doc));
        }
        result
    }

    /// Number of query terms (duplicates counted) whose posting set
    /// contains `doc_id`. Counts distinct-term matches per query-term
    /// occurrence, not raw frequency in the document text.
    pub fn count_occurrences(&self, doc_id: &str, terms: &[String]) -> usize {
        terms
            .iter()
            .filter(|term| self.contains(&term.to_lowercase(), doc_id))
            .count()
    }

    /// Number of distinct tokens in the index.
    pub fn token_count(&self) -> usize {
        self.shards
            .iter()
            .map(|s| s.read().unwrap_or_else(PoisonError::into_inner).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }

    fn posting_len(&self, term: &str) -> Option<usize> {
        let shard = self.shard(term).read().unwrap_or_else(PoisonError::into_inner);
        shard.get(term).map(|docs| docs.len())
    }

    fn posting_set(&self, term: &str) -> FxHashSet<String> {
        let shard = self.shard(term).read().unwrap_or_else(PoisonError::into_inner);
        shard.get(term).cloned().unwrap_or_default()
    }

    fn contains(&self, term: &str, doc_id: &str) -> bool {
        let shard = self.shard(term).read().unwrap_or_else(PoisonError::into_inner);
        shard.get(term).is_some_and(|docs| docs.contains(doc_id))
    }
}
