use crate::index::{DocId, InvertedIndex};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Document frequency used for query terms with no postings, so an unseen term
/// still gets a finite, nonzero idf instead of dividing by zero.
pub const DF_FLOOR: f64 = 0.5;
pub const DEFAULT_TOP_K: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult {
    pub doc_id: DocId,
    pub score: f64,
}

/// TF-IDF / cosine ranker over an immutable [`InvertedIndex`].
///
/// Document vectors only carry the dimensions of the query's terms; documents
/// are never compared on terms the query does not mention.
#[derive(Debug)]
pub struct SearchEngine {
    index: InvertedIndex,
    total_docs: usize,
}

#[derive(Default)]
struct DocAccumulator {
    dot: f64,
    norm_sq: f64,
}

impl SearchEngine {
    pub fn new(index: InvertedIndex) -> Self {
        let total_docs = index.num_docs();
        Self { index, total_docs }
    }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn total_docs(&self) -> usize { self.total_docs }

    /// The best `top_k` documents for `query`.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchResult> {
        let mut ranked = self.rank(query);
        ranked.truncate(top_k);
        ranked
    }

    /// Every document with a positive score, best first. Ties go to the lower doc_id.
    pub fn rank(&self, query: &str) -> Vec<SearchResult> {
        if self.total_docs == 0 { return Vec::new(); }

        let mut query_tf: BTreeMap<String, u32> = BTreeMap::new();
        for stem in self.index.normalizer().normalize(query) {
            *query_tf.entry(stem).or_insert(0) += 1;
        }
        if query_tf.is_empty() { return Vec::new(); }

        let n = self.total_docs as f64;
        let mut query_norm_sq = 0.0f64;
        let mut docs: HashMap<DocId, DocAccumulator> = HashMap::new();
        for (term, count) in &query_tf {
            let postings = self.index.postings(term);
            let df = (postings.len() as f64).max(DF_FLOOR);
            let idf = (n / df).log10();
            let w_q = log_tf(*count) * idf;
            query_norm_sq += w_q * w_q;

            for p in postings {
                let w_d = log_tf(p.term_frequency) * idf;
                let acc = docs.entry(p.doc_id).or_default();
                acc.dot += w_q * w_d;
                acc.norm_sq += w_d * w_d;
            }
        }

        let query_norm = query_norm_sq.sqrt();
        let mut ranked: Vec<SearchResult> = docs
            .into_iter()
            .map(|(doc_id, acc)| SearchResult { doc_id, score: cosine(acc.dot, query_norm, acc.norm_sq.sqrt()) })
            .filter(|r| r.score > 0.0)
            .collect();
        ranked.sort_by(compare_results);
        ranked
    }
}

fn log_tf(tf: u32) -> f64 {
    if tf == 0 { 0.0 } else { 1.0 + (tf as f64).log10() }
}

fn cosine(dot: f64, a_norm: f64, b_norm: f64) -> f64 {
    if a_norm == 0.0 || b_norm == 0.0 { 0.0 } else { dot / (a_norm * b_norm) }
}

/// Scores closer than this are ties; cosine scores lie in [0, 1].
const SCORE_RESOLUTION: f64 = 1e-12;

fn score_key(score: f64) -> i64 {
    (score / SCORE_RESOLUTION).round() as i64
}

/// Score descending, then doc_id ascending. Scores are compared at
/// [`SCORE_RESOLUTION`] so rounding noise between mathematically equal
/// cosines does not override the doc_id order.
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    score_key(b.score).cmp(&score_key(a.score)).then_with(|| a.doc_id.cmp(&b.doc_id))
}
