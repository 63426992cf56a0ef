//! BM25 ranking over the dense term statistics.

use crate::config::Bm25Params;
use crate::corpus::Corpus;
use crate::query::QueryVector;
use crate::stats::TermStats;
use crate::{DocId, TermId};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub name: String,
    pub score: f64,
}

/// Contribution of one term to one document:
/// `idf * tf * (k1 + 1) / (tf + k1 * (1 - b + b * doc_len / avg_len))`.
pub fn bm25_term(idf: f64, tf: f64, doc_len: f64, avg_len: f64, params: Bm25Params) -> f64 {
    let Bm25Params { k1, b } = params;
    let num = idf * tf * (k1 + 1.0);
    let denom = tf + k1 * (1.0 - b + b * doc_len / avg_len);
    num / denom
}

/// Score every document against the query, highest first. The sort is
/// stable, so equal scores keep corpus order.
pub fn rank(query: &QueryVector, corpus: &Corpus, stats: &TermStats, params: Bm25Params) -> Vec<SearchHit> {
    // Terms outside the vocabulary never touch a score.
    let term_ids: Vec<TermId> = query.terms().filter_map(|t| corpus.term_id(t)).collect();
    let avg_len = corpus.avg_len();

    let mut hits: Vec<SearchHit> = corpus
        .documents()
        .iter()
        .enumerate()
        .map(|(i, doc)| {
            let doc_id = i as DocId;
            let doc_len = corpus.doc_len(doc_id) as f64;
            let mut score = 0.0;
            for &tid in &term_ids {
                score += bm25_term(stats.idf(tid), stats.tf(doc_id, tid), doc_len, avg_len, params);
            }
            SearchHit { name: doc.name.clone(), score }
        })
        .collect();

    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    hits
}
