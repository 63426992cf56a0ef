use crate::corpus::Corpus;
use crate::stats::TermStats;
use crate::tokenizer::tokenize;

/// A query reduced to its distinct terms, each carrying
/// `frequency * IDF`. Terms outside the corpus vocabulary keep weight 0.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryVector {
    weights: Vec<(String, f64)>,
}

impl QueryVector {
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.weights.iter().map(|(t, _)| t.as_str())
    }

    pub fn weight(&self, term: &str) -> Option<f64> {
        self.weights.iter().find(|(t, _)| t == term).map(|&(_, w)| w)
    }

    pub fn weights(&self) -> &[(String, f64)] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Relative frequency of each distinct query term, in first-seen order.
/// Empty when the query holds no alphabetic terms.
pub fn term_frequencies(query: &str) -> Vec<(String, f64)> {
    let tokens = tokenize(query);
    let total = tokens.len() as f64;
    let mut freqs: Vec<(String, f64)> = Vec::new();
    for tok in tokens {
        match freqs.iter_mut().find(|(t, _)| *t == tok) {
            Some((_, n)) => *n += 1.0,
            None => freqs.push((tok, 1.0)),
        }
    }
    for (_, n) in freqs.iter_mut() {
        *n /= total;
    }
    freqs
}

/// Returns `None` for queries with no usable terms; such queries rank nothing.
pub fn vectorize(query: &str, corpus: &Corpus, stats: &TermStats) -> Option<QueryVector> {
    if query.trim().is_empty() {
        return None;
    }
    let freqs = term_frequencies(query);
    if freqs.is_empty() {
        return None;
    }
    let weights = freqs
        .into_iter()
        .map(|(term, f)| {
            let idf = corpus.term_id(&term).map_or(0.0, |tid| stats.idf(tid));
            (term, f * idf)
        })
        .collect();
    Some(QueryVector { weights })
}
