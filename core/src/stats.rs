//! Weighted term frequency, inverse document frequency and their product.
//!
//! Tables are dense: every (document, vocabulary term) pair has an entry,
//! zero when the term does not occur in the document. Lookups index the
//! tables directly, so an id outside the corpus is an invariant failure.

use crate::corpus::Corpus;
use crate::{DocId, TermId};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct TermStats {
    tf: Vec<Vec<f64>>,
    df: Vec<u32>,
    idf: Vec<f64>,
    tfidf: Vec<Vec<f64>>,
}

impl TermStats {
    pub fn compute(corpus: &Corpus) -> Self {
        let tf = weighted_tf(corpus);
        let df = document_frequency(&tf, corpus.vocabulary().len());
        let n_docs = corpus.len() as u32;
        let idfs: Vec<f64> = df.iter().map(|&d| idf(n_docs, d)).collect();
        let tfidf: Vec<Vec<f64>> = tf
            .iter()
            .map(|row| row.iter().zip(&idfs).map(|(t, i)| t * i).collect())
            .collect();
        tracing::debug!(num_docs = n_docs, num_terms = idfs.len(), "term statistics computed");
        Self { tf, df, idf: idfs, tfidf }
    }

    pub fn tf(&self, doc: DocId, term: TermId) -> f64 {
        self.tf[doc as usize][term as usize]
    }

    pub fn df(&self, term: TermId) -> u32 {
        self.df[term as usize]
    }

    pub fn idf(&self, term: TermId) -> f64 {
        self.idf[term as usize]
    }

    pub fn tfidf(&self, doc: DocId, term: TermId) -> f64 {
        self.tfidf[doc as usize][term as usize]
    }

    pub fn tf_row(&self, doc: DocId) -> &[f64] {
        &self.tf[doc as usize]
    }

    pub fn tfidf_row(&self, doc: DocId) -> &[f64] {
        &self.tfidf[doc as usize]
    }

    /// Name-keyed copy of all tables, ordered for stable output.
    pub fn snapshot(&self, corpus: &Corpus) -> StatsSnapshot {
        let vocab = corpus.vocabulary();
        let keyed = |row: &[f64]| -> BTreeMap<String, f64> {
            vocab.iter().cloned().zip(row.iter().copied()).collect()
        };
        let mut snap = StatsSnapshot {
            avg_len: corpus.avg_len(),
            ..Default::default()
        };
        for (i, doc) in corpus.documents().iter().enumerate() {
            snap.doc_len.insert(doc.name.clone(), corpus.doc_len(i as DocId));
            snap.tf.insert(doc.name.clone(), keyed(self.tf_row(i as DocId)));
            snap.tfidf.insert(doc.name.clone(), keyed(self.tfidf_row(i as DocId)));
        }
        for (t, term) in vocab.iter().enumerate() {
            snap.df.insert(term.clone(), self.df[t]);
            snap.idf.insert(term.clone(), self.idf[t]);
        }
        snap
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub avg_len: f64,
    pub doc_len: BTreeMap<String, usize>,
    pub df: BTreeMap<String, u32>,
    pub idf: BTreeMap<String, f64>,
    pub tf: BTreeMap<String, BTreeMap<String, f64>>,
    pub tfidf: BTreeMap<String, BTreeMap<String, f64>>,
}

/// `ln(n_docs / df)`, or 0 when no document holds the term.
pub fn idf(n_docs: u32, df: u32) -> f64 {
    if df == 0 {
        return 0.0;
    }
    (n_docs as f64 / df as f64).ln()
}

// Each section adds coefficient * count / doc_len for its terms.
fn weighted_tf(corpus: &Corpus) -> Vec<Vec<f64>> {
    let n_terms = corpus.vocabulary().len();
    let mut tf = vec![vec![0.0f64; n_terms]; corpus.len()];
    for (doc_id, doc) in corpus.documents().iter().enumerate() {
        let len = doc.len() as f64;
        let row = &mut tf[doc_id];
        for section in doc.sections() {
            let coef = section.coefficient();
            for (term, count) in section.term_counts() {
                let Some(tid) = corpus.term_id(term) else {
                    unreachable!("term {term:?} missing from vocabulary");
                };
                row[tid as usize] += coef * count as f64 / len;
            }
        }
    }
    tf
}

fn document_frequency(tf: &[Vec<f64>], n_terms: usize) -> Vec<u32> {
    let mut df = vec![0u32; n_terms];
    for row in tf {
        for (t, &w) in row.iter().enumerate() {
            if w != 0.0 {
                df[t] += 1;
            }
        }
    }
    df
}
