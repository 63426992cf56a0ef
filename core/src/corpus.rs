//! Document collection, per-document lengths and the corpus vocabulary.
//!
//! A [`Corpus`] is produced by a single build pass and is read-only afterward.

use crate::config::TagRules;
use crate::error::{Error, Result};
use crate::extract::{extract, Features};
use crate::markup::{MarkupParser, Node};
use crate::{DocId, TermId};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use walkdir::WalkDir;

pub const ANNOTATION_COEF: f64 = 3.0;
pub const MAIN_TEXT_COEF: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Annotation,
    Main,
}

impl SectionKind {
    pub fn coefficient(self) -> f64 {
        match self {
            SectionKind::Annotation => ANNOTATION_COEF,
            SectionKind::Main => MAIN_TEXT_COEF,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub words: Vec<String>,
}

impl Section {
    pub fn new(kind: SectionKind, words: Vec<String>) -> Self {
        Self { kind, words }
    }

    pub fn coefficient(&self) -> f64 {
        self.kind.coefficient()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Occurrence count of each distinct term, in first-seen order.
    pub fn term_counts(&self) -> Vec<(&str, usize)> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for w in &self.words {
            match index.get(w.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(w.as_str(), counts.len());
                    counts.push((w.as_str(), 1));
                }
            }
        }
        counts
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub annotation: Section,
    pub main: Section,
}

impl Document {
    pub fn new(name: impl Into<String>, features: Features) -> Self {
        Self {
            name: name.into(),
            annotation: Section::new(SectionKind::Annotation, features.annotation),
            main: Section::new(SectionKind::Main, features.main),
        }
    }

    /// Total token count over both sections, duplicates included.
    pub fn len(&self) -> usize {
        self.annotation.len() + self.main.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sections(&self) -> [&Section; 2] {
        [&self.annotation, &self.main]
    }
}

#[derive(Debug, Clone)]
pub struct Corpus {
    docs: Vec<Document>,
    by_name: HashMap<String, DocId>,
    doc_len: Vec<usize>,
    avg_len: f64,
    vocabulary: Vec<String>,
    dictionary: HashMap<String, TermId>,
}

impl Corpus {
    /// Build from already extracted documents. Fails on an empty set or on
    /// two documents sharing a name.
    pub fn from_documents(docs: Vec<Document>) -> Result<Self> {
        let mut by_name: HashMap<String, DocId> = HashMap::with_capacity(docs.len());
        for (i, d) in docs.iter().enumerate() {
            if by_name.insert(d.name.clone(), i as DocId).is_some() {
                return Err(Error::DuplicateDocument(d.name.clone()));
            }
        }

        let doc_len: Vec<usize> = docs.iter().map(Document::len).collect();
        let avg_len = mean_length(&doc_len).ok_or(Error::EmptyCorpus)?;

        let mut terms: BTreeSet<&str> = BTreeSet::new();
        for d in &docs {
            for section in d.sections() {
                terms.extend(section.words.iter().map(String::as_str));
            }
        }
        let vocabulary: Vec<String> = terms.into_iter().map(str::to_string).collect();
        let dictionary: HashMap<String, TermId> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i as TermId))
            .collect();

        tracing::info!(num_docs = docs.len(), num_terms = vocabulary.len(), avg_len, "corpus built");
        Ok(Self { docs, by_name, doc_len, avg_len, vocabulary, dictionary })
    }

    /// Extract features from each named tree, in the order given.
    pub fn from_trees<I, S>(trees: I, rules: &TagRules) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Node)>,
        S: Into<String>,
    {
        let docs = trees
            .into_iter()
            .map(|(name, tree)| {
                let doc = Document::new(name, extract(&tree, rules));
                tracing::debug!(doc = %doc.name, annotation = doc.annotation.len(), main = doc.main.len(), "extracted");
                doc
            })
            .collect();
        Self::from_documents(docs)
    }

    /// Parse every file in `dir` (non-recursive) carrying the parser's
    /// extension, in file-name order. Any parse failure aborts the build.
    pub fn from_dir<P>(dir: &Path, parser: &P, rules: &TagRules) -> Result<Self>
    where
        P: MarkupParser + ?Sized,
    {
        let mut trees: Vec<(String, Node)> = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry?;
            let p = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if p.extension().and_then(|s| s.to_str()) != Some(parser.extension()) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            trees.push((name, parser.parse(p)?));
        }
        tracing::info!(dir = %dir.display(), files = trees.len(), "parsed documents");
        Self::from_trees(trees, rules)
    }

    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    pub fn document(&self, id: DocId) -> &Document {
        &self.docs[id as usize]
    }

    pub fn id_of(&self, name: &str) -> Option<DocId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Always false for a successfully built corpus.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn doc_len(&self, id: DocId) -> usize {
        self.doc_len[id as usize]
    }

    pub fn doc_lengths(&self) -> &[usize] {
        &self.doc_len
    }

    pub fn avg_len(&self) -> f64 {
        self.avg_len
    }

    /// Distinct terms across all sections, sorted.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.dictionary.get(term).copied()
    }
}

/// Arithmetic mean of document lengths; `None` for an empty corpus.
pub fn mean_length(lengths: &[usize]) -> Option<f64> {
    if lengths.is_empty() {
        return None;
    }
    let total: usize = lengths.iter().sum();
    Some(total as f64 / lengths.len() as f64)
}
