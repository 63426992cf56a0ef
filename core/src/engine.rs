use crate::config::EngineConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::markup::{MarkupParser, Node};
use crate::query;
use crate::rank::{rank, SearchHit};
use crate::stats::{StatsSnapshot, TermStats};
use std::path::Path;

/// A corpus and its term statistics, built once and then only read.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: EngineConfig,
    corpus: Corpus,
    stats: TermStats,
}

impl SearchEngine {
    pub fn build(corpus: Corpus, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let stats = TermStats::compute(&corpus);
        tracing::info!(num_docs = corpus.len(), num_terms = corpus.vocabulary().len(), "search engine ready");
        Ok(Self { config, corpus, stats })
    }

    pub fn from_trees<I, S>(trees: I, config: EngineConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Node)>,
        S: Into<String>,
    {
        config.validate()?;
        let corpus = Corpus::from_trees(trees, &config.tags)?;
        Self::build(corpus, config)
    }

    pub fn from_dir<P>(dir: &Path, parser: &P, config: EngineConfig) -> Result<Self>
    where
        P: MarkupParser + ?Sized,
    {
        config.validate()?;
        let corpus = Corpus::from_dir(dir, parser, &config.tags)?;
        Self::build(corpus, config)
    }

    /// Rank every document against `query`. Queries without alphabetic
    /// terms return no hits at all.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let Some(qv) = query::vectorize(query, &self.corpus, &self.stats) else {
            tracing::debug!(query, "no query terms");
            return Vec::new();
        };
        let hits = rank(&qv, &self.corpus, &self.stats, self.config.bm25);
        tracing::debug!(query, terms = qv.len(), hits = hits.len(), "search complete");
        hits
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn stats(&self) -> &TermStats {
        &self.stats
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        self.stats.snapshot(&self.corpus)
    }
}
