//! Ranks a corpus of structured documents against free-text queries.
//!
//! Documents arrive as parsed markup trees. Annotation-tagged text and
//! block-tagged text become two weighted sections; the corpus build derives
//! weighted TF, IDF and TF-IDF tables; searches score every document with
//! BM25.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod extract;
pub mod markup;
pub mod query;
pub mod rank;
pub mod stats;
pub mod tokenizer;

pub type TermId = u32;
pub type DocId = u32;

pub use config::{Bm25Params, EngineConfig, TagRules};
pub use corpus::{Corpus, Document, Section, SectionKind};
pub use engine::SearchEngine;
pub use error::{Error, Result};
pub use markup::{JsonTreeParser, MarkupParser, Node};
pub use rank::SearchHit;
pub use stats::{StatsSnapshot, TermStats};
