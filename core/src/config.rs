//! Engine configuration: BM25 constants and the markup tags that delimit
//! document sections.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bm25Params {
    /// Term frequency saturation.
    pub k1: f64,
    /// Length normalization strength.
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 2.0, b: 0.75 }
    }
}

/// Tag names matched case-insensitively against markup nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagRules {
    pub annotation: String,
    pub block: String,
}

impl Default for TagRules {
    fn default() -> Self {
        Self { annotation: "BOLD".into(), block: "BL".into() }
    }
}

impl TagRules {
    pub fn is_annotation(&self, tag: &str) -> bool {
        tag.eq_ignore_ascii_case(&self.annotation)
    }

    pub fn is_block(&self, tag: &str) -> bool {
        tag.eq_ignore_ascii_case(&self.block)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub bm25: Bm25Params,
    pub tags: TagRules,
}

impl EngineConfig {
    /// Load a JSON config file. Missing fields fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let config: EngineConfig = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| Error::InvalidConfig(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// The BM25 denominator must stay positive for every document, including
    /// empty ones, which requires `k1 > 0` and `0 <= b < 1`.
    pub fn validate(&self) -> Result<()> {
        let Bm25Params { k1, b } = self.bm25;
        if !(k1.is_finite() && k1 > 0.0) {
            return Err(Error::InvalidConfig(format!("k1 must be a positive number, got {k1}")));
        }
        if !(0.0..1.0).contains(&b) {
            return Err(Error::InvalidConfig(format!("b must be in [0, 1), got {b}")));
        }
        if self.tags.annotation.trim().is_empty() || self.tags.block.trim().is_empty() {
            return Err(Error::InvalidConfig("section tag names must not be empty".into()));
        }
        Ok(())
    }
}
