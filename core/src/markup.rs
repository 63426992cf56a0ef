//! Parsed markup tree consumed by the feature extractor.
//!
//! The markup grammar lives outside this crate. Any parser that can hand
//! back a [`Node`] tree plugs in through [`MarkupParser`]; [`JsonTreeParser`]
//! reads trees that were parsed elsewhere and serialized as JSON.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub value: Option<String>,
}

impl Node {
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self { tag: Some(tag.into()), children, value: None }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self { tag: None, children: Vec::new(), value: Some(value.into()) }
    }

    /// Text held by the first child, if that child is a text leaf.
    pub fn first_text(&self) -> Option<&str> {
        self.children.first().and_then(|c| c.value.as_deref())
    }
}

pub trait MarkupParser {
    /// File extension (without the dot) of documents this parser accepts.
    fn extension(&self) -> &str;

    fn parse(&self, path: &Path) -> Result<Node>;
}

#[derive(Debug, Clone)]
pub struct JsonTreeParser {
    extension: String,
}

impl Default for JsonTreeParser {
    fn default() -> Self {
        Self { extension: "json".into() }
    }
}

impl JsonTreeParser {
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self { extension: extension.into() }
    }
}

impl MarkupParser for JsonTreeParser {
    fn extension(&self) -> &str {
        &self.extension
    }

    fn parse(&self, path: &Path) -> Result<Node> {
        let f = File::open(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| Error::Parse { path: path.to_path_buf(), source: Box::new(e) })
    }
}
