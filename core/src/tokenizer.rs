use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALPHABETIC: Regex = Regex::new(r"[^a-zA-Z]+").expect("valid regex");
}

/// Tokenize text into lowercase alphabetic terms.
///
/// The text is lowercased and trimmed, then split on every run of characters
/// outside `a-zA-Z`. Empty pieces are dropped, so punctuation-only or
/// whitespace-only input yields no terms.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.to_lowercase();
    NON_ALPHABETIC
        .split(normalized.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
