use crate::config::TagRules;
use crate::markup::Node;
use crate::tokenizer::tokenize;

/// Raw word lists pulled from one document tree. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    pub annotation: Vec<String>,
    pub main: Vec<String>,
}

/// Walk the tree depth-first, left to right, collecting words from every
/// annotation-tagged and block-tagged node.
///
/// Both tag checks run on every node, and nested marked nodes are visited
/// on their own, so text under overlapping markers lands in both lists.
pub fn extract(root: &Node, rules: &TagRules) -> Features {
    let mut features = Features::default();
    let mut stack: Vec<&Node> = vec![root];

    while let Some(node) = stack.pop() {
        if let Some(tag) = node.tag.as_deref() {
            if rules.is_annotation(tag) {
                features.annotation.extend(node_words(node));
            }
            if rules.is_block(tag) {
                features.main.extend(node_words(node));
            }
        }
        stack.extend(node.children.iter().rev());
    }

    features
}

fn node_words(node: &Node) -> Vec<String> {
    node.first_text().map(tokenize).unwrap_or_default()
}
