use docrank::{EngineConfig, Error, JsonTreeParser, Node, SearchEngine};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn bold(text: &str) -> Node {
    Node::element("BOLD", vec![Node::text(text)])
}

fn block(text: &str) -> Node {
    Node::element("BL", vec![Node::text(text)])
}

fn doc(children: Vec<Node>) -> Node {
    Node::element("DOC", children)
}

fn engine(trees: Vec<(&str, Node)>) -> SearchEngine {
    SearchEngine::from_trees(trees, EngineConfig::default()).unwrap()
}

fn write_tree(dir: &Path, name: &str, tree: &Node) {
    fs::write(dir.join(name), serde_json::to_vec(tree).unwrap()).unwrap();
}

fn score_of(hits: &[docrank::SearchHit], name: &str) -> f64 {
    hits.iter().find(|h| h.name == name).unwrap().score
}

#[test]
fn term_in_every_document_scores_zero() {
    let e = engine(vec![
        ("a.mml", doc(vec![bold("game play")])),
        ("b.mml", doc(vec![block("game game role")])),
    ]);
    let game = e.corpus().term_id("game").unwrap();
    assert!(e.stats().tf(0, game) > 0.0);
    assert!(e.stats().tf(1, game) > 0.0);
    assert_eq!(e.stats().idf(game), 0.0);

    let hits = e.search("game");
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|h| h.score == 0.0));
}

#[test]
fn unknown_term_scores_zero_everywhere() {
    let e = engine(vec![
        ("a.mml", doc(vec![bold("game play")])),
        ("b.mml", doc(vec![block("game game role")])),
        ("c.mml", doc(vec![block("class interface")])),
    ]);
    let hits = e.search("processor");
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|h| h.score == 0.0));
    // stable sort keeps corpus order on ties
    let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["a.mml", "b.mml", "c.mml"]);
}

#[test]
fn blank_queries_return_nothing() {
    let e = engine(vec![("a.mml", doc(vec![bold("game")]))]);
    assert!(e.search("").is_empty());
    assert!(e.search("   ").is_empty());
    assert!(e.search("?? 42").is_empty());
}

#[test]
fn bm25_ranking_matches_formula() {
    let e = engine(vec![
        ("a.mml", doc(vec![bold("game play")])),
        ("b.mml", doc(vec![block("game game role")])),
        ("c.mml", doc(vec![block("class interface")])),
    ]);
    let hits = e.search("Game");
    let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["a.mml", "b.mml", "c.mml"]);

    let (k1, b) = (2.0f64, 0.75f64);
    let idf = (3.0f64 / 2.0).ln();
    let avg = 7.0 / 3.0;
    let bm25 = |tf: f64, len: f64| idf * tf * (k1 + 1.0) / (tf + k1 * (1.0 - b + b * len / avg));

    assert!((score_of(&hits, "a.mml") - bm25(3.0 / 2.0, 2.0)).abs() < 1e-12);
    assert!((score_of(&hits, "b.mml") - bm25(2.0 / 3.0, 3.0)).abs() < 1e-12);
    assert_eq!(score_of(&hits, "c.mml"), 0.0);
}

#[test]
fn results_cover_corpus_in_non_increasing_order() {
    let e = engine(vec![
        ("a.mml", doc(vec![bold("role play"), block("character sheet")])),
        ("b.mml", doc(vec![block("game role role class")])),
        ("c.mml", doc(vec![bold("processor"), block("interface class")])),
        ("d.mml", doc(vec![block("game character")])),
    ]);
    for q in ["role", "class character", "game play processor", "interface"] {
        let hits = e.search(q);
        assert_eq!(hits.len(), 4, "query {q}");
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score), "query {q}");
        assert!(hits.iter().all(|h| h.score >= 0.0));
    }
}

#[test]
fn single_document_length_normalization_collapses() {
    let e = engine(vec![("only.mml", doc(vec![bold("game"), block("play role")]))]);
    let corpus = e.corpus();
    assert_eq!(corpus.avg_len(), corpus.doc_len(0) as f64);
    // one document: every term is in every document
    for hit in e.search("game role") {
        assert_eq!(hit.score, 0.0);
    }
}

#[test]
fn building_a_directory_twice_is_identical() {
    let dir = tempdir().unwrap();
    write_tree(dir.path(), "b.json", &doc(vec![block("game game role")]));
    write_tree(dir.path(), "a.json", &doc(vec![bold("game play")]));
    write_tree(dir.path(), "c.json", &doc(vec![bold("Class"), block("interface")]));
    fs::write(dir.path().join("notes.txt"), "not a document").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    write_tree(&dir.path().join("nested"), "d.json", &doc(vec![block("hidden")]));

    let parser = JsonTreeParser::default();
    let first = SearchEngine::from_dir(dir.path(), &parser, EngineConfig::default()).unwrap();
    let second = SearchEngine::from_dir(dir.path(), &parser, EngineConfig::default()).unwrap();

    let names: Vec<&str> = first.corpus().documents().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
    assert!(first.corpus().term_id("hidden").is_none());
    assert_eq!(first.snapshot(), second.snapshot());
    assert_eq!(first.search("game class"), second.search("game class"));
}

#[test]
fn custom_extension() {
    let dir = tempdir().unwrap();
    write_tree(dir.path(), "a.mml", &doc(vec![bold("game")]));
    write_tree(dir.path(), "b.json", &doc(vec![bold("role")]));
    let parser = JsonTreeParser::with_extension("mml");
    let e = SearchEngine::from_dir(dir.path(), &parser, EngineConfig::default()).unwrap();
    assert_eq!(e.corpus().len(), 1);
    assert_eq!(e.corpus().vocabulary(), &["game"]);
}

#[test]
fn empty_directory_fails_fast() {
    let dir = tempdir().unwrap();
    let err = SearchEngine::from_dir(dir.path(), &JsonTreeParser::default(), EngineConfig::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyCorpus));
}

#[test]
fn malformed_document_aborts_build() {
    let dir = tempdir().unwrap();
    write_tree(dir.path(), "a.json", &doc(vec![bold("game")]));
    fs::write(dir.path().join("b.json"), "{ broken").unwrap();
    let err = SearchEngine::from_dir(dir.path(), &JsonTreeParser::default(), EngineConfig::default()).unwrap_err();
    match err {
        Error::Parse { path, .. } => assert!(path.ends_with("b.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let res = SearchEngine::from_dir(&missing, &JsonTreeParser::default(), EngineConfig::default());
    assert!(matches!(res, Err(Error::Walk(_))));
}
