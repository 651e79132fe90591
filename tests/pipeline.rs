use std::collections::HashSet;

use wordbag::bow::{build_vectors, vectorize};
use wordbag::config::PipelineConfig;
use wordbag::matrix::Matrix;
use wordbag::pool::scan_documents;

fn config(max_chunk_size: usize, max_workers: usize) -> PipelineConfig {
    PipelineConfig {
        max_chunk_size,
        max_workers,
    }
}

#[test]
fn three_document_scenario() {
    let docs = [
        "This is a test document.",
        "This document is another test.",
        "A completely different document.",
    ];
    let bow = vectorize(&docs, &PipelineConfig::default()).unwrap();

    assert_eq!(bow.vocab.len(), 8);
    let sorted: Vec<String> = bow.vocab.sorted_tokens().into_iter().map(String::from).collect();
    assert_eq!(
        sorted,
        ["a", "another", "completely", "different", "document", "is", "test", "this"]
    );

    let sums: Vec<f64> = bow.vectors.iter().map(|v| v.iter().sum()).collect();
    assert_eq!(sums, [5.0, 5.0, 4.0]);

    for vector in &bow.vectors {
        assert_eq!(vector.len(), 8);
    }
}

#[test]
fn every_token_is_registered_exactly_once() {
    let docs: Vec<String> = (0..200)
        .map(|i| format!("doc{} alpha beta word{} word{}", i, i % 7, i % 13))
        .collect();
    let (vocab, doc_tokens, _stats) = scan_documents(&docs, &config(2, 4)).unwrap();

    // Completeness: every token of every document made it in.
    for tokens in &doc_tokens {
        for token in tokens.iter() {
            assert!(vocab.index_of(token).is_some(), "missing token {}", token);
        }
    }

    // Exactly once: distinct tokens and vocabulary size agree.
    let distinct: HashSet<&str> = doc_tokens
        .iter()
        .flat_map(|tokens| tokens.iter().map(|t| &**t))
        .collect();
    assert_eq!(vocab.len(), distinct.len());
}

#[test]
fn indices_form_a_dense_bijection() {
    let docs: Vec<String> = (0..50).map(|i| format!("w{} w{} shared", i, i * 2)).collect();
    let (vocab, _doc_tokens, _stats) = scan_documents(&docs, &config(3, 2)).unwrap();

    let tokens = vocab.sorted_tokens();
    let mut indices: Vec<u32> = tokens.iter().map(|t| vocab.index_of(t).unwrap()).collect();
    indices.sort_unstable();
    let expected: Vec<u32> = (0..tokens.len() as u32).collect();
    assert_eq!(indices, expected);
}

#[test]
fn vector_sums_match_document_lengths() {
    let docs: Vec<String> = (0..80)
        .map(|i| format!("some body of text number {} with repeats repeats", i))
        .collect();
    let bow = vectorize(&docs, &config(3, 3)).unwrap();
    for (tokens, vector) in bow.doc_tokens.iter().zip(&bow.vectors) {
        assert_eq!(vector.iter().sum::<f64>(), tokens.len() as f64);
    }
}

#[test]
fn worker_cap_is_never_exceeded_under_stress() {
    // Many one-token chunks force the submission path through the spawn
    // gate hundreds of times.
    let docs: Vec<String> = (0..500)
        .map(|i| format!("stress test input line {} {} {}", i, i % 11, i % 17))
        .collect();
    let cap = 3;
    let (_vocab, _doc_tokens, stats) = scan_documents(&docs, &config(1, cap)).unwrap();
    assert!(stats.spawned >= 1);
    assert!(
        stats.peak_live <= cap,
        "peak {} exceeded cap {}",
        stats.peak_live,
        cap
    );
}

#[test]
fn single_short_document_stays_on_one_worker() {
    // One chunk means one submission opportunity, so exactly one spawn.
    let docs = ["just a handful of tokens"];
    let (vocab, doc_tokens, stats) = scan_documents(&docs, &config(1000, 8)).unwrap();
    assert_eq!(doc_tokens.len(), 1);
    assert_eq!(vocab.len(), 5);
    assert_eq!(stats.spawned, 1);
    assert_eq!(stats.peak_live, 1);
}

#[test]
fn empty_document_list_yields_empty_outputs() {
    let docs: Vec<String> = Vec::new();
    let bow = vectorize(&docs, &PipelineConfig::default()).unwrap();
    assert!(bow.vocab.is_empty());
    assert!(bow.vectors.is_empty());
    assert_eq!(bow.stats.spawned, 0);
}

#[test]
fn blank_documents_get_zero_width_vectors() {
    let docs = ["", "   ", ".,"];
    let bow = vectorize(&docs, &PipelineConfig::default()).unwrap();
    assert!(bow.vocab.is_empty());
    assert_eq!(bow.vectors.len(), 3);
    for vector in &bow.vectors {
        assert!(vector.is_empty());
    }
}

#[test]
fn rebuilding_vectors_is_idempotent() {
    let docs = [
        "This is a test document.",
        "This document is another test.",
        "A completely different document.",
    ];
    let bow = vectorize(&docs, &config(2, 2)).unwrap();
    let rebuilt = build_vectors(&bow.vocab, &bow.doc_tokens);
    assert_eq!(bow.vectors, rebuilt);
}

#[test]
fn invalid_configuration_is_rejected_before_any_work() {
    let docs = ["some document"];
    assert!(scan_documents(&docs, &config(0, 2)).is_err());
    assert!(scan_documents(&docs, &config(100, 0)).is_err());
    assert!(vectorize(&docs, &config(0, 0)).is_err());
}

#[test]
fn vectors_assemble_into_a_docs_by_vocab_matrix() {
    let docs = [
        "This is a test document.",
        "This document is another test.",
        "A completely different document.",
    ];
    let bow = vectorize(&docs, &PipelineConfig::default()).unwrap();
    let counts = Matrix::from_rows(&bow.vectors).unwrap();
    assert_eq!(counts.rows(), 3);
    assert_eq!(counts.cols(), 8);

    // Term-document orientation is just the transpose.
    let term_doc = counts.transpose();
    assert_eq!(term_doc.rows(), 8);
    assert_eq!(term_doc.cols(), 3);
    for i in 0..counts.rows() {
        for j in 0..counts.cols() {
            assert_eq!(counts.get(i, j), term_doc.get(j, i));
        }
    }
}
