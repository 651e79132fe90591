use itertools::Itertools;
use simple_error::SimpleError;

use crate::config::PipelineConfig;
use crate::pool::{scan_documents, PoolStats};
use crate::types::{DocTokens, DocVector};
use crate::vocab::Vocabulary;


/// Everything one pipeline run produces: the finalized vocabulary, the
/// retained per-document token sequences, one count vector per document
/// aligned by input order, and the pool bookkeeping.
pub struct BagOfWords {
    pub vocab: Vocabulary,
    pub doc_tokens: Vec<DocTokens>,
    pub vectors: Vec<DocVector>,
    pub stats: PoolStats,
}

/// The sequential phase. Runs strictly after the scan has drained: each
/// vector is allocated at the final vocabulary width and filled by index
/// lookup. A token missing from the vocabulary counts as nothing rather
/// than being treated as a fault.
pub fn build_vectors(vocab: &Vocabulary, doc_tokens: &[DocTokens]) -> Vec<DocVector> {
    let width = vocab.len();
    doc_tokens
        .iter()
        .map(|tokens| {
            let mut vector = vec![0.0f64; width];
            for token in tokens.iter() {
                if let Some(index) = vocab.index_of(token) {
                    vector[index as usize] += 1.0;
                }
            }
            vector
        })
        .collect_vec()
}

/// Whole pipeline: concurrent vocabulary scan, then the sequential
/// vector build against the finalized vocabulary.
pub fn vectorize<S: AsRef<str>>(
    documents: &[S],
    config: &PipelineConfig,
) -> Result<BagOfWords, SimpleError> {
    let (vocab, doc_tokens, stats) = scan_documents(documents, config)?;
    let vectors = build_vectors(&vocab, &doc_tokens);
    Ok(BagOfWords {
        vocab,
        doc_tokens,
        vectors,
        stats,
    })
}
