use std::sync::Arc;

use crate::types::{DocTokens, Token};


/// A bounded contiguous span of one document's token sequence, the unit
/// of work handed to a single worker. Holds a shared handle to the
/// document's tokens rather than a copy.
pub struct WorkChunk {
    doc: DocTokens,
    start: usize,
    end: usize,
}

impl WorkChunk {
    pub fn tokens(&self) -> &[Token] {
        &self.doc[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits `tokens` into chunks of at most `max_chunk_size`, in document
/// order; the final chunk may be shorter. An empty sequence produces no
/// chunks. `max_chunk_size` is validated by the pipeline config before
/// any chunking happens.
pub fn chunk_tokens(
    tokens: &DocTokens,
    max_chunk_size: usize,
) -> impl Iterator<Item = WorkChunk> + '_ {
    assert!(max_chunk_size > 0, "max_chunk_size must be positive");
    let len = tokens.len();
    (0..len).step_by(max_chunk_size).map(move |start| WorkChunk {
        doc: Arc::clone(tokens),
        start,
        end: (start + max_chunk_size).min(len),
    })
}
