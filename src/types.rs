use std::sync::Arc;


/// A normalized token: lower-cased, punctuation-stripped.
pub type Token = Box<str>;

/// The retained token sequence of one document, shared between the
/// per-document store and in-flight work chunks.
pub type DocTokens = Arc<[Token]>;

/// Per-document token counts, aligned to vocabulary indices.
pub type DocVector = Vec<f64>;
