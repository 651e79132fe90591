use crate::types::Token;


/// Turns one document into its ordered token sequence: lower-case, drop
/// `.` and `,`, split on whitespace runs. Punctuation goes before the
/// split, so `a.b` collapses to a single token.
pub fn tokenize(doc: &str) -> Vec<Token> {
    let lowered = doc.to_lowercase();
    let stripped: String = lowered.chars().filter(|&ch| ch != '.' && ch != ',').collect();
    stripped.split_whitespace().map(Box::from).collect()
}
