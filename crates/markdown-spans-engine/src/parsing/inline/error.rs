/// Errors raised while tokenizing inline markdown.
///
/// Any of these aborts the whole call; no partial span sequence is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("Unmatched delimiter '{delimiter}' in text: {text:?}")]
    UnmatchedDelimiter {
        /// The delimiter literal that was opened but never closed.
        delimiter: String,
        /// Full text of the span being scanned.
        text: String,
    },
}
