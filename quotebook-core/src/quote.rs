use serde::{Deserialize, Serialize};

/// A single quote record.
///
/// Equality is structural: two quotes are the same when both the text and the
/// author match exactly, whitespace and case included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text.
    pub quote: String,
    /// Who said or wrote it.
    pub author: String,
}

impl Quote {
    /// Creates a `Quote` from any string-like values.
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self { quote: quote.into(), author: author.into() }
    }
}
