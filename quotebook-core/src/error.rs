use crate::category::Category;

/// Errors produced by the `quotebook-core` crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A required field was missing, null or empty.
    #[error("missing or empty field '{field}'")]
    InvalidInput { field: &'static str },

    /// The category name is not one of the fixed set.
    #[error("unknown category '{name}'")]
    UnknownCategory { name: String },

    /// The category exists but holds no quotes to choose from.
    #[error("category '{category}' has no quotes")]
    EmptyCategory { category: Category },

    /// An identical quote/author pair is already stored in the category.
    #[error("quote by '{author}' already exists in '{category}'")]
    DuplicateQuote { category: Category, author: String },

    /// A numeric parameter could not be parsed.
    #[error("invalid value '{value}' for '{param}': must be a number")]
    InvalidNumeric { param: String, value: String },
}
