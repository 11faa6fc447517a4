//! In-memory quote book.
//!
//! Holds one append-only sequence per [`Category`]. The whole store sits
//! behind a single `RwLock`; `add_quote` keeps the write lock across the
//! duplicate scan and the append so concurrent identical submissions insert
//! exactly once.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::category::Category;
use crate::error::CoreError;
use crate::quote::Quote;
use crate::seed::seed_quotes;

type Shelves = IndexMap<Category, Vec<Quote>>;

/// Thread-safe store of quotes grouped by category.
#[derive(Debug)]
pub struct QuoteStore {
    shelves: RwLock<Shelves>,
}

impl QuoteStore {
    /// Create a store with every category present and empty.
    ///
    /// Unlike [`QuoteStore::default`], which is seeded.
    #[must_use]
    pub fn empty() -> Self {
        let shelves = Category::ALL.into_iter().map(|c| (c, Vec::new())).collect();
        Self { shelves: RwLock::new(shelves) }
    }

    /// Create a store holding the startup seed quotes.
    #[must_use]
    pub fn seeded() -> Self {
        let shelves = Category::ALL.into_iter().map(|c| (c, seed_quotes(c))).collect();
        Self { shelves: RwLock::new(shelves) }
    }

    /// Names of all categories, in listing order.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn list_categories(&self) -> Vec<Category> {
        self.read().keys().copied().collect()
    }

    /// Pick one quote uniformly at random from `category`.
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownCategory`] if `category` is not a known
    /// name, or [`CoreError::EmptyCategory`] if it holds no quotes.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn random_quote(&self, category: &str) -> Result<Quote, CoreError> {
        let category: Category = category.parse()?;
        let shelves = self.read();
        shelves
            .get(&category)
            .and_then(|quotes| quotes.choose(&mut rand::thread_rng()))
            .cloned()
            .ok_or(CoreError::EmptyCategory { category })
    }

    /// Append a new quote to `category`.
    ///
    /// All three fields are validated for presence before the category name
    /// is looked at; `None` and `Some("")` are treated the same.
    ///
    /// # Errors
    /// - [`CoreError::InvalidInput`] if any field is missing or empty.
    /// - [`CoreError::UnknownCategory`] if the category is not a known name.
    /// - [`CoreError::DuplicateQuote`] if the exact quote/author pair is
    ///   already stored in that category.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn add_quote(
        &self,
        category: Option<&str>,
        quote: Option<&str>,
        author: Option<&str>,
    ) -> Result<Quote, CoreError> {
        let category = required("category", category)?;
        let quote = required("quote", quote)?;
        let author = required("author", author)?;
        let category: Category = category.parse()?;

        let mut shelves = self.write();
        let quotes = shelves.entry(category).or_default();
        if quotes.iter().any(|q| q.quote == quote && q.author == author) {
            debug!(%category, author, "duplicate quote rejected");
            return Err(CoreError::DuplicateQuote { category, author: author.to_owned() });
        }

        let stored = Quote::new(quote, author);
        quotes.push(stored.clone());
        info!(%category, author, total = quotes.len(), "quote added");
        Ok(stored)
    }

    /// Snapshot of the quotes currently stored in `category`.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn quotes(&self, category: Category) -> Vec<Quote> {
        self.read().get(&category).cloned().unwrap_or_default()
    }

    /// Number of quotes stored in `category`.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        self.read().get(&category).map_or(0, Vec::len)
    }

    /// Returns `true` if `category` holds no quotes.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn is_empty(&self, category: Category) -> bool {
        self.len(category) == 0
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn read(&self) -> RwLockReadGuard<'_, Shelves> {
        self.shelves.read().expect("quote store read lock poisoned")
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn write(&self) -> RwLockWriteGuard<'_, Shelves> {
        self.shelves.write().expect("quote store write lock poisoned")
    }
}

/// The default store is [`QuoteStore::seeded`]; use [`QuoteStore::empty`] for
/// a store with no quotes.
impl Default for QuoteStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::InvalidInput { field }),
    }
}
