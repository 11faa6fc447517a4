//! Core types for the quotebook service.
//!
//! Defines the quote and category model, the in-memory [`QuoteStore`] with
//! its duplicate-rejecting append, and the geometry helpers served next to it.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod category;
pub mod error;
pub mod geometry;
pub mod quote;
pub mod seed;
pub mod store;

pub use category::Category;
pub use error::CoreError;
pub use geometry::{circle, parse_dimension, rectangle, Measurements};
pub use quote::Quote;
pub use store::QuoteStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_equality_is_structural() {
        let a = Quote::new("Q", "A");
        let b = Quote::new(String::from("Q"), String::from("A"));
        assert_eq!(a, b, "quotes with identical fields must be equal");
        assert_ne!(a, Quote::new("Q", "a"), "author comparison is case-sensitive");
    }

    #[test]
    fn quote_serializes_with_quote_and_author_fields() {
        let json = match serde_json::to_value(Quote::new("Q", "A")) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, serde_json::json!({"quote": "Q", "author": "A"}));
    }

    #[test]
    fn core_error_display_includes_context() {
        let err = CoreError::UnknownCategory { name: "unknownCat".to_owned() };
        assert!(err.to_string().contains("unknownCat"), "Display must name the category");

        let err = CoreError::EmptyCategory { category: Category::Happiness };
        assert!(err.to_string().contains("happinessQuotes"));

        let err = CoreError::InvalidNumeric { param: "r".to_owned(), value: "abc".to_owned() };
        let msg = err.to_string();
        assert!(msg.contains("abc") && msg.contains('r'), "Display must include param and value");
    }

    #[test]
    fn default_store_is_seeded_and_empty_store_is_not() {
        let store = QuoteStore::default();
        for category in Category::ALL {
            assert_eq!(store.len(category), 2, "default store must be seeded");
            assert!(QuoteStore::empty().is_empty(category), "empty store must hold nothing");
        }
    }
}
