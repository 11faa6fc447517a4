//! Startup quotes loaded into a freshly seeded store.
//!
//! Two quotes per category, in the order they are served.

use crate::category::Category;
use crate::quote::Quote;

/// Returns the seed quotes for a category.
#[must_use]
pub fn seed_quotes(category: Category) -> Vec<Quote> {
    match category {
        Category::Success => vec![
            Quote::new(
                "Success is not final, failure is not fatal: It is the courage to continue that counts.",
                "Winston S. Churchill",
            ),
            Quote::new(
                "The way to get started is to quit talking and begin doing.",
                "Walt Disney",
            ),
        ],
        Category::Perseverance => vec![
            Quote::new(
                "It\u{2019}s not that I\u{2019}m so smart, it\u{2019}s just that I stay with problems longer.",
                "Albert Einstein",
            ),
            Quote::new("Perseverance is failing 19 times and succeeding the 20th.", "Julie Andrews"),
        ],
        Category::Happiness => vec![
            Quote::new(
                "Happiness is not something ready made. It comes from your own actions.",
                "Dalai Lama",
            ),
            Quote::new(
                "For every minute you are angry you lose sixty seconds of happiness.",
                "Ralph Waldo Emerson",
            ),
        ],
    }
}
