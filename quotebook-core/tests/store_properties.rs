//! Property and concurrency tests for the quote store.

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use quotebook_core::{Category, CoreError, Quote, QuoteStore};

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Success),
        Just(Category::Perseverance),
        Just(Category::Happiness),
    ]
}

/// A small alphabet so generated submissions collide often.
fn arb_submission() -> impl Strategy<Value = (Category, String, String)> {
    (arb_category(), "[ab]{1,2}", "[xy]{1,2}")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every add either grows the category by exactly one, or is a duplicate
    /// of something already there and leaves it unchanged.
    #[test]
    fn prop_add_is_rejected_iff_duplicate(subs in proptest::collection::vec(arb_submission(), 1..40)) {
        let store = QuoteStore::seeded();
        for (category, quote, author) in subs {
            let before = store.quotes(category);
            let candidate = Quote::new(quote.as_str(), author.as_str());
            let existed = before.contains(&candidate);

            let result = store.add_quote(Some(category.as_str()), Some(quote.as_str()), Some(author.as_str()));

            if existed {
                let is_duplicate = matches!(result, Err(CoreError::DuplicateQuote { .. }));
                prop_assert!(is_duplicate);
                prop_assert_eq!(store.len(category), before.len());
            } else {
                prop_assert_eq!(result, Ok(candidate.clone()));
                prop_assert_eq!(store.len(category), before.len() + 1);
                let after = store.quotes(category);
                prop_assert_eq!(after.last(), Some(&candidate));
            }
        }
    }

    /// Random picks always come from the category's current contents.
    #[test]
    fn prop_random_quote_is_member(subs in proptest::collection::vec(arb_submission(), 0..20), pick in arb_category()) {
        let store = QuoteStore::seeded();
        for (category, quote, author) in subs {
            let _ = store.add_quote(Some(category.as_str()), Some(quote.as_str()), Some(author.as_str()));
        }
        let picked = store.random_quote(pick.as_str());
        prop_assert!(picked.is_ok());
        if let Ok(q) = picked {
            prop_assert!(store.quotes(pick).contains(&q));
        }
    }

    /// Names outside the fixed set never mutate any category.
    #[test]
    fn prop_unknown_category_never_mutates(name in "[a-zA-Z]{1,20}") {
        prop_assume!(name.parse::<Category>().is_err());
        let store = QuoteStore::seeded();
        let result = store.add_quote(Some(name.as_str()), Some("Q"), Some("A"));
        prop_assert_eq!(result, Err(CoreError::UnknownCategory { name: name.clone() }));
        prop_assert!(store.random_quote(&name).is_err());
        for category in Category::ALL {
            prop_assert_eq!(store.len(category), 2);
        }
    }
}

#[test]
fn concurrent_identical_adds_insert_exactly_once() {
    let store = Arc::new(QuoteStore::seeded());
    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store.add_quote(Some("successQuotes"), Some("Race"), Some("Runner")).is_ok()
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.join() {
            Ok(true) => successes += 1,
            Ok(false) => {}
            Err(_) => panic!("adder thread panicked"),
        }
    }

    assert_eq!(successes, 1, "exactly one concurrent add must win");
    assert_eq!(store.len(Category::Success), 3);
}
