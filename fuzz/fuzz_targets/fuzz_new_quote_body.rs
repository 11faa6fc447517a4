//! Fuzz target: decoding a `NewQuoteBody` and submitting it to a store.
//!
//! Arbitrary bytes must never panic the decoder, and any body that decodes
//! must be either stored or rejected with an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quotebook_core::QuoteStore;
use quotebook_gateway::routes::NewQuoteBody;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = serde_json::from_slice::<NewQuoteBody>(data) else {
        return;
    };
    let store = QuoteStore::seeded();
    let _ = store.add_quote(body.category.as_deref(), body.quote.as_deref(), body.author.as_deref());
});
