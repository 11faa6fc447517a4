//! Fuzz target: lenient numeric parsing of geometry path segments.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quotebook_core::geometry::parse_dimension;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(value) = parse_dimension("r", raw) {
            assert!(!value.is_nan(), "parsed dimensions are never NaN");
        }
    }
});
