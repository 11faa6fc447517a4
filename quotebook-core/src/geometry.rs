//! Area and perimeter of simple shapes, and lenient parsing of their
//! dimensions from URL path segments.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Area and perimeter of a shape.
///
/// The perimeter goes over the wire as `circumference` for every shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub area: f64,
    #[serde(rename = "circumference")]
    pub perimeter: f64,
}

/// Measurements of a circle with the given radius.
#[must_use]
pub fn circle(radius: f64) -> Measurements {
    Measurements { area: PI * radius * radius, perimeter: 2.0 * PI * radius }
}

/// Measurements of a `width` × `height` rectangle.
#[must_use]
pub fn rectangle(width: f64, height: f64) -> Measurements {
    Measurements { area: width * height, perimeter: 2.0 * (width + height) }
}

/// Parse a dimension the way a browser's `parseFloat` would.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"2abc"` parses as `2.0`. Negative values and `Infinity` are accepted.
///
/// # Errors
/// Returns [`CoreError::InvalidNumeric`] if `raw` has no numeric prefix.
pub fn parse_dimension(param: &str, raw: &str) -> Result<f64, CoreError> {
    numeric_prefix(raw.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .ok_or_else(|| CoreError::InvalidNumeric { param: param.to_owned(), value: raw.to_owned() })
}

fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if s[end..].starts_with("Infinity") {
        return &s[..end + "Infinity".len()];
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    &s[..end]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
