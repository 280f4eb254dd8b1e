//! Magnitude parser
//!
//! Input is normalized first, then handed to an ordered list of
//! interpretations. The first one that yields a finite value wins; a
//! mismatch simply falls through to the next.

use common::error::{Error, Result};
use tracing::debug;

use crate::suffix::lookup_suffix;

/// One way of reading normalized text as a number
type Interpretation = fn(&str) -> Option<f64>;

/// Interpretations in priority order
const INTERPRETATIONS: [(&str, Interpretation); 3] = [
    ("numeric literal", parse_literal),
    ("number with suffix", parse_suffixed),
    ("number and suffix word", parse_two_words),
];

/// Parse a human-friendly magnitude such as `22.3k`, `1.3 million`,
/// `$70b` or `1,300,000`.
///
/// Fails with [`Error::Parse`] carrying the input exactly as given.
pub fn parse_magnitude(input: &str) -> Result<f64> {
    let normalized = normalize(input);

    for (name, interpret) in INTERPRETATIONS {
        match interpret(&normalized) {
            Some(value) => return Ok(value),
            None => debug!("'{}' is not a {}", normalized, name),
        }
    }

    Err(Error::parse(input))
}

/// Parse an optional input; a missing value is a parse error.
pub fn parse_optional(input: Option<&str>) -> Result<f64> {
    match input {
        Some(text) => parse_magnitude(text),
        None => Err(Error::parse("")),
    }
}

/// Rewrite raw input into the form the interpretations expect:
/// trimmed, lowercase, without `$` or `,`, and with the whitespace between
/// a digit and a following word removed (`1.3 million` -> `1.3million`).
pub fn normalize(input: &str) -> String {
    let stripped: String = input
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '$' | ','))
        .collect();

    collapse_digit_word_gaps(stripped.trim())
}

fn collapse_digit_word_gaps(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() && i > 0 && chars[i - 1].is_ascii_digit() {
            let mut end = i;
            while end < chars.len() && chars[end].is_whitespace() {
                end += 1;
            }
            if end < chars.len() && chars[end].is_ascii_lowercase() {
                i = end;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }

    out
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// A signed decimal, optionally with an exponent. No multiplier applies.
fn parse_literal(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().and_then(finite)
}

/// `<digits>[.<digits>]<letters>` where the letters are exactly a suffix key.
fn parse_suffixed(text: &str) -> Option<f64> {
    let split = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let (number, rest) = text.split_at(split);

    // the number must end in a digit and carry at most one point
    if !number.ends_with(|c: char| c.is_ascii_digit()) || number.matches('.').count() > 1 {
        return None;
    }

    let letters = rest.trim_start();
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }

    let magnitude = lookup_suffix(letters)?;
    let value: f64 = number.parse().ok()?;
    finite(value * magnitude.multiplier())
}

/// Exactly two words: a number, then a suffix key.
fn parse_two_words(text: &str) -> Option<f64> {
    let mut words = text.split_whitespace();
    let (first, second) = match (words.next(), words.next(), words.next()) {
        (Some(first), Some(second), None) => (first, second),
        _ => return None,
    };

    let value: f64 = first.parse().ok()?;
    let magnitude = lookup_suffix(second)?;
    finite(value * magnitude.multiplier())
}
