//! Human-friendly monetary magnitudes
//!
//! Parses free-form text such as `22.3k`, `1.3 million` or `$70b` into a
//! number, and renders numbers back into scale-appropriate strings.

pub mod suffix;
pub mod parser;
pub mod formatter;

pub use suffix::{Magnitude, lookup_suffix, SUFFIX_TABLE};
pub use parser::{parse_magnitude, parse_optional, normalize};
pub use formatter::{format_usd, format_supply, format_tokens, format_percent, format_multiplier, NOT_AVAILABLE};
