//! Column type inference
//!
//! A column is numeric only if every present value parses as a finite
//! floating-point number. Empty fields and null tokens do not count.

use crate::constants::NULL_TOKENS;
use crate::types::ColumnKind;

/// Whether a raw field stands for a missing value
pub fn is_missing_value(s: &str) -> bool {
    let trimmed = s.trim();
    trimmed.is_empty() || NULL_TOKENS.contains(&trimmed)
}

/// Parse a raw field as a finite number
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Classify a column from its raw values
///
/// # Examples
/// - `["1", "", "2.5"]` -> Numeric
/// - `["1", "abc"]` -> Text
/// - `["", ""]` -> Text
pub fn infer_kind<S: AsRef<str>>(values: &[S]) -> ColumnKind {
    let mut present = values
        .iter()
        .map(|v| -> &str { v.as_ref() })
        .filter(|v| !is_missing_value(v))
        .peekable();

    if present.peek().is_none() {
        return ColumnKind::Text;
    }

    if present.all(|v| parse_number(v).is_some()) {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}
