//! Field text <-> number conversions
//!
//! Every derived value (percentage, odds, stake) is shown with exactly two
//! digits after the decimal point, and the rounded text is what gets stored
//! back into the row.

use crate::error::{Field, InputError};

/// Parse the text of a row field as a real number.
///
/// Surrounding whitespace is ignored. Empty text and non-finite values
/// (`inf`, `NaN`) count as invalid input.
pub fn parse_field(field: Field, text: &str) -> Result<f64, InputError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(InputError::Empty { field });
    }
    let value = s.parse::<f64>().map_err(|_| InputError::NotANumber {
        field,
        text: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite {
            field,
            text: text.to_string(),
        });
    }
    Ok(value)
}

/// `1 / value`, with zero mapping to zero instead of infinity.
///
/// Converts a percentage to odds and odds back to a percentage.
pub fn reciprocal(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        1.0 / value
    }
}

pub fn format_fixed(value: f64) -> String {
    format!("{:.2}", value)
}
