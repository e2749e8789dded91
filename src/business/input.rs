//! Parsing of raw request text into typed values
//!
//! Form values arrive as strings. Missing fields deserialize to the empty
//! string, which is a valid name but never a valid price.

use serde::Deserialize;
use crate::error::{StoreError, Result};

/// Submitted create/update form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
}

impl ItemForm {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self { name: name.into(), price: price.into() }
    }
}

/// Parse a price as a 64-bit float
///
/// Accepts decimal and exponent notation and the literals `inf`/`infinity`.
/// A finite literal too large for `f64` is rejected rather than rounded to
/// infinity. `NaN` parses here but is refused by the `NOT NULL` price column.
/// Hexadecimal floats are not accepted. The text is not trimmed.
pub fn parse_price(text: &str) -> Result<f64> {
    let invalid = || StoreError::ParseError {
        field: "price",
        value: text.to_string(),
    };

    let price = text.parse::<f64>().map_err(|_| invalid())?;
    if price.is_infinite() && !is_infinity_literal(text) {
        return Err(invalid());
    }
    Ok(price)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Parse an item id from a path segment
pub fn parse_id(text: &str) -> Result<i64> {
    text.parse::<i64>().map_err(|_| StoreError::ParseError {
        field: "id",
        value: text.to_string(),
    })
}
