//! Hotel identifiers tolerant of mixed JSON representations.
//!
//! Legacy documents store `hotel_id` either as a JSON string (`"h001"`) or as
//! a bare number (`1`). Both shapes must round-trip untouched, and route/form
//! parameters (always text) must match numeric ids the way a loosely-typed
//! comparison would: `"1"` matches `1`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a [`HotelRecord`](crate::hotel::HotelRecord).
///
/// Serialises back to exactly the JSON shape it was read from. Equality
/// (`PartialEq`) is strict — same representation, same value — and is what
/// the create-time duplicate check uses. Route parameters are matched with
/// the coercive [`HotelId::matches_param`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotelId {
    /// A textual id such as `"h001"`.
    Text(String),
    /// A numeric id such as `1`.
    Number(serde_json::Number),
}

impl HotelId {
    /// Loose comparison against a raw textual parameter.
    ///
    /// A textual id must match exactly; a numeric id matches either its
    /// canonical rendering (`1` vs `"1"`) or a numerically equal parse
    /// (`1` vs `"1.0"`).
    #[must_use]
    pub fn matches_param(&self, raw: &str) -> bool {
        match self {
            Self::Text(text) => text == raw,
            Self::Number(number) => {
                number.to_string() == raw
                    || raw
                        .trim()
                        .parse::<f64>()
                        .is_ok_and(|parsed| number.as_f64() == Some(parsed))
            }
        }
    }

    /// Truthiness in the legacy sense: empty strings and zero are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Number(number) => number.as_f64().is_some_and(|value| value != 0.0),
        }
    }
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => number.fmt(f),
        }
    }
}

impl From<&str> for HotelId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for HotelId {
    fn from(value: i64) -> Self {
        Self::Number(serde_json::Number::from(value))
    }
}
