//! Currency code attached to a budget
//!
//! Amounts themselves are currency-agnostic cents; the code only controls how
//! they are displayed.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// An upper-case currency code such as `USD`
///
/// Deserializing goes through [`FromStr`], so stored codes are validated and
/// upper-cased the same way typed ones are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Currency(String);

/// Error type for currency code parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyParseError {
    Empty,
    InvalidCharacters(String),
}

impl fmt::Display for CurrencyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Currency code cannot be empty"),
            Self::InvalidCharacters(s) => {
                write!(f, "Currency code must be letters only: {}", s)
            }
        }
    }
}

impl std::error::Error for CurrencyParseError {}

impl Currency {
    /// US dollars, the default
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    /// Get the code
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Symbol used as an amount prefix
    pub fn symbol(&self) -> String {
        match self.0.as_str() {
            "USD" | "CAD" | "AUD" | "NZD" | "MXN" => "$".to_string(),
            "EUR" => "€".to_string(),
            "GBP" => "£".to_string(),
            "JPY" | "CNY" => "¥".to_string(),
            "INR" => "₹".to_string(),
            other => format!("{} ", other),
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::usd()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Currency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CurrencyParseError::Empty);
        }
        if !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyParseError::InvalidCharacters(s.to_string()));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(de::Error::custom)
    }
}

/// Field adapter that falls back to the default currency
///
/// Used for stored documents: an invalid or missing code loads as the default
/// and a warning is logged.
pub mod lenient {
    use super::Currency;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use tracing::warn;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Currency, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let parsed = match value {
            Value::String(ref code) => code.parse::<Currency>().map_err(|e| e.to_string()),
            Value::Null => return Ok(Currency::default()),
            ref other => Err(format!("expected a string, found {}", other)),
        };
        Ok(parsed.unwrap_or_else(|reason| {
            warn!(%reason, "Ignoring stored currency; using default");
            Currency::default()
        }))
    }
}
