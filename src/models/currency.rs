//! Currency codes supported by MoneyGrep

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ISO currency code of an account or a transaction's original value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Chf,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Self::Usd, Self::Eur, Self::Chf, Self::Gbp];

    /// The three-letter code as stored in the database
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Chf => "CHF",
        }
    }

    /// Parse a currency code, ignoring surrounding whitespace and case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Some(Self::Usd),
            "EUR" => Some(Self::Eur),
            "GBP" => Some(Self::Gbp),
            "CHF" => Some(Self::Chf),
            _ => None,
        }
    }

    /// Comma separated list of all codes, for prompts and error messages
    pub fn codes() -> String {
        Self::ALL
            .iter()
            .map(|c| c.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

/// Error returned when a string is not a supported currency code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyParseError(pub String);

impl fmt::Display for CurrencyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid currency code: '{}' (expected one of {})",
            self.0,
            Currency::codes()
        )
    }
}

impl std::error::Error for CurrencyParseError {}

impl FromStr for Currency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CurrencyParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Currency::parse("USD"), Some(Currency::Usd));
        assert_eq!(Currency::parse(" chf "), Some(Currency::Chf));
        assert_eq!(Currency::parse("eur"), Some(Currency::Eur));
        assert_eq!(Currency::parse("JPY"), None);
        assert_eq!(Currency::parse(""), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "XYZ".parse::<Currency>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid currency code: 'XYZ' (expected one of USD, EUR, CHF, GBP)"
        );
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Currency::Gbp).unwrap(), "\"GBP\"");
        let c: Currency = serde_json::from_str("\"CHF\"").unwrap();
        assert_eq!(c, Currency::Chf);
    }
}
