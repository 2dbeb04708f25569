//! Type-safe price representation using decimal arithmetic.
//!
//! The Storefront API reports money as a decimal string plus an ISO 4217
//! currency code. `Price` parses the amount once and renders it with a fixed
//! en-US style presentation, so "19.5" in USD displays as "$19.50".

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currencies whose minor unit is not used (amounts carry no decimals).
const ZERO_DECIMAL_CURRENCIES: &[&str] = &["JPY", "KRW", "VND"];

/// Error parsing a price from its wire representation.
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("invalid decimal amount: {0}")]
    InvalidAmount(String),
}

/// A price with currency information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    amount: Decimal,
    /// ISO 4217 currency code (uppercased).
    currency_code: String,
}

impl Price {
    /// Create a price from a decimal amount and currency code.
    #[must_use]
    pub fn new(amount: Decimal, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into().to_uppercase(),
        }
    }

    /// Parse a price from its wire form (decimal string + ISO code).
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::InvalidAmount`] if the amount is not a decimal
    /// number.
    pub fn parse(amount: &str, currency_code: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(amount.trim())
            .map_err(|_| PriceError::InvalidAmount(amount.to_string()))?;
        Ok(Self::new(amount, currency_code))
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The ISO 4217 currency code.
    #[must_use]
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Number of decimal places the currency is displayed with.
    fn display_scale(&self) -> u32 {
        if ZERO_DECIMAL_CURRENCIES.contains(&self.currency_code.as_str()) {
            0
        } else {
            2
        }
    }

    /// Currency symbol, if the code has a conventional en-US one.
    fn symbol(&self) -> Option<&'static str> {
        match self.currency_code.as_str() {
            "USD" | "CAD" | "AUD" | "NZD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "JPY" => Some("¥"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Price {
    /// Locale-fixed currency formatting: `$19.50`, `€7.00`, `19.50 PLN`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut amount = self.amount;
        amount.rescale(self.display_scale());

        match self.symbol() {
            Some(symbol) => write!(f, "{symbol}{amount}"),
            None => write!(f, "{amount} {}", self.currency_code),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_to_two_decimals() {
        let price = Price::parse("19.5", "USD").unwrap();
        assert_eq!(price.to_string(), "$19.50");
    }

    #[test]
    fn test_whole_amount() {
        let price = Price::parse("7", "EUR").unwrap();
        assert_eq!(price.to_string(), "€7.00");
    }

    #[test]
    fn test_rounds_excess_precision() {
        let price = Price::parse("10.999", "GBP").unwrap();
        assert_eq!(price.to_string(), "£11.00");
    }

    #[test]
    fn test_zero_decimal_currency() {
        let price = Price::parse("1200", "JPY").unwrap();
        assert_eq!(price.to_string(), "¥1200");
    }

    #[test]
    fn test_unknown_currency_uses_code_suffix() {
        let price = Price::parse("19.5", "PLN").unwrap();
        assert_eq!(price.to_string(), "19.50 PLN");
    }

    #[test]
    fn test_lowercase_code_is_normalized() {
        let price = Price::parse("3.2", "usd").unwrap();
        assert_eq!(price.currency_code(), "USD");
        assert_eq!(price.to_string(), "$3.20");
    }

    #[test]
    fn test_invalid_amount() {
        let result = Price::parse("nineteen", "USD");
        assert!(matches!(result, Err(PriceError::InvalidAmount(_))));
    }
}
