//! The closed set of currencies the converter understands.

use anyhow::{Error, anyhow};
use std::fmt;
use std::str::FromStr;

/// Internal currency identifiers. `Egy` and `Yin` are legacy short codes
/// that differ from the ISO codes the rate service quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Eur,
    Syp,
    Egy,
    Yin,
}

/// All rates in the store are quoted against this currency.
pub const BASE_CURRENCY: Currency = Currency::Usd;

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Syp,
        Currency::Egy,
        Currency::Yin,
    ];

    /// Internal short code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Syp => "SYP",
            Currency::Egy => "EGY",
            Currency::Yin => "YIN",
        }
    }

    /// ISO code the rate service uses for this currency.
    pub fn api_code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Syp => "SYP",
            Currency::Egy => "EGP",
            Currency::Yin => "CNY",
        }
    }

    /// Reverse of [`Currency::api_code`].
    pub fn from_api_code(code: &str) -> Option<Currency> {
        Currency::ALL.into_iter().find(|c| c.api_code() == code)
    }

    /// Human-readable name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Syp => "Syrian Pound",
            Currency::Egy => "Egyptian Pound",
            Currency::Yin => "Chinese Yuan",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.to_ascii_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| anyhow!("Unsupported currency: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_code_mapping_is_bidirectional() {
        for currency in Currency::ALL {
            assert_eq!(Currency::from_api_code(currency.api_code()), Some(currency));
        }
    }

    #[test]
    fn test_legacy_codes_map_to_iso_codes() {
        assert_eq!(Currency::Egy.api_code(), "EGP");
        assert_eq!(Currency::Yin.api_code(), "CNY");
        assert_eq!(Currency::Usd.api_code(), "USD");
    }

    #[test]
    fn test_from_api_code_rejects_untracked_codes() {
        assert_eq!(Currency::from_api_code("GBP"), None);
        assert_eq!(Currency::from_api_code("EGY"), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("Yin".parse::<Currency>().unwrap(), Currency::Yin);
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        let result = "GBP".parse::<Currency>();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().to_string(), "Unsupported currency: GBP");
    }

    #[test]
    fn test_display_uses_internal_code() {
        assert_eq!(Currency::Egy.to_string(), "EGY");
    }
}
