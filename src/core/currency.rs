//! Currency types and rate-provider abstractions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ISO 4217 numeric code of the local currency (Ukrainian hryvnia).
pub const LOCAL_CURRENCY_CODE: u32 = 980;

/// Currencies tracked against the hryvnia.
pub const SUPPORTED_CURRENCIES: [(u32, &str); 2] = [(840, "USD"), (978, "EUR")];

/// Returns the alphabetic symbol for a supported numeric currency code.
pub fn currency_symbol(code: u32) -> Option<&'static str> {
    SUPPORTED_CURRENCIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, symbol)| *symbol)
}

pub fn is_supported(code: u32) -> bool {
    currency_symbol(code).is_some()
}

/// One buy/sell quote for a currency pair, as published by the bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRate {
    pub currency_code_a: u32,
    pub currency_code_b: u32,
    pub rate_buy: f64,
    pub rate_sell: f64,
}

/// Failures while obtaining fresh rates. Cache failures are deliberately not
/// part of this taxonomy; the cache is an optimization and its errors never
/// reach callers.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("rates endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rates endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed rates response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self) -> Result<Vec<CurrencyRate>, RateError>;
}
