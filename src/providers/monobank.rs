use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::currency::{
    CurrencyRate, LOCAL_CURRENCY_CODE, RateError, RateProvider, is_supported,
};

/// The bank publishes the full cross-rate table; rows for unsupported pairs
/// carry only a cross rate, so buy/sell are optional on the wire.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RateRow {
    currency_code_a: u32,
    currency_code_b: u32,
    rate_buy: Option<f64>,
    rate_sell: Option<f64>,
}

/// Fetches exchange rates from the Monobank public API.
///
/// No retries here; whether to retry is the caller's policy.
pub struct MonobankRateProvider {
    base_url: String,
}

impl MonobankRateProvider {
    pub fn new(base_url: &str) -> Self {
        MonobankRateProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl RateProvider for MonobankRateProvider {
    #[instrument(name = "MonobankRateFetch", skip(self))]
    async fn fetch_rates(&self) -> Result<Vec<CurrencyRate>, RateError> {
        let url = format!("{}/bank/currency", self.base_url);
        debug!("Requesting currency rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("kosht/1.0")
            .timeout(Duration::from_secs(10))
            .build()?;
        let response = client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(RateError::Status(response.status()));
        }

        let text = response.text().await?;
        let rows: Vec<RateRow> = serde_json::from_str(&text)?;

        // Keep only hryvnia quotes for the supported currencies; everything
        // else in the table is dropped silently.
        let rates = rows
            .into_iter()
            .filter(|row| {
                row.currency_code_b == LOCAL_CURRENCY_CODE && is_supported(row.currency_code_a)
            })
            .filter_map(|row| {
                Some(CurrencyRate {
                    currency_code_a: row.currency_code_a,
                    currency_code_b: row.currency_code_b,
                    rate_buy: row.rate_buy?,
                    rate_sell: row.rate_sell?,
                })
            })
            .collect();

        Ok(rates)
    }
}
