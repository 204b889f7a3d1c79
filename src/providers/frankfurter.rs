use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::core::currency::CurrencyRateProvider;

/// Exchange rates from the Frankfurter API (ECB reference rates).
///
/// A single `GET /latest?from=BASE` returns the whole rates table for a base
/// currency; the table is cached per base so repeated conversions in one run
/// cost one request.
pub struct FrankfurterProvider {
    base_url: String,
    cache: Arc<Mutex<HashMap<String, HashMap<String, f64>>>>,
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    base: String,
    rates: HashMap<String, f64>,
}

impl FrankfurterProvider {
    pub fn new(base_url: &str) -> Self {
        FrankfurterProvider {
            base_url: base_url.to_string(),
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The full rates table for a base currency, keyed by quote code.
    #[instrument(name = "FrankfurterRates", skip(self), fields(base = %base))]
    pub async fn fetch_rates(&self, base: &str) -> Result<HashMap<String, f64>> {
        let base = base.to_uppercase();
        {
            let cache = self.cache.lock().await;
            if let Some(rates) = cache.get(&base) {
                debug!("Cache hit for rates table: {}", base);
                return Ok(rates.clone());
            }
        }

        let url = format!("{}/latest?from={}", self.base_url, base);
        debug!("Requesting currency rates from {}", url);

        let client = reqwest::Client::builder().user_agent("gasto/0.1").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base currency: {}", e, base))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for base currency: {}",
                response.status(),
                base
            ));
        }

        let text = response.text().await?;
        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rates response for {}: {}", base, e))?;

        debug!(base = %data.base, count = data.rates.len(), "Received rates table");

        let mut cache = self.cache.lock().await;
        cache.insert(base, data.rates.clone());
        Ok(data.rates)
    }
}

#[async_trait]
impl CurrencyRateProvider for FrankfurterProvider {
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64> {
        let (from, to) = (from.to_uppercase(), to.to_uppercase());
        if from == to {
            return Ok(1.0);
        }

        let rates = self.fetch_rates(&from).await?;
        rates
            .get(&to)
            .copied()
            .ok_or_else(|| anyhow!("No rate found for {} to {}", from, to))
    }
}
