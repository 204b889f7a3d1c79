//! Currency conversion abstractions

use anyhow::Result;
use async_trait::async_trait;

/// Exchange-rate lookup between two ISO currency codes.
///
/// Used only by the presentation commands; the calculation engine never
/// converts currencies itself.
#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64>;
}
