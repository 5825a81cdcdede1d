use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::currency;
use crate::dto::lookup::RatesResponse;
use crate::state::AppState;

/// How long a live rate sheet stays served before refetching.
const CACHE_TTL: Duration = Duration::from_secs(3600);

/// In-process cache for the live rate sheet. A stale display is acceptable;
/// a blocked one is not.
#[derive(Clone, Default)]
pub struct RatesCache {
    inner: Arc<RwLock<Option<CachedRates>>>,
}

struct CachedRates {
    fetched_at: Instant,
    response: RatesResponse,
}

impl RatesCache {
    pub fn new() -> Self {
        Self::default()
    }

    async fn fresh(&self) -> Option<RatesResponse> {
        let cached = self.inner.read().await;
        cached
            .as_ref()
            .filter(|c| c.fetched_at.elapsed() < CACHE_TTL)
            .map(|c| c.response.clone())
    }

    async fn put(&self, response: RatesResponse) {
        *self.inner.write().await = Some(CachedRates {
            fetched_at: Instant::now(),
            response,
        });
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeRateApiResponse {
    conversion_rates: std::collections::BTreeMap<String, f64>,
    time_last_update_utc: String,
}

/// Current THB-based exchange rates. Live when a provider key is configured
/// and reachable, the static table otherwise. Never fails.
pub async fn current_rates(state: &AppState) -> RatesResponse {
    if let Some(cached) = state.rates.fresh().await {
        return cached;
    }

    let Some(api_key) = &state.config.exchange_rate_api_key else {
        return static_rates(None);
    };

    let url = format!(
        "https://v6.exchangerate-api.com/v6/{api_key}/latest/{}",
        currency::BASE_CURRENCY
    );
    match fetch_live(&state.http, &url).await {
        Ok(response) => {
            state.rates.put(response.clone()).await;
            response
        }
        Err(err) => {
            tracing::error!(error = %err, "live rate fetch failed");
            static_rates(Some(true))
        }
    }
}

async fn fetch_live(http: &Client, url: &str) -> Result<RatesResponse, reqwest::Error> {
    let parsed: ExchangeRateApiResponse = http
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(RatesResponse {
        base: currency::BASE_CURRENCY.to_string(),
        rates: parsed.conversion_rates,
        last_updated: parsed.time_last_update_utc,
        fallback: None,
    })
}

/// The hardcoded rate sheet.
pub fn static_rates(fallback: Option<bool>) -> RatesResponse {
    RatesResponse {
        base: currency::BASE_CURRENCY.to_string(),
        rates: currency::fallback_rates()
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect(),
        last_updated: Utc::now().to_rfc3339(),
        fallback,
    }
}
