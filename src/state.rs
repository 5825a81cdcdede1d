use std::sync::Arc;

use crate::checkout::CheckoutTracker;
use crate::config::AppConfig;
use crate::services::rates_service::RatesCache;
use crate::store::CartStore;

/// Everything a route needs, passed explicitly; no component reaches for
/// ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub cart: CartStore,
    pub checkout: CheckoutTracker,
    pub http: reqwest::Client,
    pub rates: RatesCache,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Self {
        let cart = CartStore::open(&config.cart_data_dir).await;
        Self {
            config: Arc::new(config),
            cart,
            checkout: CheckoutTracker::new(),
            http: reqwest::Client::new(),
            rates: RatesCache::new(),
        }
    }
}
