use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod cart;
pub mod checkout;
pub mod currency;
pub mod doc;
pub mod health;
pub mod inventory;
pub mod location;
pub mod orders;
pub mod payments;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/cart", cart::router())
        .nest("/checkout", checkout::router())
        .route("/submit-order", post(orders::submit_order))
        .route("/payment-addresses", get(payments::payment_addresses))
        .route("/payments/crypto", post(payments::create_crypto_payment))
        .route("/currency-rates", get(currency::currency_rates))
        .route("/location", get(location::detect_location))
        .route("/inventory/check", post(inventory::check_inventory))
}
