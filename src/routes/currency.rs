use axum::{Json, extract::State};

use crate::{dto::lookup::RatesResponse, services::rates_service, state::AppState};

#[utoipa::path(
    get,
    path = "/api/currency-rates",
    responses(
        (status = 200, description = "THB-based exchange rates, live or static", body = RatesResponse)
    ),
    tag = "Currency"
)]
pub async fn currency_rates(State(state): State<AppState>) -> Json<RatesResponse> {
    Json(rates_service::current_rates(&state).await)
}
