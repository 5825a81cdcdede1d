use axum::{Json, extract::State, http::StatusCode};

use crate::{
    dto::orders::{SubmitOrderRequest, SubmitOrderResponse},
    services::order_service,
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/submit-order",
    request_body = SubmitOrderRequest,
    responses(
        (status = 200, description = "Order accepted and forwarded", body = SubmitOrderResponse),
        (status = 400, description = "Missing required fields", body = SubmitOrderResponse),
        (status = 409, description = "A submission is already in flight", body = SubmitOrderResponse),
        (status = 500, description = "Order intake notification failed", body = SubmitOrderResponse),
    ),
    tag = "Orders"
)]
pub async fn submit_order(
    State(state): State<AppState>,
    Json(payload): Json<SubmitOrderRequest>,
) -> (StatusCode, Json<SubmitOrderResponse>) {
    match order_service::submit_order(&state, payload).await {
        Ok(receipt) => (StatusCode::OK, Json(receipt)),
        Err(err) => {
            tracing::error!(error = %err, "order submission failed");
            (
                err.status(),
                Json(SubmitOrderResponse::failure(err.to_string())),
            )
        }
    }
}
