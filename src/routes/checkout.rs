use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    checkout::CheckoutPhase, error::AppResult, response::ApiResponse, state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutStatus {
    pub phase: CheckoutPhase,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(checkout_status))
        .route("/begin", post(begin_checkout))
}

#[utoipa::path(
    get,
    path = "/api/checkout/status",
    responses(
        (status = 200, description = "Current checkout phase", body = ApiResponse<CheckoutStatus>)
    ),
    tag = "Checkout"
)]
pub async fn checkout_status(State(state): State<AppState>) -> Json<ApiResponse<CheckoutStatus>> {
    let status = CheckoutStatus {
        phase: state.checkout.phase(),
    };
    Json(ApiResponse::success("OK", status))
}

#[utoipa::path(
    post,
    path = "/api/checkout/begin",
    responses(
        (status = 200, description = "Checkout form is collecting input", body = ApiResponse<CheckoutStatus>),
        (status = 409, description = "A submission is already in flight"),
    ),
    tag = "Checkout"
)]
pub async fn begin_checkout(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CheckoutStatus>>> {
    state.checkout.begin_collecting()?;
    let status = CheckoutStatus {
        phase: state.checkout.phase(),
    };
    Ok(Json(ApiResponse::success("Checkout started", status)))
}
