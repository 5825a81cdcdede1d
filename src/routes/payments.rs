use axum::{Json, extract::State};

use crate::{
    dto::payments::{CryptoPaymentRequest, CryptoPaymentResponse, PaymentAddressesResponse},
    error::AppResult,
    services::payment_service,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/payment-addresses",
    responses(
        (status = 200, description = "Static crypto receiving addresses", body = PaymentAddressesResponse)
    ),
    tag = "Payments"
)]
pub async fn payment_addresses(State(state): State<AppState>) -> Json<PaymentAddressesResponse> {
    Json(payment_service::payment_addresses(&state.config))
}

#[utoipa::path(
    post,
    path = "/api/payments/crypto",
    request_body = CryptoPaymentRequest,
    responses(
        (status = 200, description = "Payable crypto quote", body = CryptoPaymentResponse),
        (status = 400, description = "Missing or unsupported payment data"),
    ),
    tag = "Payments"
)]
pub async fn create_crypto_payment(
    State(state): State<AppState>,
    Json(payload): Json<CryptoPaymentRequest>,
) -> AppResult<Json<CryptoPaymentResponse>> {
    let quote = payment_service::create_crypto_payment(&state, payload).await?;
    Ok(Json(quote))
}
