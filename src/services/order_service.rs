use chrono::Utc;
use uuid::Uuid;

use crate::currency;
use crate::dto::orders::{SubmitOrderRequest, SubmitOrderResponse};
use crate::error::{AppError, AppResult};
use crate::models::{OrderRecord, Totals};
use crate::services::notify;
use crate::state::AppState;
use crate::store::CartStore;

/// Accept a completed checkout and hand it to the external collaborators.
///
/// The chat notification is the order intake of record: if it cannot be
/// delivered the submission fails and the cart is left untouched so the
/// customer can retry. Email confirmation and spreadsheet storage are
/// best-effort. The cart is cleared only once the order is confirmed.
pub async fn submit_order(
    state: &AppState,
    payload: SubmitOrderRequest,
) -> AppResult<SubmitOrderResponse> {
    if payload.customer.email.trim().is_empty()
        || payload.customer.phone.trim().is_empty()
        || payload.items.is_empty()
    {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    }

    let guard = state.checkout.begin_submit()?;

    // Totals are recomputed from the item snapshot; client-reported numbers
    // are never trusted.
    let totals = CartStore::totals_of(&payload.items);
    let order = build_order(payload, totals);

    tracing::info!(order_id = %order.order_id, total = order.totals.total, "order received");

    let chat_ok =
        notify::telegram::send_order(&state.http, state.config.telegram.as_ref(), &order).await;
    if !chat_ok {
        guard.fail();
        return Err(AppError::Notification);
    }

    let email_sent =
        notify::email::send_confirmation(state.config.email.as_ref(), &order).await;

    if !notify::airtable::store_order(&state.http, state.config.airtable.as_ref(), &order).await {
        tracing::warn!(order_id = %order.order_id, "order row not stored in spreadsheet");
    }

    state.cart.clear().await;
    guard.confirm();

    Ok(SubmitOrderResponse::received(order.order_id, email_sent))
}

fn build_order(payload: SubmitOrderRequest, totals: Totals) -> OrderRecord {
    let currency = payload
        .currency
        .unwrap_or_else(|| currency::BASE_CURRENCY.to_string());
    let currency_symbol = payload
        .currency_symbol
        .unwrap_or_else(|| currency::symbol_for(&currency).to_string());
    let display_subtotal = payload
        .display_subtotal
        .map(|v| currency::format_in(v, &currency))
        .unwrap_or_else(|| currency::format_thb(totals.subtotal));
    let display_total = payload
        .display_total
        .map(|v| currency::format_in(v, &currency))
        .unwrap_or_else(|| currency::format_thb(totals.total));

    OrderRecord {
        order_id: build_order_id(),
        customer: payload.customer,
        items: payload.items,
        totals,
        payment_method: payload
            .payment_method
            .unwrap_or_else(|| "unspecified".to_string()),
        currency,
        currency_symbol,
        display_subtotal,
        display_total,
        crypto_amount: payload.crypto_amount,
        created_at: Utc::now(),
    }
}

fn build_order_id() -> String {
    let date = Utc::now().format("%Y%m%d");
    let suffix = Uuid::new_v4().to_string();
    let short = &suffix[..8];
    format!("PP-{date}-{short}")
}
