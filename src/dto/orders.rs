use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Customer, LineItem};

/// Checkout submission payload. Field names match what the storefront's
/// checkout form has always posted; the display-currency fields are optional
/// and fall back to THB amounts.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderRequest {
    #[serde(flatten)]
    pub customer: Customer,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub payment_method: Option<String>,
    pub currency: Option<String>,
    pub currency_symbol: Option<String>,
    pub display_subtotal: Option<f64>,
    pub display_total: Option<f64>,
    pub crypto_amount: Option<String>,
    /// Client-reported totals; ignored in favor of recomputing from the
    /// item snapshot.
    pub subtotal: Option<i64>,
    pub total: Option<i64>,
    pub timestamp: Option<String>,
}

/// Wire response of `POST /api/submit-order`: `{success, orderId, ...}` on
/// success, `{success: false, error}` otherwise.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_sent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitOrderResponse {
    pub fn received(order_id: String, email_sent: bool) -> Self {
        Self {
            success: true,
            order_id: Some(order_id),
            message: Some("Order received successfully".to_string()),
            email_sent: Some(email_sent),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            order_id: None,
            message: None,
            email_sent: None,
            error: Some(error.into()),
        }
    }
}
