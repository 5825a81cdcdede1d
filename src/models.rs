use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_quantity() -> i64 {
    1
}

/// One product entry in the cart.
///
/// `price` is the display string shown on the product page (e.g. `"฿1,200"`);
/// `unit_price` is the numeric THB amount it was parsed from. The numeric
/// value is authoritative; display strings are derived, never re-parsed at
/// read sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LineItem {
    /// Assigned from wall-clock milliseconds at add time. Not guaranteed
    /// unique under rapid successive adds.
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(rename = "unitPrice", default)]
    pub unit_price: i64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

/// Derived subtotal/shipping/total summary for the current cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Totals {
    pub subtotal: i64,
    pub shipping: i64,
    pub total: i64,
    #[serde(rename = "itemCount")]
    pub item_count: i64,
}

/// Customer contact and shipping fields collected at checkout.
///
/// Only email and phone are validated; everything else is forwarded to the
/// order collaborators as entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub country: String,
}

/// A completed checkout, assembled once at submission time. Never persisted
/// locally; ownership transfers to the external collaborators on submit.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub customer: Customer,
    pub items: Vec<LineItem>,
    pub totals: Totals,
    pub payment_method: String,
    pub currency: String,
    pub currency_symbol: String,
    pub display_subtotal: String,
    pub display_total: String,
    pub crypto_amount: Option<String>,
    pub created_at: DateTime<Utc>,
}
