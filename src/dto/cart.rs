use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{LineItem, Totals};
use crate::store::ItemDraft;

/// Add-to-cart payload. Everything is optional; the store applies the same
/// defaults it uses when repairing stored entries.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    /// Display price, e.g. `"฿1,200"`. Used to derive the unit price when
    /// no numeric price is given.
    pub price: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<i64>,
}

impl From<AddItemRequest> for ItemDraft {
    fn from(req: AddItemRequest) -> Self {
        ItemDraft {
            id: req.id,
            name: req.name,
            price: req.price,
            unit_price: req.unit_price,
            quantity: req.quantity,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<LineItem>,
    pub totals: Totals,
}
