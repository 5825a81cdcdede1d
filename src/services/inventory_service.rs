use serde::Deserialize;

use crate::dto::lookup::{InventoryCheckRequest, InventoryCheckResponse};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Stock lookup against the spreadsheet-backed Inventory table. Permissive
/// when no inventory system is configured: everything is reported available.
/// Nothing in the cart add path consults this; it is a standalone check the
/// product page may call before offering the add control.
pub async fn check_stock(
    state: &AppState,
    payload: InventoryCheckRequest,
) -> AppResult<InventoryCheckResponse> {
    let Some(product_id) = payload.product_id.filter(|id| !id.trim().is_empty()) else {
        return Err(AppError::BadRequest("Product ID required".to_string()));
    };
    let requested = payload.quantity.filter(|q| *q >= 1).unwrap_or(1);

    let Some(config) = &state.config.airtable else {
        return Ok(InventoryCheckResponse {
            available: true,
            stock: None,
            sku: Some(product_id),
            message: "Product available".to_string(),
            note: Some("Inventory checking not configured".to_string()),
        });
    };

    let url = format!("https://api.airtable.com/v0/{}/Inventory", config.base_id);
    let formula = format!("{{SKU}}='{product_id}'");
    let data: RecordList = state
        .http
        .get(&url)
        .query(&[("filterByFormula", formula.as_str())])
        .bearer_auth(&config.api_key)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let Some(record) = data.records.first() else {
        return Err(AppError::NotFound);
    };

    let stock = record.fields.stock.unwrap_or(0);
    let available = stock >= requested;
    let message = if available {
        "Product available".to_string()
    } else if stock > 0 {
        format!("Only {stock} units available")
    } else {
        "Out of stock".to_string()
    };

    Ok(InventoryCheckResponse {
        available,
        stock: Some(stock),
        sku: Some(product_id),
        message,
        note: None,
    })
}

#[derive(Debug, Deserialize)]
struct RecordList {
    records: Vec<Record>,
}

#[derive(Debug, Deserialize)]
struct Record {
    fields: InventoryFields,
}

#[derive(Debug, Deserialize)]
struct InventoryFields {
    #[serde(rename = "Stock", default)]
    stock: Option<i64>,
}
