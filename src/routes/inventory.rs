use axum::{Json, extract::State};

use crate::{
    dto::lookup::{InventoryCheckRequest, InventoryCheckResponse},
    error::AppResult,
    services::inventory_service,
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/inventory/check",
    request_body = InventoryCheckRequest,
    responses(
        (status = 200, description = "Availability for the requested quantity", body = InventoryCheckResponse),
        (status = 400, description = "Product ID required"),
        (status = 404, description = "Unknown SKU"),
    ),
    tag = "Inventory"
)]
pub async fn check_inventory(
    State(state): State<AppState>,
    Json(payload): Json<InventoryCheckRequest>,
) -> AppResult<Json<InventoryCheckResponse>> {
    let result = inventory_service::check_stock(&state, payload).await?;
    Ok(Json(result))
}
