use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    dto::cart::{AddItemRequest, CartView},
    models::{LineItem, Totals},
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_list).post(add_to_cart).delete(clear_cart))
        .route("/totals", get(cart_totals))
        .route("/{id}", delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Current cart items and totals", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn cart_list(State(state): State<AppState>) -> Json<ApiResponse<CartView>> {
    Json(cart_service::list_cart(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Item appended to the cart", body = ApiResponse<LineItem>)
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddItemRequest>,
) -> Json<ApiResponse<LineItem>> {
    Json(cart_service::add_item(&state, payload).await)
}

#[utoipa::path(
    delete,
    path = "/api/cart/{id}",
    params(
        ("id" = i64, Path, description = "Line item ID")
    ),
    responses(
        (status = 200, description = "OK either way; removal is idempotent", body = ApiResponse<Totals>)
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<ApiResponse<Totals>> {
    Json(cart_service::remove_item(&state, id).await)
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart emptied", body = ApiResponse<Totals>)
    ),
    tag = "Cart"
)]
pub async fn clear_cart(State(state): State<AppState>) -> Json<ApiResponse<Totals>> {
    Json(cart_service::clear_cart(&state).await)
}

#[utoipa::path(
    get,
    path = "/api/cart/totals",
    responses(
        (status = 200, description = "Totals for the current cart", body = ApiResponse<Totals>)
    ),
    tag = "Cart"
)]
pub async fn cart_totals(State(state): State<AppState>) -> Json<ApiResponse<Totals>> {
    Json(cart_service::cart_totals(&state).await)
}
