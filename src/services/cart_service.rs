use crate::dto::cart::{AddItemRequest, CartView};
use crate::models::{LineItem, Totals};
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::store::CartStore;

pub async fn list_cart(state: &AppState) -> ApiResponse<CartView> {
    let items = state.cart.items().await;
    let totals = CartStore::totals_of(&items);
    ApiResponse::success("OK", CartView { items, totals })
}

pub async fn add_item(state: &AppState, payload: AddItemRequest) -> ApiResponse<LineItem> {
    let item = state.cart.add(payload.into()).await;
    ApiResponse::success("Added to cart", item)
}

pub async fn remove_item(state: &AppState, id: i64) -> ApiResponse<Totals> {
    let removed = state.cart.remove(id).await;
    let message = if removed {
        "Removed from cart"
    } else {
        "Item was not in cart"
    };
    ApiResponse::success(message, state.cart.totals().await)
}

pub async fn clear_cart(state: &AppState) -> ApiResponse<Totals> {
    state.cart.clear().await;
    ApiResponse::success("Cart cleared", state.cart.totals().await)
}

pub async fn cart_totals(state: &AppState) -> ApiResponse<Totals> {
    ApiResponse::success("OK", state.cart.totals().await)
}
