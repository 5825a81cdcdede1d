use axum::{Json, extract::State, http::HeaderMap};

use crate::{dto::lookup::LocationResponse, services::location_service, state::AppState};

#[utoipa::path(
    get,
    path = "/api/location",
    responses(
        (status = 200, description = "Detected or default market for the caller", body = LocationResponse)
    ),
    tag = "Location"
)]
pub async fn detect_location(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<LocationResponse> {
    Json(location_service::locate(&state, &headers).await)
}
