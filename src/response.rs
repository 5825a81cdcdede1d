use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for the storefront-facing routes. The order-submission and
/// payment-address endpoints use their own wire formats (see `dto::orders`
/// and `dto::payments`), which external consumers already depend on.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
