use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire response of `GET /api/payment-addresses`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentAddressesResponse {
    pub success: bool,
    pub addresses: ReceivingAddresses,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReceivingAddresses {
    pub bitcoin: String,
    pub ethereum: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CryptoPaymentRequest {
    /// Amount due in the base currency (THB).
    pub amount: f64,
    pub currency: Option<String>,
    pub order_id: Option<String>,
    pub customer_email: Option<String>,
    /// Coin to pay with: `"bitcoin"`/`"btc"` or `"ethereum"`/`"eth"`.
    pub crypto: String,
}

/// A payable crypto quote: either relayed from the configured payment
/// processor or computed locally from the current coin price.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CryptoPaymentResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    pub payment_address: String,
    pub pay_amount: String,
    pub pay_currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    /// BIP21 / EIP-681 URI encoding address and amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_uri: Option<String>,
    /// External QR image for the payment URI. Consumers fall back to a
    /// fixed icon when the image service is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}
