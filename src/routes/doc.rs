use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    checkout::CheckoutPhase,
    dto::{
        cart::{AddItemRequest, CartView},
        lookup::{InventoryCheckRequest, InventoryCheckResponse, LocationResponse, RatesResponse},
        orders::{SubmitOrderRequest, SubmitOrderResponse},
        payments::{
            CryptoPaymentRequest, CryptoPaymentResponse, PaymentAddressesResponse,
            ReceivingAddresses,
        },
    },
    models::{Customer, LineItem, Totals},
    response::ApiResponse,
    routes::{cart, checkout, currency, health, inventory, location, orders, payments},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        cart::cart_list,
        cart::add_to_cart,
        cart::remove_from_cart,
        cart::clear_cart,
        cart::cart_totals,
        checkout::checkout_status,
        checkout::begin_checkout,
        orders::submit_order,
        payments::payment_addresses,
        payments::create_crypto_payment,
        currency::currency_rates,
        location::detect_location,
        inventory::check_inventory
    ),
    components(
        schemas(
            LineItem,
            Totals,
            Customer,
            CheckoutPhase,
            checkout::CheckoutStatus,
            health::HealthData,
            AddItemRequest,
            CartView,
            SubmitOrderRequest,
            SubmitOrderResponse,
            PaymentAddressesResponse,
            ReceivingAddresses,
            CryptoPaymentRequest,
            CryptoPaymentResponse,
            RatesResponse,
            LocationResponse,
            InventoryCheckRequest,
            InventoryCheckResponse,
            ApiResponse<CartView>,
            ApiResponse<LineItem>,
            ApiResponse<Totals>,
            ApiResponse<checkout::CheckoutStatus>,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Cart", description = "Cart store endpoints"),
        (name = "Checkout", description = "Checkout submission state"),
        (name = "Orders", description = "Order submission endpoint"),
        (name = "Payments", description = "Payment address and crypto quote endpoints"),
        (name = "Currency", description = "Exchange rate endpoint"),
        (name = "Location", description = "Geolocation endpoint"),
        (name = "Inventory", description = "Stock check endpoint"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
