pub mod cart_service;
pub mod inventory_service;
pub mod location_service;
pub mod notify;
pub mod order_service;
pub mod payment_service;
pub mod rates_service;
