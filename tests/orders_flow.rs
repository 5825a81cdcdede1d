use chrono::Utc;
use tempfile::TempDir;

use storefront_order_api::{
    checkout::CheckoutPhase,
    config::{AppConfig, PaymentAddresses},
    dto::orders::SubmitOrderRequest,
    error::AppError,
    models::{Customer, LineItem, OrderRecord},
    services::notify::{email, telegram},
    services::order_service,
    state::AppState,
    store::{CartStore, ItemDraft},
};

async fn test_state(dir: &TempDir) -> AppState {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cart_data_dir: dir.path().to_path_buf(),
        telegram: None,
        email: None,
        airtable: None,
        exchange_rate_api_key: None,
        nowpayments_api_key: None,
        payment_addresses: PaymentAddresses::default(),
    };
    AppState::new(config).await
}

fn customer() -> Customer {
    Customer {
        first_name: "Somchai".to_string(),
        last_name: "J".to_string(),
        email: "somchai@example.com".to_string(),
        phone: "+66 81 234 5678".to_string(),
        address: "1 Sukhumvit Rd".to_string(),
        city: "Bangkok".to_string(),
        postcode: "10110".to_string(),
        country: "Thailand".to_string(),
    }
}

fn line_item() -> LineItem {
    LineItem {
        id: 1,
        name: "BPC-157 - 5 vials".to_string(),
        price: "฿1,200".to_string(),
        unit_price: 1200,
        quantity: 5,
    }
}

fn order_payload() -> SubmitOrderRequest {
    SubmitOrderRequest {
        customer: customer(),
        items: vec![line_item()],
        payment_method: Some("bitcoin".to_string()),
        currency: None,
        currency_symbol: None,
        display_subtotal: None,
        display_total: None,
        crypto_amount: Some("0.00206667 BTC".to_string()),
        subtotal: None,
        total: None,
        timestamp: None,
    }
}

#[tokio::test]
async fn submission_rejects_incomplete_payloads() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir).await;

    let mut payload = order_payload();
    payload.customer.email = String::new();
    let err = order_service::submit_order(&state, payload)
        .await
        .expect_err("missing email must be rejected");
    assert!(matches!(err, AppError::BadRequest(_)));

    let mut payload = order_payload();
    payload.items.clear();
    let err = order_service::submit_order(&state, payload)
        .await
        .expect_err("empty item snapshot must be rejected");
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[tokio::test]
async fn failed_submission_preserves_the_cart() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir).await;

    state
        .cart
        .add(ItemDraft {
            name: Some("BPC-157 - 5 vials".to_string()),
            price: Some("฿1,200".to_string()),
            quantity: Some(5),
            ..ItemDraft::default()
        })
        .await;
    let snapshot = state.cart.items().await;

    // No chat collaborator is configured, so the intake notification fails.
    let err = order_service::submit_order(&state, order_payload())
        .await
        .expect_err("unconfigured intake must fail the submission");
    assert!(matches!(err, AppError::Notification));

    assert_eq!(state.cart.items().await, snapshot);
    assert_eq!(state.checkout.phase(), CheckoutPhase::Failed);

    // The stored array is untouched too.
    let reloaded = CartStore::open(dir.path()).await;
    assert_eq!(reloaded.items().await, snapshot);
}

#[tokio::test]
async fn only_one_submission_may_be_outstanding() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir).await;

    let guard = state.checkout.begin_submit().unwrap();
    assert_eq!(state.checkout.phase(), CheckoutPhase::Submitting);

    assert!(matches!(
        state.checkout.begin_submit(),
        Err(AppError::SubmissionInFlight)
    ));
    assert!(matches!(
        state.checkout.begin_collecting(),
        Err(AppError::SubmissionInFlight)
    ));

    guard.fail();
    assert_eq!(state.checkout.phase(), CheckoutPhase::Failed);

    // The slot frees up for a retry.
    state.checkout.begin_collecting().unwrap();
    assert_eq!(state.checkout.phase(), CheckoutPhase::CollectingFormInput);
    let retry = state.checkout.begin_submit().unwrap();
    retry.confirm();
    assert_eq!(state.checkout.phase(), CheckoutPhase::Confirmed);
}

#[tokio::test]
async fn dropped_submission_guard_records_a_failure() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir).await;

    {
        let _guard = state.checkout.begin_submit().unwrap();
    }
    assert_eq!(state.checkout.phase(), CheckoutPhase::Failed);
}

fn sample_order() -> OrderRecord {
    let items = vec![line_item()];
    let totals = CartStore::totals_of(&items);
    OrderRecord {
        order_id: "PP-20260807-deadbeef".to_string(),
        customer: customer(),
        items,
        totals,
        payment_method: "bitcoin".to_string(),
        currency: "THB".to_string(),
        currency_symbol: "฿".to_string(),
        display_subtotal: "฿6,000".to_string(),
        display_total: "฿6,200".to_string(),
        crypto_amount: Some("0.00206667 BTC".to_string()),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn chat_message_carries_totals_and_items() {
    let order = sample_order();
    let message = telegram::format_order_message(&order);

    assert!(message.contains("PP-20260807-deadbeef"));
    assert!(message.contains("BPC-157 - 5 vials"));
    assert!(message.contains("Subtotal: ฿6,000 THB"));
    assert!(message.contains("Total: ฿6,200 THB"));
    assert!(message.contains("Method: BITCOIN"));
    assert!(message.contains("0.00206667 BTC"));
}

#[tokio::test]
async fn chat_message_escapes_customer_markup() {
    let mut order = sample_order();
    order.customer.first_name = "<script>".to_string();
    let message = telegram::format_order_message(&order);

    assert!(message.contains("&lt;script&gt;"));
    assert!(!message.contains("<script>"));
}

#[tokio::test]
async fn confirmation_email_lists_the_order() {
    let order = sample_order();
    let body = email::confirmation_body(&order);

    assert!(body.contains("Order ID: PP-20260807-deadbeef"));
    assert!(body.contains("BPC-157 - 5 vials - 5x ฿1,200 = ฿6,000"));
    assert!(body.contains("Total: ฿6,200"));
    assert!(body.contains("Somchai J"));
    assert!(body.contains("Amount to send: 0.00206667 BTC"));
}
