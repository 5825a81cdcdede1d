use storefront_order_api::services::payment_service::{
    Coin, bitcoin_uri, ethereum_uri, qr_image_url,
};

#[test]
fn coin_tags_accept_both_spellings() {
    assert_eq!(Coin::parse("bitcoin").unwrap(), Coin::Bitcoin);
    assert_eq!(Coin::parse("BTC").unwrap(), Coin::Bitcoin);
    assert_eq!(Coin::parse("ethereum").unwrap(), Coin::Ethereum);
    assert_eq!(Coin::parse("eth").unwrap(), Coin::Ethereum);
    assert!(Coin::parse("dogecoin").is_err());
}

#[test]
fn bitcoin_uri_carries_amount_and_message() {
    let uri = bitcoin_uri(
        "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
        0.002,
        "Order PP-1",
        6200.0,
    )
    .unwrap();

    assert!(uri.starts_with("bitcoin:1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa?"));
    assert!(uri.contains("amount=0.00200000"));
    assert!(uri.contains("label="));
    assert!(uri.contains("message="));
}

#[test]
fn bitcoin_uri_without_amount_is_address_plus_label() {
    let uri = bitcoin_uri("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", 0.0, "Storefront Order", 0.0)
        .unwrap();
    assert!(uri.contains("label="));
    assert!(!uri.contains("amount="));
}

#[test]
fn ethereum_uri_denominates_in_wei() {
    let uri = ethereum_uri("0x742d35Cc6634C0532925a3b8D4C9db96590c6C87", 1.5, "Order PP-2")
        .unwrap();

    assert!(uri.starts_with("ethereum:0x742d35Cc6634C0532925a3b8D4C9db96590c6C87@1?"));
    assert!(uri.contains("value=1500000000000000000"));
}

#[test]
fn qr_url_embeds_the_payment_uri() {
    let url = qr_image_url("bitcoin:1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa?amount=0.00200000").unwrap();
    assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?"));
    assert!(url.contains("size=200x200"));
    assert!(url.contains("data=bitcoin%3A"));
}
