use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::currency::{self, format_thb};
use crate::dto::payments::{
    CryptoPaymentRequest, CryptoPaymentResponse, PaymentAddressesResponse, ReceivingAddresses,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Static receiving addresses, straight from configuration. Informational
/// only.
pub fn payment_addresses(config: &AppConfig) -> PaymentAddressesResponse {
    PaymentAddressesResponse {
        success: true,
        addresses: ReceivingAddresses {
            bitcoin: config.payment_addresses.bitcoin.clone(),
            ethereum: config.payment_addresses.ethereum.clone(),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coin {
    Bitcoin,
    Ethereum,
}

impl Coin {
    pub fn parse(tag: &str) -> AppResult<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "bitcoin" | "btc" => Ok(Coin::Bitcoin),
            "ethereum" | "eth" => Ok(Coin::Ethereum),
            other => Err(AppError::BadRequest(format!(
                "Unsupported crypto currency: {other}"
            ))),
        }
    }

    pub fn ticker(self) -> &'static str {
        match self {
            Coin::Bitcoin => "BTC",
            Coin::Ethereum => "ETH",
        }
    }
}

/// Produce a payable quote for an order total. Forwarded to the configured
/// payment processor when one is present, computed locally from the current
/// coin price otherwise.
pub async fn create_crypto_payment(
    state: &AppState,
    payload: CryptoPaymentRequest,
) -> AppResult<CryptoPaymentResponse> {
    if payload.amount <= 0.0 {
        return Err(AppError::BadRequest(
            "Missing required payment data".to_string(),
        ));
    }
    let coin = Coin::parse(&payload.crypto)?;

    if let Some(api_key) = state.config.nowpayments_api_key.clone() {
        return forward_to_processor(state, &api_key, &payload, coin).await;
    }
    local_quote(state, &payload, coin).await
}

async fn local_quote(
    state: &AppState,
    payload: &CryptoPaymentRequest,
    coin: Coin,
) -> AppResult<CryptoPaymentResponse> {
    let price_thb = coin_price_thb(&state.http, coin).await;
    let coin_amount = payload.amount / price_thb;
    let label = payload
        .order_id
        .as_deref()
        .map(|id| format!("Order {id}"))
        .unwrap_or_else(|| "Storefront Order".to_string());

    let (address, pay_amount, uri) = match coin {
        Coin::Bitcoin => {
            let address = state.config.payment_addresses.bitcoin.clone();
            let uri = bitcoin_uri(&address, coin_amount, &label, payload.amount)?;
            (address, format!("{coin_amount:.8}"), uri)
        }
        Coin::Ethereum => {
            let address = state.config.payment_addresses.ethereum.clone();
            let uri = ethereum_uri(&address, coin_amount, &label)?;
            (address, format!("{coin_amount:.6}"), uri)
        }
    };

    Ok(CryptoPaymentResponse {
        success: true,
        payment_id: None,
        payment_address: address,
        pay_amount,
        pay_currency: coin.ticker().to_string(),
        payment_url: None,
        qr_image_url: Some(qr_image_url(&uri)?),
        payment_uri: Some(uri),
        expires_at: None,
    })
}

/// Current THB price for one whole coin, falling back to the fixed
/// approximations when the price service is unreachable.
pub async fn coin_price_thb(http: &Client, coin: Coin) -> f64 {
    #[derive(Debug, Deserialize)]
    struct PriceSheet {
        bitcoin: CoinPrice,
        ethereum: CoinPrice,
    }
    #[derive(Debug, Deserialize)]
    struct CoinPrice {
        thb: f64,
    }

    let url =
        "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin,ethereum&vs_currencies=thb";
    let fetched: Result<PriceSheet, reqwest::Error> = async {
        http.get(url).send().await?.error_for_status()?.json().await
    }
    .await;

    match fetched {
        Ok(sheet) => match coin {
            Coin::Bitcoin => sheet.bitcoin.thb,
            Coin::Ethereum => sheet.ethereum.thb,
        },
        Err(err) => {
            tracing::warn!(error = %err, "coin price fetch failed, using fallback price");
            match coin {
                Coin::Bitcoin => currency::FALLBACK_BTC_PRICE_THB,
                Coin::Ethereum => currency::FALLBACK_ETH_PRICE_THB,
            }
        }
    }
}

/// BIP21 payment URI carrying the amount in whole coins.
pub fn bitcoin_uri(
    address: &str,
    amount_btc: f64,
    label: &str,
    total_thb: f64,
) -> anyhow::Result<String> {
    let mut uri = Url::parse(&format!("bitcoin:{address}"))?;
    if amount_btc > 0.0 {
        uri.query_pairs_mut()
            .append_pair("amount", &format!("{amount_btc:.8}"))
            .append_pair("label", label)
            .append_pair("message", &format!("{} THB", format_thb(total_thb as i64)));
    } else {
        uri.query_pairs_mut().append_pair("label", label);
    }
    Ok(uri.to_string())
}

/// EIP-681 payment URI; the amount travels in wei.
pub fn ethereum_uri(address: &str, amount_eth: f64, label: &str) -> anyhow::Result<String> {
    let mut uri = Url::parse(&format!("ethereum:{address}@1"))?;
    if amount_eth > 0.0 {
        let wei = (amount_eth * 1e18) as u128;
        uri.query_pairs_mut()
            .append_pair("value", &wei.to_string())
            .append_pair("label", label);
    } else {
        uri.query_pairs_mut().append_pair("label", label);
    }
    Ok(uri.to_string())
}

/// QR image for a payment URI, rendered by the external image service.
pub fn qr_image_url(payment_uri: &str) -> anyhow::Result<String> {
    let url = Url::parse_with_params(
        "https://api.qrserver.com/v1/create-qr-code/",
        &[("size", "200x200"), ("data", payment_uri)],
    )?;
    Ok(url.to_string())
}

#[derive(Debug, Deserialize)]
struct ProcessorPayment {
    payment_id: Option<serde_json::Value>,
    pay_address: Option<String>,
    pay_amount: Option<serde_json::Value>,
    pay_currency: Option<String>,
    payment_url: Option<String>,
    invoice_url: Option<String>,
    expiration_estimate_date: Option<String>,
    message: Option<String>,
}

async fn forward_to_processor(
    state: &AppState,
    api_key: &str,
    payload: &CryptoPaymentRequest,
    coin: Coin,
) -> AppResult<CryptoPaymentResponse> {
    let order_id = payload.order_id.clone().unwrap_or_default();
    let body = serde_json::json!({
        "price_amount": payload.amount,
        "price_currency": payload.currency.as_deref().unwrap_or(currency::BASE_CURRENCY),
        "pay_currency": coin.ticker(),
        "order_id": order_id,
        "order_description": format!("Storefront Order {order_id}"),
    });

    let response = state
        .http
        .post("https://api.nowpayments.io/v1/payment")
        .header("x-api-key", api_key)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    let parsed: ProcessorPayment = response.json().await?;
    if !status.is_success() {
        let reason = parsed
            .message
            .unwrap_or_else(|| "Payment creation failed".to_string());
        return Err(AppError::BadRequest(reason));
    }

    Ok(CryptoPaymentResponse {
        success: true,
        payment_id: parsed.payment_id.map(render_value),
        payment_address: parsed.pay_address.unwrap_or_default(),
        pay_amount: parsed.pay_amount.map(render_value).unwrap_or_default(),
        pay_currency: parsed
            .pay_currency
            .unwrap_or_else(|| coin.ticker().to_string()),
        payment_url: parsed.payment_url.or(parsed.invoice_url),
        payment_uri: None,
        qr_image_url: None,
        expires_at: parsed.expiration_estimate_date,
    })
}

/// Processor fields arrive as either strings or numbers; render both the
/// same way.
fn render_value(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
