use reqwest::Client;
use serde::Deserialize;

use crate::config::TelegramConfig;
use crate::currency::format_thb;
use crate::models::OrderRecord;

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
}

/// Deliver the order to the ops chat. This is the intake of record; a
/// `false` here means the order was not received anywhere.
pub async fn send_order(
    http: &Client,
    config: Option<&TelegramConfig>,
    order: &OrderRecord,
) -> bool {
    let Some(config) = config else {
        tracing::error!("chat notification credentials not configured");
        return false;
    };

    let url = format!(
        "https://api.telegram.org/bot{}/sendMessage",
        config.bot_token
    );
    let body = serde_json::json!({
        "chat_id": config.chat_id,
        "text": format_order_message(order),
        "parse_mode": "HTML",
    });

    match http.post(&url).json(&body).send().await {
        Ok(response) if response.status().is_success() => {
            match response.json::<SendMessageResponse>().await {
                Ok(parsed) if parsed.ok => {
                    tracing::info!(order_id = %order.order_id, "chat notification sent");
                    true
                }
                Ok(_) => {
                    tracing::error!(order_id = %order.order_id, "chat API rejected the message");
                    false
                }
                Err(err) => {
                    tracing::error!(error = %err, "chat API response unreadable");
                    false
                }
            }
        }
        Ok(response) => {
            tracing::error!(status = %response.status(), "chat notification failed");
            false
        }
        Err(err) => {
            tracing::error!(error = %err, "chat notification failed");
            false
        }
    }
}

/// Render the order as the HTML message posted to the ops chat.
pub fn format_order_message(order: &OrderRecord) -> String {
    let customer = &order.customer;
    let mut message = format!("<b>NEW ORDER - {}</b>\n\n", escape_html(&order.order_id));

    message.push_str("<b>Customer</b>\n");
    message.push_str(&format!(
        "Name: {} {}\n",
        escape_html(&customer.first_name),
        escape_html(&customer.last_name)
    ));
    message.push_str(&format!("Email: {}\n", escape_html(&customer.email)));
    message.push_str(&format!("Phone: {}\n\n", escape_html(&customer.phone)));

    message.push_str("<b>Shipping Address</b>\n");
    message.push_str(&format!("{}\n", escape_html(&customer.address)));
    message.push_str(&format!(
        "{}, {}\n",
        escape_html(&customer.city),
        escape_html(&customer.postcode)
    ));
    message.push_str(&format!("{}\n\n", escape_html(&customer.country)));

    message.push_str("<b>Items</b>\n");
    for (index, item) in order.items.iter().enumerate() {
        message.push_str(&format!("{}. {}\n", index + 1, escape_html(&item.name)));
        message.push_str(&format!(
            "   Qty: {} | Price: {} THB\n",
            item.quantity,
            format_thb(item.unit_price)
        ));
    }
    message.push('\n');

    message.push_str("<b>Payment</b>\n");
    message.push_str(&format!(
        "Method: {}\n",
        escape_html(&order.payment_method.to_uppercase())
    ));
    message.push_str(&format!("Currency: {}\n", escape_html(&order.currency)));
    message.push_str(&format!(
        "Subtotal: {} THB{}\n",
        format_thb(order.totals.subtotal),
        display_suffix(&order.display_subtotal, &order.currency)
    ));
    message.push_str(&format!(
        "Shipping: {} THB\n",
        format_thb(order.totals.shipping)
    ));
    message.push_str(&format!(
        "<b>Total: {} THB{}</b>\n\n",
        format_thb(order.totals.total),
        display_suffix(&order.display_total, &order.currency)
    ));

    if let Some(crypto_amount) = &order.crypto_amount {
        message.push_str("<b>Crypto Payment</b>\n");
        message.push_str(&format!("Amount: {}\n\n", escape_html(crypto_amount)));
    }

    message.push_str(&format!(
        "Time: {}\n",
        order.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    message.push_str("\nPlease process this order as soon as possible.");

    message
}

fn display_suffix(display: &str, currency: &str) -> String {
    if currency == crate::currency::BASE_CURRENCY {
        String::new()
    } else {
        format!(" ({} {})", escape_html(display), escape_html(currency))
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
