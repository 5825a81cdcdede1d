use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::EmailConfig;
use crate::currency::format_thb;
use crate::models::OrderRecord;

/// Send the customer a plain-text order confirmation. Best-effort: the
/// returned flag is reported back to the caller but never fails the order.
pub async fn send_confirmation(config: Option<&EmailConfig>, order: &OrderRecord) -> bool {
    let Some(config) = config else {
        tracing::warn!("email not configured, skipping order confirmation");
        return false;
    };
    if order.customer.email.trim().is_empty() {
        tracing::warn!(order_id = %order.order_id, "customer email missing, skipping confirmation");
        return false;
    }

    let from: Mailbox = match format!("Storefront Orders <{}>", config.user).parse() {
        Ok(mailbox) => mailbox,
        Err(err) => {
            tracing::error!(error = %err, "sender address invalid");
            return false;
        }
    };
    let to: Mailbox = match order.customer.email.parse() {
        Ok(mailbox) => mailbox,
        Err(err) => {
            tracing::warn!(error = %err, order_id = %order.order_id, "customer email unparseable");
            return false;
        }
    };

    let message = match Message::builder()
        .from(from)
        .to(to)
        .subject(format!("Order Confirmation - {}", order.order_id))
        .body(confirmation_body(order))
    {
        Ok(message) => message,
        Err(err) => {
            tracing::error!(error = %err, "could not build confirmation email");
            return false;
        }
    };

    let transport = match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host) {
        Ok(builder) => builder
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.password.clone()))
            .build(),
        Err(err) => {
            tracing::error!(error = %err, host = %config.host, "smtp relay setup failed");
            return false;
        }
    };

    match transport.send(message).await {
        Ok(_) => {
            tracing::info!(order_id = %order.order_id, "order confirmation sent");
            true
        }
        Err(err) => {
            tracing::error!(error = %err, order_id = %order.order_id, "email send failed");
            false
        }
    }
}

/// Plain-text confirmation body.
pub fn confirmation_body(order: &OrderRecord) -> String {
    let customer = &order.customer;

    let mut items = String::new();
    for item in &order.items {
        items.push_str(&format!(
            "{} - {}x {} = {}\n",
            item.name,
            item.quantity,
            format_thb(item.unit_price),
            format_thb(item.unit_price * item.quantity)
        ));
    }

    let crypto_line = order
        .crypto_amount
        .as_deref()
        .map(|amount| format!("Amount to send: {amount}\n"))
        .unwrap_or_default();

    format!(
        "Thank you for your order!\n\
        \n\
        Order ID: {order_id}\n\
        Status: Pending Payment\n\
        \n\
        ITEMS:\n\
        {items}\
        \n\
        Subtotal: {subtotal}\n\
        Shipping: {shipping}\n\
        Total: {total}\n\
        \n\
        SHIPPING ADDRESS:\n\
        {first_name} {last_name}\n\
        {address}\n\
        {city}, {postcode}\n\
        {country}\n\
        \n\
        Payment Method: {payment_method}\n\
        {crypto_line}\
        \n\
        Please complete your payment and reply with the transaction ID,\n\
        quoting your Order ID.\n\
        \n\
        We'll send you another email once your payment is confirmed.\n",
        order_id = order.order_id,
        items = items,
        subtotal = format_thb(order.totals.subtotal),
        shipping = format_thb(order.totals.shipping),
        total = format_thb(order.totals.total),
        first_name = customer.first_name,
        last_name = customer.last_name,
        address = customer.address,
        city = customer.city,
        postcode = customer.postcode,
        country = customer.country,
        payment_method = order.payment_method.to_uppercase(),
        crypto_line = crypto_line,
    )
}
