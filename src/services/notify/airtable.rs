use reqwest::Client;

use crate::config::AirtableConfig;
use crate::models::OrderRecord;

/// Append the order as a row in the spreadsheet-backed Orders table.
/// Returns true when there is nothing to do (unconfigured) or the row was
/// stored; failures are logged and reported as false.
pub async fn store_order(
    http: &Client,
    config: Option<&AirtableConfig>,
    order: &OrderRecord,
) -> bool {
    let Some(config) = config else {
        return true;
    };

    let url = format!("https://api.airtable.com/v0/{}/Orders", config.base_id);
    let items_json = serde_json::to_string(&order.items).unwrap_or_default();
    let body = serde_json::json!({
        "fields": {
            "Order ID": order.order_id,
            "Customer Name": format!(
                "{} {}",
                order.customer.first_name, order.customer.last_name
            ),
            "Customer Email": order.customer.email,
            "Customer Phone": order.customer.phone,
            "Items": items_json,
            "Total": order.totals.total,
            "Currency": order.currency,
            "Country": order.customer.country,
            "Payment Method": order.payment_method,
            "Status": "pending",
            "Created": order.created_at.to_rfc3339(),
        }
    });

    match http
        .post(&url)
        .bearer_auth(&config.api_key)
        .json(&body)
        .send()
        .await
    {
        Ok(response) if response.status().is_success() => true,
        Ok(response) => {
            tracing::error!(status = %response.status(), "spreadsheet store failed");
            false
        }
        Err(err) => {
            tracing::error!(error = %err, "spreadsheet store failed");
            false
        }
    }
}
