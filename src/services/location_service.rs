use axum::http::HeaderMap;
use reqwest::Client;
use serde::Deserialize;

use crate::currency;
use crate::dto::lookup::LocationResponse;
use crate::state::AppState;

/// Headers checked, in order, for the client address.
const CLIENT_IP_HEADERS: &[&str] = &["x-nf-client-connection-ip", "client-ip", "x-forwarded-for"];

/// Resolve the caller's country and display currency. Loopback or missing
/// addresses get the storefront's home market; lookup failures degrade to it
/// too rather than surfacing an error.
pub async fn locate(state: &AppState, headers: &HeaderMap) -> LocationResponse {
    let client_ip = CLIENT_IP_HEADERS
        .iter()
        .find_map(|name| headers.get(*name).and_then(|value| value.to_str().ok()))
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty());

    let Some(ip) = client_ip else {
        return LocationResponse::default_location();
    };
    if ip == "127.0.0.1" || ip == "::1" {
        return LocationResponse::default_location();
    }

    match lookup_ip(&state.http, &ip).await {
        Ok(location) => location,
        Err(err) => {
            tracing::error!(error = %err, "geolocation lookup failed");
            let mut fallback = LocationResponse::default_location();
            fallback.error = Some("Using default location".to_string());
            fallback
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    country_code: Option<String>,
    country_name: Option<String>,
    city: Option<String>,
    region: Option<String>,
    timezone: Option<String>,
}

async fn lookup_ip(http: &Client, ip: &str) -> Result<LocationResponse, reqwest::Error> {
    let data: IpApiResponse = http
        .get(format!("https://ipapi.co/{ip}/json/"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let country = data.country_code.unwrap_or_else(|| "TH".to_string());
    let country_name = data
        .country_name
        .or_else(|| currency::country_name(&country).map(str::to_string))
        .unwrap_or_else(|| country.clone());
    let display_currency = currency::currency_for_country(&country)
        .unwrap_or(currency::BASE_CURRENCY)
        .to_string();

    Ok(LocationResponse {
        country,
        country_name,
        city: data.city,
        region: data.region,
        currency: display_currency,
        timezone: data.timezone,
        detected: true,
        error: None,
    })
}
