//! Price parsing, formatting and currency lookup tables.
//!
//! Every price in the system is stored as an integer THB amount; display
//! strings are produced here and nowhere else, and parsed back only when
//! repairing legacy cart entries that carried a display string without a
//! numeric value.

/// Base currency all stored amounts are denominated in.
pub const BASE_CURRENCY: &str = "THB";

/// Currency symbols stripped when parsing a display price.
const KNOWN_SYMBOLS: &[char] = &['฿', '$', '€', '£', '¥', '₩', '₹'];

/// Parse a human-formatted price like `"฿1,200"` into its integer amount.
///
/// Strips known currency symbols, whitespace and thousands separators, then
/// reads the leading digit run. Returns `None` when nothing parseable
/// remains; callers decide whether that means zero.
pub fn parse_price(display: &str) -> Option<i64> {
    let cleaned: String = display
        .chars()
        .filter(|c| !KNOWN_SYMBOLS.contains(c) && !c.is_whitespace() && *c != ',')
        .collect();

    let digits: String = cleaned.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok()
}

/// Render an integer THB amount as a display price, e.g. `1200` → `"฿1,200"`.
pub fn format_thb(amount: i64) -> String {
    format!("฿{}", group_thousands(amount))
}

/// Render a converted amount in the given currency with its symbol and the
/// conventional number of decimals.
pub fn format_in(amount: f64, code: &str) -> String {
    let decimals = display_decimals(code);
    let symbol = symbol_for(code);
    if decimals == 0 {
        format!("{symbol}{}", group_thousands(amount.round() as i64))
    } else {
        format!("{symbol}{amount:.decimals$}")
    }
}

fn display_decimals(code: &str) -> usize {
    match code {
        "THB" | "JPY" | "KRW" | "VND" | "IDR" => 0,
        "BTC" => 8,
        "ETH" => 6,
        _ => 2,
    }
}

fn group_thousands(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn symbol_for(code: &str) -> &'static str {
    match code {
        "THB" => "฿",
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "AUD" => "A$",
        "CAD" => "C$",
        "SGD" => "S$",
        "JPY" | "CNY" => "¥",
        "KRW" => "₩",
        "INR" => "₹",
        "MYR" => "RM",
        "PHP" => "₱",
        "VND" => "₫",
        "IDR" => "Rp",
        "BTC" => "₿",
        "ETH" => "Ξ",
        _ => "฿",
    }
}

/// THB-based exchange rates used whenever the live rate service is
/// unconfigured or unreachable.
pub fn fallback_rates() -> &'static [(&'static str, f64)] {
    &[
        ("THB", 1.00),
        ("USD", 0.028),
        ("EUR", 0.026),
        ("GBP", 0.022),
        ("AUD", 0.042),
        ("CAD", 0.038),
        ("SGD", 0.038),
        ("JPY", 4.12),
        ("CNY", 0.20),
        ("KRW", 37.5),
        ("INR", 2.35),
        ("MYR", 0.13),
        ("PHP", 1.58),
        ("VND", 690.0),
        ("IDR", 430.0),
    ]
}

/// Approximate THB prices for one whole coin, used when the live price
/// lookup fails.
pub const FALLBACK_BTC_PRICE_THB: f64 = 3_000_000.0;
pub const FALLBACK_ETH_PRICE_THB: f64 = 100_000.0;

pub fn currency_for_country(country_code: &str) -> Option<&'static str> {
    let code = match country_code {
        "TH" => "THB",
        "US" => "USD",
        "DE" | "FR" | "IT" | "ES" | "NL" | "AT" | "BE" => "EUR",
        "GB" => "GBP",
        "AU" => "AUD",
        "CA" => "CAD",
        "SG" => "SGD",
        "JP" => "JPY",
        "CN" => "CNY",
        "KR" => "KRW",
        "IN" => "INR",
        "MY" => "MYR",
        "PH" => "PHP",
        "VN" => "VND",
        "ID" => "IDR",
        _ => return None,
    };
    Some(code)
}

pub fn country_name(country_code: &str) -> Option<&'static str> {
    let name = match country_code {
        "TH" => "Thailand",
        "US" => "United States",
        "DE" => "Germany",
        "FR" => "France",
        "IT" => "Italy",
        "ES" => "Spain",
        "NL" => "Netherlands",
        "AT" => "Austria",
        "BE" => "Belgium",
        "GB" => "United Kingdom",
        "AU" => "Australia",
        "CA" => "Canada",
        "SG" => "Singapore",
        "JP" => "Japan",
        "CN" => "China",
        "KR" => "South Korea",
        "IN" => "India",
        "MY" => "Malaysia",
        "PH" => "Philippines",
        "VN" => "Vietnam",
        "ID" => "Indonesia",
        _ => return None,
    };
    Some(name)
}
