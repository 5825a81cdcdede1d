use storefront_order_api::currency::{
    country_name, currency_for_country, fallback_rates, format_in, format_thb, parse_price,
};

#[test]
fn parses_baht_display_prices() {
    assert_eq!(parse_price("฿1,200"), Some(1200));
    assert_eq!(parse_price("฿800"), Some(800));
    assert_eq!(parse_price("฿ 12,345"), Some(12345));
}

#[test]
fn parses_other_known_symbols() {
    assert_eq!(parse_price("$3,000"), Some(3000));
    assert_eq!(parse_price("€26"), Some(26));
    assert_eq!(parse_price("₩37,500"), Some(37500));
}

#[test]
fn unparseable_prices_are_none_not_errors() {
    assert_eq!(parse_price(""), None);
    assert_eq!(parse_price("free"), None);
    assert_eq!(parse_price("฿"), None);
}

#[test]
fn decimal_tails_are_truncated_like_integer_parsing() {
    assert_eq!(parse_price("฿800.50"), Some(800));
}

#[test]
fn formats_thb_with_thousands_grouping() {
    assert_eq!(format_thb(0), "฿0");
    assert_eq!(format_thb(200), "฿200");
    assert_eq!(format_thb(6200), "฿6,200");
    assert_eq!(format_thb(1234567), "฿1,234,567");
}

#[test]
fn formatting_respects_currency_decimals() {
    assert_eq!(format_in(45.5, "USD"), "$45.50");
    assert_eq!(format_in(1234.4, "JPY"), "¥1,234");
    assert_eq!(format_in(6200.0, "THB"), "฿6,200");
}

#[test]
fn format_and_parse_agree_on_thb() {
    for amount in [0, 1, 999, 1200, 6200, 1_234_567] {
        assert_eq!(parse_price(&format_thb(amount)), Some(amount));
    }
}

#[test]
fn maps_countries_to_display_currencies() {
    assert_eq!(currency_for_country("TH"), Some("THB"));
    assert_eq!(currency_for_country("DE"), Some("EUR"));
    assert_eq!(currency_for_country("GB"), Some("GBP"));
    assert_eq!(currency_for_country("ZZ"), None);

    assert_eq!(country_name("TH"), Some("Thailand"));
    assert_eq!(country_name("KR"), Some("South Korea"));
}

#[test]
fn fallback_table_is_thb_based() {
    let rates = fallback_rates();
    assert_eq!(rates.iter().find(|(code, _)| *code == "THB"), Some(&("THB", 1.0)));
    assert!(rates.iter().any(|(code, rate)| *code == "USD" && *rate > 0.0));
    assert!(rates.len() >= 10);
}
