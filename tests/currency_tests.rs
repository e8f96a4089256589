use buku_core::currency::{format_amount, LocaleConfig, NegativeStyle};

#[test]
fn default_locale_groups_with_dots() {
    let locale = LocaleConfig::default();
    assert_eq!(format_amount(&locale, 1), "1");
    assert_eq!(format_amount(&locale, 12_345), "12.345");
    assert_eq!(format_amount(&locale, 100_000_000), "100.000.000");
}

#[test]
fn zero_never_renders_as_a_digit() {
    let locale = LocaleConfig::default();
    assert_eq!(format_amount(&locale, 0), "-");
    let custom = LocaleConfig {
        zero_placeholder: String::new(),
        ..LocaleConfig::default()
    };
    assert_eq!(format_amount(&custom, 0), "");
}

#[test]
fn sign_style_with_comma_grouping() {
    let locale = LocaleConfig {
        grouping_separator: ',',
        negative_style: NegativeStyle::Sign,
        ..LocaleConfig::default()
    };
    assert_eq!(format_amount(&locale, -1_500_000), "-1,500,000");
    assert_eq!(format_amount(&locale, 1_500_000), "1,500,000");
}

#[test]
fn locale_deserializes_from_partial_json() {
    let locale: LocaleConfig =
        serde_json::from_str(r#"{ "negative_style": "sign", "currency_symbol": "Rp" }"#).unwrap();
    assert_eq!(locale.grouping_separator, '.');
    assert_eq!(format_amount(&locale, -2_000), "-Rp 2.000");
}
