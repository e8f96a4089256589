//! Display formatting for integer currency amounts.

use serde::{Deserialize, Serialize};

use crate::ledger::Amount;

/// Locale-aware formatting preferences for amount cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub grouping_separator: char,
    /// Rendered in place of a zero amount.
    pub zero_placeholder: String,
    pub negative_style: NegativeStyle,
    /// Optional prefix such as `Rp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            grouping_separator: '.',
            zero_placeholder: "-".into(),
            negative_style: NegativeStyle::Parentheses,
            currency_symbol: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NegativeStyle {
    Sign,
    Parentheses,
}

/// Formats an amount with grouping separators; zero becomes the placeholder.
pub fn format_amount(locale: &LocaleConfig, amount: Amount) -> String {
    if amount == 0 {
        return locale.zero_placeholder.clone();
    }
    let grouped = group_digits(&amount.unsigned_abs().to_string(), locale.grouping_separator);
    let body = match &locale.currency_symbol {
        Some(symbol) => format!("{symbol} {grouped}"),
        None => grouped,
    };
    if amount < 0 {
        match locale.negative_style {
            NegativeStyle::Sign => format!("-{body}"),
            NegativeStyle::Parentheses => format!("({body})"),
        }
    } else {
        body
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_locale_separator() {
        let locale = LocaleConfig::default();
        assert_eq!(format_amount(&locale, 2_000_000), "2.000.000");
        assert_eq!(format_amount(&locale, 999), "999");
        assert_eq!(format_amount(&locale, 1_000), "1.000");

        let english = LocaleConfig {
            grouping_separator: ',',
            ..LocaleConfig::default()
        };
        assert_eq!(format_amount(&english, 1_234_567), "1,234,567");
    }

    #[test]
    fn zero_uses_placeholder() {
        let locale = LocaleConfig {
            zero_placeholder: "nihil".into(),
            ..LocaleConfig::default()
        };
        assert_eq!(format_amount(&locale, 0), "nihil");
    }

    #[test]
    fn negatives_follow_style() {
        let mut locale = LocaleConfig::default();
        assert_eq!(format_amount(&locale, -500_000), "(500.000)");
        locale.negative_style = NegativeStyle::Sign;
        locale.currency_symbol = Some("Rp".into());
        assert_eq!(format_amount(&locale, -500_000), "-Rp 500.000");
        assert_eq!(format_amount(&locale, i64::MIN), "-Rp 9.223.372.036.854.775.808");
    }
}
