//! Display rendering of values according to an inferred [`FieldFormat`].
//!
//! This is the adapter between the neutral field configuration and a text
//! rendering target. Links use `[text](target)` markup; values that do not
//! fit the format are rendered as their plain string form.

use crate::detect::{as_number, parse_date};
use grid_core::{FieldFormat, FieldValue};

/// Render values for display.
pub trait RenderValue {
    /// Render a single value. Missing values render as the empty string.
    fn render(&self, value: &FieldValue) -> String;
}

impl RenderValue for FieldFormat {
    fn render(&self, value: &FieldValue) -> String {
        if value.is_null() {
            return String::new();
        }

        match self {
            FieldFormat::Plain | FieldFormat::Boolean => value.to_display_string(),
            FieldFormat::Currency { code } => match as_number(value) {
                Some(n) => format_currency(n, code),
                None => value.to_display_string(),
            },
            FieldFormat::Percent { divisor } => match as_number(value) {
                Some(n) => format!("{:.2}%", n / divisor * 100.0),
                None => value.to_display_string(),
            },
            FieldFormat::Number { decimals } => match as_number(value) {
                Some(n) => format!("{:.*}", *decimals, n),
                None => value.to_display_string(),
            },
            FieldFormat::Date => match parse_date(value) {
                Some(dt) => dt.format("%b %-d, %Y").to_string(),
                None => value.to_display_string(),
            },
            FieldFormat::List { separator } => match value.as_array() {
                Some(items) => items
                    .iter()
                    .map(FieldValue::to_display_string)
                    .collect::<Vec<_>>()
                    .join(separator.as_str()),
                None => value.to_display_string(),
            },
            FieldFormat::Json => serde_json::Value::from(value).to_string(),
            FieldFormat::MailTo => {
                let address = value.to_display_string();
                format!("[{address}](mailto:{address})")
            }
            FieldFormat::Link => {
                let text = value.to_display_string();
                let target = if text.to_lowercase().starts_with("www.") {
                    format!("https://{text}")
                } else {
                    text.clone()
                };
                format!("[{text}]({target})")
            }
        }
    }
}

/// Symbol for a currency code; unknown codes print as a `CODE ` prefix.
fn currency_symbol(code: &str) -> String {
    match code {
        "USD" | "CAD" | "AUD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        other => format!("{other} "),
    }
}

/// Format an amount with a currency symbol, thousands separators and 2 decimals.
pub fn format_currency(amount: f64, code: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!(
        "{sign}{}{}.{fraction}",
        currency_symbol(code),
        group_thousands(whole)
    )
}

/// Insert `,` between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
