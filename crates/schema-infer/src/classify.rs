//! Per-field classification.
//!
//! Rules run in a fixed order and the first one that matches wins:
//!
//! 1. every value missing      → empty
//! 2. booleans                 → boolean
//! 3. numbers                  → numeric (currency / percent / plain by name)
//! 4. date name or date values → temporal
//! 5. any array                → array
//! 6. any object               → object
//! 7. email name or any email  → email
//! 8. url name or any url      → url
//! 9. low cardinality          → enumerated
//! 10. otherwise               → text
//!
//! Several rules accept either a name hint or a value shape, so a field can
//! be claimed by its name alone.

use crate::detect::{
    as_number, is_boolean_like, is_date_like, looks_like_email, looks_like_url, name_hints,
    CURRENCY_HINTS, EMAIL_HINTS, PERCENT_HINTS, TEMPORAL_HINTS, URL_HINTS,
};
use crate::label::format_label;
use grid_core::{EditorKind, FieldConfig, FieldFormat, FieldKind, FilterKind, FieldValue};

/// Most distinct values an enumerated field may have.
pub const MAX_ENUM_VALUES: usize = 10;

/// Classify one field from its sampled values.
///
/// `values` holds the field's value from every sampled record that carries
/// the key, in sample order; missing values are `FieldValue::Null`.
pub fn classify_field(key: &str, values: &[&FieldValue], currency: &str) -> FieldConfig {
    let present: Vec<&FieldValue> = values.iter().copied().filter(|v| !v.is_null()).collect();
    let (kind, filter, editor, format) = classify(key, &present, currency);

    FieldConfig {
        key: key.to_string(),
        label: format_label(key),
        kind,
        filter,
        editor,
        format,
    }
}

fn classify(
    key: &str,
    present: &[&FieldValue],
    currency: &str,
) -> (FieldKind, FilterKind, EditorKind, FieldFormat) {
    if present.is_empty() {
        return (
            FieldKind::Empty,
            FilterKind::Text,
            EditorKind::Text,
            FieldFormat::Plain,
        );
    }

    if present.iter().all(|v| is_boolean_like(v)) {
        return (
            FieldKind::Boolean,
            FilterKind::Boolean,
            EditorKind::Checkbox,
            FieldFormat::Boolean,
        );
    }

    let numbers: Option<Vec<f64>> = present.iter().map(|v| as_number(v)).collect();
    if let Some(numbers) = numbers {
        return (
            FieldKind::Numeric,
            FilterKind::Number,
            EditorKind::Number,
            numeric_format(key, &numbers, currency),
        );
    }

    if name_hints(key, TEMPORAL_HINTS) || present.iter().all(|v| is_date_like(v)) {
        return (
            FieldKind::Temporal,
            FilterKind::DateRange,
            EditorKind::Date,
            FieldFormat::Date,
        );
    }

    if present.iter().any(|v| matches!(v, FieldValue::Array(_))) {
        return (
            FieldKind::Array,
            FilterKind::Text,
            EditorKind::LargeText,
            FieldFormat::List {
                separator: ", ".to_string(),
            },
        );
    }

    if present.iter().any(|v| matches!(v, FieldValue::Object(_))) {
        return (
            FieldKind::Object,
            FilterKind::Text,
            EditorKind::LargeText,
            FieldFormat::Json,
        );
    }

    if name_hints(key, EMAIL_HINTS) || present.iter().any(|v| looks_like_email(v)) {
        return (
            FieldKind::Email,
            FilterKind::Text,
            EditorKind::Text,
            FieldFormat::MailTo,
        );
    }

    if name_hints(key, URL_HINTS) || present.iter().any(|v| looks_like_url(v)) {
        return (
            FieldKind::Url,
            FilterKind::Text,
            EditorKind::Text,
            FieldFormat::Link,
        );
    }

    let distinct = distinct_in_order(present);
    if distinct.len() <= MAX_ENUM_VALUES && (distinct.len() as f64) < present.len() as f64 / 2.0 {
        return (
            FieldKind::Enumerated {
                values: distinct.clone(),
            },
            FilterKind::Set {
                values: distinct.clone(),
            },
            EditorKind::Select { values: distinct },
            FieldFormat::Plain,
        );
    }

    (
        FieldKind::Text,
        FilterKind::Text,
        EditorKind::Text,
        FieldFormat::Plain,
    )
}

/// Pick the numeric display format from the key and the whole sampled batch.
///
/// The percent divisor is decided once for the field: if any sampled value
/// exceeds 1 the values are taken as already scaled to percent.
fn numeric_format(key: &str, numbers: &[f64], currency: &str) -> FieldFormat {
    if name_hints(key, CURRENCY_HINTS) {
        return FieldFormat::Currency {
            code: currency.to_string(),
        };
    }

    if name_hints(key, PERCENT_HINTS) {
        let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let divisor = if max > 1.0 { 100.0 } else { 1.0 };
        return FieldFormat::Percent { divisor };
    }

    FieldFormat::Number { decimals: 2 }
}

/// Stringified values with duplicates removed, in first-seen order.
fn distinct_in_order(values: &[&FieldValue]) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::new();
    for value in values {
        let s = value.to_display_string();
        if !distinct.contains(&s) {
            distinct.push(s);
        }
    }
    distinct
}
