//! Field configuration types.
//!
//! A [`FieldConfig`] is the neutral intermediate representation a tabular
//! renderer consumes: the field key, a human-readable label, the inferred
//! classification, and the filter, editor and display format that go with it.
//! Adapting it to a concrete grid widget is left to the rendering layer.

use serde::Serialize;

/// Inferred classification of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Every sampled value was missing
    Empty,
    /// Booleans or the literal strings "true"/"false"
    Boolean,
    /// Numbers or numeric strings
    Numeric,
    /// Dates and timestamps
    Temporal,
    /// Lists of values
    Array,
    /// Nested objects
    Object,
    /// Email addresses
    Email,
    /// Web links
    Url,
    /// Low-cardinality closed choice set, in first-seen order
    Enumerated { values: Vec<String> },
    /// Free text
    Text,
}

impl FieldKind {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Boolean => "boolean",
            Self::Numeric => "numeric",
            Self::Temporal => "temporal",
            Self::Array => "array",
            Self::Object => "object",
            Self::Email => "email",
            Self::Url => "url",
            Self::Enumerated { .. } => "enumerated",
            Self::Text => "text",
        }
    }
}

/// Filter affordance for a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterKind {
    /// Free-text contains/equals filter
    Text,
    /// Numeric comparison filter
    Number,
    /// Date range filter
    DateRange,
    /// True/false filter
    Boolean,
    /// Pick from a fixed set of values
    Set { values: Vec<String> },
}

/// Cell editor affordance for a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorKind {
    /// Single-line text box
    Text,
    /// Numeric input
    Number,
    /// Checkbox
    Checkbox,
    /// Date picker
    Date,
    /// Multi-line text box for structured content
    LargeText,
    /// Drop-down over a fixed set of values
    Select { values: Vec<String> },
}

/// Display formatting rule for a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldFormat {
    /// Value printed as-is
    Plain,
    /// "true" / "false"
    Boolean,
    /// Money amount with a currency symbol and thousands separators
    Currency { code: String },
    /// Percentage; values are divided by `divisor` before being shown as a percent
    Percent { divisor: f64 },
    /// Fixed-point number
    Number { decimals: usize },
    /// Date shown as e.g. "Jan 5, 2024"
    Date,
    /// List elements joined with `separator`
    List { separator: String },
    /// Nested value serialized to JSON text
    Json,
    /// Mail-to hyperlink
    MailTo,
    /// External hyperlink
    Link,
}

/// Inferred configuration for a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Field key as it appears in the records
    pub key: String,
    /// Human-readable column header
    pub label: String,
    /// Inferred classification
    pub kind: FieldKind,
    /// Filter affordance
    pub filter: FilterKind,
    /// Editor affordance
    pub editor: EditorKind,
    /// Display format
    pub format: FieldFormat,
}

impl FieldConfig {
    /// Plain text column with no type-specific formatting.
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: FieldKind::Text,
            filter: FilterKind::Text,
            editor: EditorKind::Text,
            format: FieldFormat::Plain,
        }
    }

    /// Values of an enumerated column, if this is one.
    pub fn enumerated_values(&self) -> Option<&[String]> {
        match &self.kind {
            FieldKind::Enumerated { values } => Some(values),
            _ => None,
        }
    }
}
