//! Column label derivation.

/// Turn a field key into a human-readable label.
///
/// Underscores become spaces, a space is inserted before every uppercase
/// letter after the first character, the first character is uppercased, runs
/// of whitespace collapse to one space and the result is trimmed. Digits are
/// left attached to their neighbours.
///
/// ```
/// use schema_infer::format_label;
///
/// assert_eq!(format_label("instrumentType"), "Instrument Type");
/// assert_eq!(format_label("issue_date"), "Issue date");
/// assert_eq!(format_label("total_return_1y"), "Total return 1y");
/// ```
pub fn format_label(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 8);
    for (i, ch) in key.chars().enumerate() {
        if ch == '_' {
            spaced.push(' ');
        } else {
            if i > 0 && ch.is_uppercase() {
                spaced.push(' ');
            }
            spaced.push(ch);
        }
    }

    let mut chars = spaced.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    capitalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(format_label("instrumentType"), "Instrument Type");
        assert_eq!(
            format_label("issuerDefaultProbability"),
            "Issuer Default Probability"
        );
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(format_label("issue_date"), "Issue date");
        assert_eq!(format_label("total_return_1y"), "Total return 1y");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(format_label("cusip"), "Cusip");
        assert_eq!(format_label("ytm"), "Ytm");
    }

    #[test]
    fn test_digits_stay_attached() {
        assert_eq!(format_label("return1d"), "Return1d");
        assert_eq!(format_label("dv01"), "Dv01");
    }

    #[test]
    fn test_acronyms_are_split_per_letter() {
        assert_eq!(format_label("ISIN"), "I S I N");
        assert_eq!(format_label("pnlUSD"), "Pnl U S D");
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(format_label("__double__under__"), "double under");
        assert_eq!(format_label("snake_Camel"), "Snake Camel");
        assert_eq!(format_label(""), "");
    }

    #[test]
    fn test_leading_underscore_keeps_case() {
        // The first character is a space when capitalization happens
        assert_eq!(format_label("_id"), "id");
    }
}
