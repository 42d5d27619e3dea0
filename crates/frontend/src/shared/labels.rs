//! Display labels for wire codes.

/// `"SNAKE_CASE"` → `"Snake Case"`
pub fn format_label(code: &str) -> String {
    code.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let lower = part.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Text for an optional field, `-` when absent or blank
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Formatted code, `-` when absent or blank
pub fn label_or_dash(code: Option<&str>) -> String {
    match code.map(str::trim) {
        Some(c) if !c.is_empty() => format_label(c),
        _ => "-".to_string(),
    }
}

/// Comma-separated labels of a code list, `-` when empty
pub fn join_labels(codes: &[String]) -> String {
    if codes.is_empty() {
        return "-".to_string();
    }
    codes
        .iter()
        .map(|c| format_label(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Optional number as text, `-` when absent
pub fn num_or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_screaming_snake_case() {
        assert_eq!(format_label("FOUR_WHEELER"), "Four Wheeler");
        assert_eq!(format_label("REQUEST_CHANGES"), "Request Changes");
        assert_eq!(format_label("car"), "Car");
        assert_eq!(format_label("__A__B"), "A B");
        assert_eq!(format_label(""), "");
    }

    #[test]
    fn dash_for_missing_values() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("Pune")), "Pune");
        assert_eq!(label_or_dash(Some("DEALER")), "Dealer");
        assert_eq!(label_or_dash(None), "-");
        assert_eq!(num_or_dash(Some(2019)), "2019");
        assert_eq!(num_or_dash::<u32>(None), "-");
    }

    #[test]
    fn joins_code_lists() {
        assert_eq!(join_labels(&[]), "-");
        assert_eq!(
            join_labels(&["FOUR_WHEELER".to_string(), "TWO_WHEELER".to_string()]),
            "Four Wheeler, Two Wheeler"
        );
    }
}
