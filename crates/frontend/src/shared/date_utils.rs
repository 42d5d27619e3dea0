/// Utilities for date and time formatting
///
/// The backend sends ISO dates, with or without a time part.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Format an ISO date as "Mon Jan 01 2024"
/// Example: "2024-01-01T10:00:00Z" -> "Mon Jan 01 2024"
pub fn format_joined(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%a %b %d %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Format an ISO date as DD.MM.YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%d.%m.%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Same as [`format_joined`] for optional values, `-` when absent
pub fn format_joined_opt(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => format_joined(raw),
        None => "-".to_string(),
    }
}

/// Same as [`format_date`] for optional values, `-` when absent
pub fn format_date_opt(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => format_date(raw),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_joined() {
        assert_eq!(format_joined("2024-01-01"), "Mon Jan 01 2024");
        assert_eq!(format_joined("2024-03-15T14:02:26.123Z"), "Fri Mar 15 2024");
        assert_eq!(format_joined("2024-03-15T14:02:26.123"), "Fri Mar 15 2024");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_joined("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_joined_opt(None), "-");
        assert_eq!(format_joined_opt(Some("")), "-");
    }

    #[test]
    fn missing_dates_render_as_dash() {
        assert_eq!(format_date_opt(None), "-");
        assert_eq!(format_date_opt(Some(" ")), "-");
        assert_eq!(format_joined_opt(Some("")), "-");
        assert_eq!(format_date_opt(Some("2025-06-30")), "30.06.2025");
    }
}
