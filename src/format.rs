//! Display Helpers

use chrono::{DateTime, NaiveDateTime};

const DISPLAY: &str = "%d/%m/%Y, %H:%M:%S";

/// Render a backend timestamp, or "N/A" when absent.
///
/// Accepts RFC 3339, RFC 2822 (`Tue, 14 Oct 2025 09:30:00 GMT`) and naive
/// `YYYY-MM-DD HH:MM:SS` forms; anything else is shown as sent.
pub fn timestamp(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "N/A".to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return dt.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY).to_string();
        }
    }
    raw.to_string()
}

/// Text or a placeholder for blank cells
pub fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_formats() {
        assert_eq!(timestamp(Some("2025-10-14T09:30:00Z")), "14/10/2025, 09:30:00");
        assert_eq!(timestamp(Some("Tue, 14 Oct 2025 09:30:00 GMT")), "14/10/2025, 09:30:00");
        assert_eq!(timestamp(Some("2025-10-14 09:30:00")), "14/10/2025, 09:30:00");
        assert_eq!(timestamp(Some("2025-10-14T09:30:00.250")), "14/10/2025, 09:30:00");
    }

    #[test]
    fn test_timestamp_fallbacks() {
        assert_eq!(timestamp(None), "N/A");
        assert_eq!(timestamp(Some("  ")), "N/A");
        assert_eq!(timestamp(Some("next week")), "next week");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(Some("Acme"), "N/A"), "Acme");
        assert_eq!(or_placeholder(Some(" "), "—"), "—");
        assert_eq!(or_placeholder(None, "-"), "-");
    }
}
