use chrono::DateTime;

/// "2024-06-01T10:15:00Z" -> "Jun 1, 2024 10:15". Unparseable input is
/// returned unchanged.
pub fn format_timestamp(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

/// "2024-01-15T09:30:00Z" -> "January 15, 2024"
pub fn format_date_long(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.format("%B %-d, %Y").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-06-01T10:15:00Z"), "Jun 1, 2024 10:15");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_date_long() {
        assert_eq!(format_date_long("2024-01-15T09:30:00Z"), "January 15, 2024");
    }
}
