//! Time related utils.

use crate::Error;
use crate::Result;

/// DateTime in UTC, the only time type used for signing.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Create a new DateTime of now.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Format time into ISO 8601 with separators and second precision: `2022-03-13T07:20:04Z`
///
/// This is the `Timestamp` format the Product Advertising API verifies.
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Parse time from RFC3339, like `2022-03-13T07:20:04Z` or `2022-03-13T07:20:04.123+08:00`.
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|v| v.with_timezone(&chrono::Utc))
        .map_err(|e| Error::unexpected(format!("parse {s} into rfc3339 failed")).with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("2024-01-01T00:00:00Z", "2024-01-01T00:00:00Z"; "utc")]
    #[test_case("2024-01-01T00:00:00.987Z", "2024-01-01T00:00:00Z"; "fraction dropped")]
    #[test_case("2024-01-01T08:30:05+08:00", "2024-01-01T00:30:05Z"; "offset normalized")]
    fn test_format_iso8601(input: &str, expected: &str) {
        let t = parse_rfc3339(input).expect("input must be valid");
        assert_eq!(format_iso8601(t), expected);
    }

    #[test]
    fn test_parse_rfc3339_invalid() {
        assert!(parse_rfc3339("Mon, 15 Aug 2022 16:50:12 GMT").is_err());
    }
}
