//! Docket Utils - Utility Functions
//!
//! Timestamp helpers shared by the store and the command line entry point.
//!
//! @version 0.1.0
//! @author Docket Development Team

use chrono::{DateTime, Utc};

// =============================================================================
// Timestamp Functions
// =============================================================================

/// Parse an RFC 3339 timestamp and normalize it to UTC.
pub fn parse_timestamp(s: &str) -> crate::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| crate::DocketError::InvalidTimestamp(format!("{}: {}", s, e)))
}

/// Parse an optional RFC 3339 timestamp.
pub fn parse_optional_timestamp(s: Option<&str>) -> crate::Result<Option<DateTime<Utc>>> {
    s.map(parse_timestamp).transpose()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_utc() {
        let ts = parse_timestamp("2024-07-17T10:15:30Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 7, 17, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_offset_normalizes_to_utc() {
        let ts = parse_timestamp("2024-07-17T12:15:30+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 7, 17, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_keeps_millis() {
        let ts = parse_timestamp("2024-07-17T10:15:30.250Z").unwrap();
        assert_eq!(ts.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_invalid() {
        let result = parse_timestamp("17/07/2024");
        assert!(matches!(result, Err(crate::DocketError::InvalidTimestamp(_))));
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(parse_optional_timestamp(None).unwrap(), None);
        assert!(parse_optional_timestamp(Some("2024-07-16T00:00:00Z"))
            .unwrap()
            .is_some());
        assert!(parse_optional_timestamp(Some("nope")).is_err());
    }
}
