//! Legacy delayed-delivery timestamp parsing.
//!
//! Offline messages and history arrive with timestamps in a handful of
//! near-identical shapes (XEP-0091 `20231005T12:34:56`, XEP-0082
//! `2023-10-05T12:34:56Z`, with or without fractional seconds). This
//! normalizes them all onto one `strptime`-style format.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Error type for timestamp parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("unparseable timestamp: {0:?}")]
    InvalidTimestamp(String),
}

/// Parse a delayed-delivery timestamp.
///
/// Normalizes before parsing `%Y%m%dT%H:%M:%S`:
/// - fractional seconds (everything after the first `.`) are dropped
/// - date separators (`-`) are removed
/// - a trailing `z`/`Z` UTC marker is removed
pub fn parse_legacy_timestamp(text: &str) -> Result<NaiveDateTime, TimeError> {
    let without_fraction = text.split('.').next().unwrap_or(text);
    let normalized: String = without_fraction.chars().filter(|c| *c != '-').collect();
    let normalized = normalized.trim_end_matches(['z', 'Z']);
    NaiveDateTime::parse_from_str(normalized, "%Y%m%dT%H:%M:%S")
        .map_err(|_| TimeError::InvalidTimestamp(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn plain_legacy_format() {
        let dt = parse_legacy_timestamp("20231005T12:34:56").unwrap();
        assert_eq!(
            (dt.year(), dt.month(), dt.day()),
            (2023, 10, 5)
        );
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (12, 34, 56));
    }

    #[test]
    fn dashed_date_is_normalized() {
        let a = parse_legacy_timestamp("2023-10-05T12:34:56").unwrap();
        let b = parse_legacy_timestamp("20231005T12:34:56").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn utc_marker_is_dropped() {
        let dt = parse_legacy_timestamp("2023-10-05T12:34:56Z").unwrap();
        assert_eq!(dt.second(), 56);
        assert!(parse_legacy_timestamp("20231005T12:34:56z").is_ok());
    }

    #[test]
    fn milliseconds_are_dropped() {
        let dt = parse_legacy_timestamp("2023-10-05T12:34:56.789Z").unwrap();
        assert_eq!(dt.second(), 56);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            parse_legacy_timestamp("yesterday"),
            Err(TimeError::InvalidTimestamp(_))
        ));
        assert!(parse_legacy_timestamp("").is_err());
        assert!(parse_legacy_timestamp("20231005").is_err());
    }
}
