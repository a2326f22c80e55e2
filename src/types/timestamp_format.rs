//! Timestamp parsing for the `dateutc` field of raw records.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::fmt::{Display, Formatter};

/// How the `dateutc` string of a raw record is parsed.
///
/// The station's export has historically been decoded with a date-only pattern, which drops
/// any time-of-day present in the source: two readings taken on the same day become
/// indistinguishable by timestamp. [`TimestampFormat::DateOnly`] keeps that behaviour for
/// compatibility with existing files. Sources with full-precision timestamps should opt in
/// to [`TimestampFormat::Rfc3339`] explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimestampFormat {
    /// `yyyy-MM-dd`, resolved to midnight UTC. Strings with a time component are rejected.
    #[default]
    DateOnly,
    /// RFC 3339 / ISO 8601 with an offset, e.g. `2025-07-09T14:30:00Z`. Converted to UTC.
    Rfc3339,
}

impl TimestampFormat {
    /// The human-readable pattern, used in decode errors.
    pub fn pattern(&self) -> &'static str {
        match self {
            TimestampFormat::DateOnly => "yyyy-MM-dd",
            TimestampFormat::Rfc3339 => "RFC 3339",
        }
    }

    /// Parses `value` according to this format.
    ///
    /// Returns `None` if the string does not match.
    pub fn parse(&self, value: &str) -> Option<DateTime<Utc>> {
        match self {
            TimestampFormat::DateOnly => {
                let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
                let midnight = date.and_hms_opt(0, 0, 0)?;
                Some(DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc))
            }
            TimestampFormat::Rfc3339 => DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl Display for TimestampFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_only_resolves_to_midnight_utc() {
        let parsed = TimestampFormat::DateOnly.parse("2025-07-09");
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2025, 7, 9, 0, 0, 0).unwrap()));
    }

    #[test]
    fn date_only_rejects_time_component() {
        assert_eq!(TimestampFormat::DateOnly.parse("2025-07-09T14:30:00Z"), None);
        assert_eq!(TimestampFormat::DateOnly.parse("09/07/2025"), None);
        assert_eq!(TimestampFormat::DateOnly.parse("2025-02-30"), None);
    }

    #[test]
    fn rfc3339_keeps_time_of_day_and_converts_offset() {
        let parsed = TimestampFormat::Rfc3339.parse("2025-07-09T16:30:00+02:00");
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2025, 7, 9, 14, 30, 0).unwrap()));
        assert_eq!(TimestampFormat::Rfc3339.parse("2025-07-09"), None);
    }
}
