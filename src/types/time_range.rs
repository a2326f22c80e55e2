//! Defines the active time window (`TimeRange`), the dashboard's preset windows
//! (`TimeFilter`) and the tick label style chosen from a window's length.

use crate::types::into_utc_trait::IntoUtcDateTime;
use crate::types::observation::Observation;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

/// An inclusive `[start, end]` window of UTC instants.
///
/// `start <= end` is expected but not enforced: an inverted range is a legal value that
/// simply matches no observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a range from any pair of chrono values that resolve to UTC instants.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, TimeZone, Utc};
    /// use weather_view::TimeRange;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 7, 9).unwrap();
    /// let range = TimeRange::new(day, Utc.with_ymd_and_hms(2025, 7, 9, 23, 59, 59).unwrap());
    /// assert!(range.contains(Utc.with_ymd_and_hms(2025, 7, 9, 0, 0, 0).unwrap()));
    /// ```
    pub fn new(start: impl IntoUtcDateTime, end: impl IntoUtcDateTime) -> Self {
        Self {
            start: start.into_utc(),
            end: end.into_utc(),
        }
    }

    /// A degenerate range covering exactly one instant.
    pub fn at(instant: impl IntoUtcDateTime) -> Self {
        let instant = instant.into_utc();
        Self {
            start: instant,
            end: instant,
        }
    }

    /// The window ending at `now` and reaching back `length`.
    pub fn ending_at(now: DateTime<Utc>, length: Duration) -> Self {
        let start = now.checked_sub_signed(length).unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { start, end: now }
    }

    /// `true` if `start <= instant <= end`. Always `false` for an inverted range.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// `true` if `start > end`.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// `end - start`. Negative for an inverted range.
    pub fn length(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }

    /// Picks how chart ticks should be labelled for this window.
    ///
    /// Windows up to and including 24 hours show the time of day; longer windows show the
    /// day and month.
    pub fn tick_style(&self) -> TickStyle {
        if self.length() <= Duration::hours(24) {
            TickStyle::TimeOfDay
        } else {
            TickStyle::DayMonth
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ..= {}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

/// The preset windows offered by the dashboard's quick filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeFilter {
    /// The 24 hours ending now.
    LastDay,
    /// The 7 days ending now. This is the dashboard's initial window.
    LastWeek,
    /// Everything the store holds, first to last observation.
    All,
}

impl TimeFilter {
    /// Every preset, in menu order.
    pub const ALL: [TimeFilter; 3] = [TimeFilter::LastDay, TimeFilter::LastWeek, TimeFilter::All];

    pub fn label(&self) -> &'static str {
        match self {
            TimeFilter::LastDay => "Last Day",
            TimeFilter::LastWeek => "Last Week",
            TimeFilter::All => "All",
        }
    }

    /// Resolves the preset against the current time and the loaded observations.
    ///
    /// [`TimeFilter::All`] spans the first to the last observation in stored order. With no
    /// observations it collapses to `now..=now`.
    pub fn range(&self, now: DateTime<Utc>, observations: &[Observation]) -> TimeRange {
        match self {
            TimeFilter::LastDay => TimeRange::ending_at(now, Duration::days(1)),
            TimeFilter::LastWeek => TimeRange::ending_at(now, Duration::days(7)),
            TimeFilter::All => match (observations.first(), observations.last()) {
                (Some(first), Some(last)) => TimeRange {
                    start: first.timestamp,
                    end: last.timestamp,
                },
                _ => TimeRange::at(now),
            },
        }
    }
}

impl Display for TimeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How x-axis tick labels are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TickStyle {
    /// Short time of day, e.g. `3:05 PM`.
    TimeOfDay,
    /// Day and abbreviated month, e.g. `9 Jul`.
    DayMonth,
}

impl TickStyle {
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        match self {
            TickStyle::TimeOfDay => instant.format("%-I:%M %p").to_string(),
            TickStyle::DayMonth => instant.format("%-d %b").to_string(),
        }
    }
}
