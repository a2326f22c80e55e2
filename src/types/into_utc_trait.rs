use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Anything that can name a single UTC instant for a range bound.
///
/// Naive values are interpreted as UTC. A `NaiveDate` resolves to midnight, which matches how
/// date-only observation timestamps are stored.
pub trait IntoUtcDateTime {
    fn into_utc(self) -> DateTime<Utc>;
}

impl<Tz: TimeZone> IntoUtcDateTime for DateTime<Tz> {
    fn into_utc(self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

impl IntoUtcDateTime for NaiveDateTime {
    fn into_utc(self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self)
    }
}

impl IntoUtcDateTime for NaiveDate {
    fn into_utc(self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.and_time(chrono::NaiveTime::MIN))
    }
}
