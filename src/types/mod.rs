pub mod into_utc_trait;
pub mod observation;
pub mod quantity;
pub mod time_range;
pub mod timestamp_format;
