//! Defines the `Observation` record, one weather sample taken by the station.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single timestamped weather sample with every measured quantity.
///
/// All fields are required; there is no missing-value sentinel. Records that lack a field
/// are rejected while decoding (see [`crate::DecodeError`]) rather than stored partially.
///
/// Observations are immutable value objects. They are `Copy`, so derived subsets can own
/// their elements without borrowing from the [`crate::DataStore`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Sample time in UTC. Not guaranteed to be unique.
    pub timestamp: DateTime<Utc>,
    /// Air temperature in °F.
    pub temperature: f64,
    /// Relative humidity in %.
    pub humidity: f64,
    /// Dew point in °F.
    pub dew_point: f64,
    /// Barometric pressure in inHg.
    pub pressure: f64,
    /// Wind chill in °F.
    pub wind_chill: f64,
    /// Wind speed in mph.
    pub wind_speed: f64,
    /// Wind direction in degrees, meteorological convention: 0/360 = North, increasing clockwise.
    ///
    /// This is *not* the angle convention used by [`crate::polar_to_xy`]; see the
    /// [`crate::WindPoint`] docs for how the two meet.
    pub wind_direction: i32,
    /// Rainfall rate in inches.
    pub rainfall_rate: f64,
    /// UV index.
    pub uv_index: i32,
}
