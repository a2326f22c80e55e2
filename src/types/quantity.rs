//! Defines `Quantity`, the named accessor used to pick one measured value out of an
//! [`Observation`], together with its dashboard label, unit and display precision.

use crate::types::observation::Observation;
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A measured quantity of an [`Observation`].
///
/// Statistics, chart series and axis domains are all computed per quantity through
/// [`Quantity::value`].
///
/// # Wind speed labels
///
/// The dashboard shows a *sustained* and a *gust* wind speed box, but the station export
/// carries a single `windspeedmph` field. [`Quantity::WindSpeedSustained`] and
/// [`Quantity::WindSpeedGust`] therefore read the same field and always produce identical
/// statistics. They stay separate so that a source with a distinct gust field can be wired in
/// without changing callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quantity {
    /// Air temperature, °F.
    Temperature,
    /// Dew point, °F.
    DewPoint,
    /// Relative humidity, %.
    Humidity,
    /// Barometric pressure, inHg.
    Pressure,
    /// Sustained wind speed, mph.
    WindSpeedSustained,
    /// Gust wind speed, mph. Same source field as [`Quantity::WindSpeedSustained`].
    WindSpeedGust,
    /// Rainfall rate, in.
    RainfallRate,
    /// Wind chill, °F.
    WindChill,
    /// UV index.
    UvIndex,
}

impl Quantity {
    /// The quantities that get an info box, in dashboard order.
    pub const INFO_BOXES: [Quantity; 7] = [
        Quantity::Temperature,
        Quantity::DewPoint,
        Quantity::Humidity,
        Quantity::Pressure,
        Quantity::WindSpeedSustained,
        Quantity::WindSpeedGust,
        Quantity::RainfallRate,
    ];

    /// The quantities drawn on the shared-axis time plot.
    pub const TIME_PLOT: [Quantity; 3] =
        [Quantity::Temperature, Quantity::DewPoint, Quantity::Humidity];

    /// Reads this quantity from an observation. Integer fields are widened to `f64`.
    pub fn value(&self, observation: &Observation) -> f64 {
        match self {
            Quantity::Temperature => observation.temperature,
            Quantity::DewPoint => observation.dew_point,
            Quantity::Humidity => observation.humidity,
            Quantity::Pressure => observation.pressure,
            Quantity::WindSpeedSustained | Quantity::WindSpeedGust => observation.wind_speed,
            Quantity::RainfallRate => observation.rainfall_rate,
            Quantity::WindChill => observation.wind_chill,
            Quantity::UvIndex => f64::from(observation.uv_index),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quantity::Temperature => "Temperature",
            Quantity::DewPoint => "Dew Point",
            Quantity::Humidity => "Humidity",
            Quantity::Pressure => "Pressure",
            Quantity::WindSpeedSustained => "Wind Speed (Sustained)",
            Quantity::WindSpeedGust => "Wind Speed (Gust)",
            Quantity::RainfallRate => "Rain",
            Quantity::WindChill => "Wind Chill",
            Quantity::UvIndex => "UV Index",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::Temperature | Quantity::DewPoint | Quantity::WindChill => "°F",
            Quantity::Humidity => "%",
            Quantity::Pressure | Quantity::RainfallRate => "in",
            Quantity::WindSpeedSustained | Quantity::WindSpeedGust => "mph",
            Quantity::UvIndex => "",
        }
    }

    /// Number of decimals shown for this quantity. Pressure needs two, UV index none.
    pub fn precision(&self) -> usize {
        match self {
            Quantity::Pressure => 2,
            Quantity::UvIndex => 0,
            _ => 1,
        }
    }

    /// Formats `value` with this quantity's precision and unit, e.g. `72.3°F` or `29.92 in`.
    pub fn format_value(&self, value: f64) -> String {
        let number = format!("{:.*}", self.precision(), value);
        match self.unit() {
            "" => number,
            unit @ ("°F" | "%") => format!("{number}{unit}"),
            unit => format!("{number} {unit}"),
        }
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> Observation {
        Observation {
            timestamp: Utc.with_ymd_and_hms(2025, 7, 9, 0, 0, 0).unwrap(),
            temperature: 72.3,
            humidity: 55.0,
            dew_point: 54.1,
            pressure: 29.921,
            wind_chill: 71.0,
            wind_speed: 8.5,
            wind_direction: 180,
            rainfall_rate: 0.02,
            uv_index: 6,
        }
    }

    #[test]
    fn gust_and_sustained_read_the_same_field() {
        let obs = sample();
        assert_eq!(Quantity::WindSpeedGust.value(&obs), 8.5);
        assert_eq!(Quantity::WindSpeedSustained.value(&obs), 8.5);
    }

    #[test]
    fn uv_index_is_widened() {
        assert_eq!(Quantity::UvIndex.value(&sample()), 6.0);
    }

    #[test]
    fn format_uses_precision_and_unit() {
        assert_eq!(Quantity::Temperature.format_value(72.33), "72.3°F");
        assert_eq!(Quantity::Humidity.format_value(55.0), "55.0%");
        assert_eq!(Quantity::Pressure.format_value(29.921), "29.92 in");
        assert_eq!(Quantity::WindSpeedGust.format_value(8.46), "8.5 mph");
        assert_eq!(Quantity::UvIndex.format_value(6.0), "6");
    }

    #[test]
    fn info_boxes_cover_the_dashboard() {
        let labels: Vec<&str> = Quantity::INFO_BOXES.iter().map(Quantity::label).collect();
        assert_eq!(
            labels,
            [
                "Temperature",
                "Dew Point",
                "Humidity",
                "Pressure",
                "Wind Speed (Sustained)",
                "Wind Speed (Gust)",
                "Rain"
            ]
        );
    }
}
