//! Per-quantity statistics (current, maximum, minimum and when they occurred) and chart
//! series extraction over a filtered subset.

use crate::types::observation::Observation;
use crate::types::quantity::Quantity;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Current, maximum and minimum value of one quantity over a subset.
///
/// `current` is the value on the last observation of the subset in stored order. It is not
/// bounded by `min`/`max` in any special way beyond being one of the scanned values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldStatistic {
    pub current: f64,
    pub max: f64,
    /// Timestamp of the first observation reaching `max`.
    pub max_at: DateTime<Utc>,
    pub min: f64,
    /// Timestamp of the first observation reaching `min`.
    pub min_at: DateTime<Utc>,
}

/// Computes the [`FieldStatistic`] of `quantity` over `subset`.
///
/// The subset is scanned once. When the extreme value occurs more than once, the earliest
/// occurrence (in stored order) provides the timestamp.
///
/// # Returns
///
/// `None` if `subset` is empty. "No data" is never reported as a zero value.
///
/// # Examples
///
/// ```
/// use weather_view::{field_statistic, Quantity};
///
/// assert_eq!(field_statistic(&[], Quantity::Temperature), None);
/// ```
pub fn field_statistic(subset: &[Observation], quantity: Quantity) -> Option<FieldStatistic> {
    let (first, rest) = subset.split_first()?;
    let first_value = quantity.value(first);

    let mut stat = FieldStatistic {
        current: first_value,
        max: first_value,
        max_at: first.timestamp,
        min: first_value,
        min_at: first.timestamp,
    };

    for observation in rest {
        let value = quantity.value(observation);
        // Strict comparisons keep the earliest occurrence on ties.
        if value > stat.max {
            stat.max = value;
            stat.max_at = observation.timestamp;
        }
        if value < stat.min {
            stat.min = value;
            stat.min_at = observation.timestamp;
        }
        stat.current = value;
    }

    Some(stat)
}

/// Statistics for every info-box quantity ([`Quantity::INFO_BOXES`]), each computed
/// independently.
pub fn info_statistics(subset: &[Observation]) -> Vec<(Quantity, Option<FieldStatistic>)> {
    Quantity::INFO_BOXES
        .into_iter()
        .map(|quantity| (quantity, field_statistic(subset, quantity)))
        .collect()
}

/// One (time, value) sample of a chart line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub at: DateTime<Utc>,
    pub value: f64,
}

/// Projects `subset` onto one quantity, keeping order. Used for the time and rain plots.
pub fn series(subset: &[Observation], quantity: Quantity) -> Vec<SeriesPoint> {
    subset
        .iter()
        .map(|observation| SeriesPoint {
            at: observation.timestamp,
            value: quantity.value(observation),
        })
        .collect()
}
