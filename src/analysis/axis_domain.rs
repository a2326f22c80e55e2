//! Chart axis domains: the time (x) window and the shared value (y) range of the
//! temperature / dew point / humidity plot, including the zoom and pan view transforms.
//!
//! Zoom and pan only move the *view*. They never change which observations are selected or
//! the statistics computed from them.

use crate::types::observation::Observation;
use crate::types::quantity::Quantity;
use crate::view::context::ViewContext;
use chrono::{DateTime, Duration, Utc};
use log::warn;
use ordered_float::OrderedFloat;
use serde::Serialize;

/// The x-axis window of a time chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeDomain {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeDomain {
    pub fn span(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }
}

/// The y-axis range of a value chart. Always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    /// Used whenever no finite range can be derived from the data.
    pub const FALLBACK: ValueDomain = ValueDomain {
        min: 0.0,
        max: 100.0,
    };
}

/// Both axes of the time plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisDomain {
    pub x: TimeDomain,
    pub y: ValueDomain,
}

/// Returns `zoom` if it is a usable scale factor, `1.0` (neutral) otherwise.
pub fn effective_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() && zoom > 0.0 {
        zoom
    } else {
        warn!("Ignoring invalid zoom factor {}, using 1.0", zoom);
        1.0
    }
}

/// Returns `pan` if it is finite, `0.0` otherwise.
pub fn effective_pan(pan: f64) -> f64 {
    if pan.is_finite() {
        pan
    } else {
        warn!("Ignoring invalid pan offset {}, using 0.0", pan);
        0.0
    }
}

/// A sanitised zoom and pan, shared by both axes of one query.
///
/// Invalid inputs are replaced (and logged) once, when the transform is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewTransform {
    pub zoom: f64,
    pub pan: f64,
}

impl ViewTransform {
    pub const NEUTRAL: ViewTransform = ViewTransform { zoom: 1.0, pan: 0.0 };

    /// See [`effective_zoom`] and [`effective_pan`] for how invalid values are replaced.
    pub fn new(zoom: f64, pan: f64) -> Self {
        Self {
            zoom: effective_zoom(zoom),
            pan: effective_pan(pan),
        }
    }
}

impl From<&ViewContext> for ViewTransform {
    fn from(context: &ViewContext) -> Self {
        ViewTransform::new(context.zoom, context.pan)
    }
}

fn milliseconds(value: f64) -> Option<Duration> {
    if !value.is_finite() {
        return None;
    }
    Duration::try_milliseconds(value.round() as i64)
}

/// Computes the x-axis window for `subset` under a zoom and pan.
///
/// The base window runs from the first to the last observation in stored order. An empty
/// subset collapses it to `[now, now]`. The transform is
///
/// ```text
/// span'  = span / zoom
/// start' = base_start - pan * span'
/// end'   = start' + span'
/// ```
///
/// # Arguments
///
/// * `subset` - The filtered observations.
/// * `zoom` - Scale factor; `1.0` is neutral, values above 1 zoom in. Invalid values
///   (non-finite or not positive) are treated as `1.0`.
/// * `pan` - Signed offset as a fraction of the zoomed span. Non-finite values are treated as `0.0`.
/// * `now` - Substitute for both bounds when `subset` is empty.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use weather_view::time_domain;
///
/// let now = Utc.with_ymd_and_hms(2025, 7, 9, 12, 0, 0).unwrap();
/// let domain = time_domain(&[], 2.0, 0.5, now);
/// assert_eq!((domain.start, domain.end), (now, now));
/// assert_eq!(domain.span(), Duration::zero());
/// ```
pub fn time_domain(subset: &[Observation], zoom: f64, pan: f64, now: DateTime<Utc>) -> TimeDomain {
    transformed_time_domain(subset, ViewTransform::new(zoom, pan), now)
}

pub(crate) fn transformed_time_domain(
    subset: &[Observation],
    transform: ViewTransform,
    now: DateTime<Utc>,
) -> TimeDomain {
    let base = match (subset.first(), subset.last()) {
        (Some(first), Some(last)) => TimeDomain {
            start: first.timestamp,
            end: last.timestamp,
        },
        _ => TimeDomain { start: now, end: now },
    };

    let ViewTransform { zoom, pan } = transform;
    let scaled_span = base.span().num_milliseconds() as f64 / zoom;

    let transformed = milliseconds(-pan * scaled_span)
        .and_then(|offset| base.start.checked_add_signed(offset))
        .and_then(|start| {
            let end = start.checked_add_signed(milliseconds(scaled_span)?)?;
            Some(TimeDomain { start, end })
        });

    match transformed {
        Some(domain) => domain,
        None => {
            warn!(
                "Time domain transform out of range (zoom {}, pan {}), using base window",
                zoom, pan
            );
            base
        }
    }
}

/// Computes the shared y-axis range of temperature, dew point and humidity over `subset`.
///
/// The joint minimum and maximum of the three quantities are scaled asymmetrically by the
/// zoom: `[min / zoom, max * zoom]`. This is deliberately not a symmetric scale around the
/// midpoint. For positive readings a factor above 1 widens the range on both sides, while
/// the time axis narrows.
///
/// # Returns
///
/// [`ValueDomain::FALLBACK`] (`[0, 100]`) if the subset is empty or the result would not be
/// finite.
///
/// # Examples
///
/// ```
/// use weather_view::{value_domain, ValueDomain};
///
/// assert_eq!(value_domain(&[], 1.0), ValueDomain::FALLBACK);
/// ```
pub fn value_domain(subset: &[Observation], zoom: f64) -> ValueDomain {
    scaled_value_domain(subset, effective_zoom(zoom))
}

pub(crate) fn scaled_value_domain(subset: &[Observation], zoom: f64) -> ValueDomain {
    let values = subset.iter().flat_map(|observation| {
        Quantity::TIME_PLOT
            .into_iter()
            .map(move |quantity| OrderedFloat(quantity.value(observation)))
    });

    let (Some(min), Some(max)) = (values.clone().min(), values.max()) else {
        return ValueDomain::FALLBACK;
    };
    if !min.0.is_finite() || !max.0.is_finite() {
        return ValueDomain::FALLBACK;
    }

    let domain = ValueDomain {
        min: min.0 / zoom,
        max: max.0 * zoom,
    };

    if domain.min.is_finite() && domain.max.is_finite() {
        domain
    } else {
        warn!(
            "Value domain [{}, {}] overflowed at zoom {}, using fallback",
            min.0, max.0, zoom
        );
        ValueDomain::FALLBACK
    }
}

/// Both axis domains for `subset` under the zoom, pan and clock of `context`.
///
/// The zoom and pan are sanitised once and shared by both axes.
pub fn axis_domain(subset: &[Observation], context: &ViewContext) -> AxisDomain {
    transformed_axis_domain(subset, ViewTransform::from(context), context.now)
}

pub(crate) fn transformed_axis_domain(
    subset: &[Observation],
    transform: ViewTransform,
    now: DateTime<Utc>,
) -> AxisDomain {
    AxisDomain {
        x: transformed_time_domain(subset, transform, now),
        y: scaled_value_domain(subset, transform.zoom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, day, hour, 0, 0).unwrap()
    }

    fn observation(timestamp: DateTime<Utc>, temperature: f64, dew_point: f64, humidity: f64) -> Observation {
        Observation {
            timestamp,
            temperature,
            humidity,
            dew_point,
            pressure: 29.9,
            wind_chill: temperature,
            wind_speed: 0.0,
            wind_direction: 0,
            rainfall_rate: 0.0,
            uv_index: 0,
        }
    }

    fn day_subset() -> Vec<Observation> {
        vec![
            observation(at(9, 0), 60.0, 50.0, 80.0),
            observation(at(9, 12), 75.0, 55.0, 40.0),
            observation(at(10, 0), 62.0, 51.0, 85.0),
        ]
    }

    #[test]
    fn neutral_zoom_and_pan_give_base_window() {
        let domain = time_domain(&day_subset(), 1.0, 0.0, at(1, 0));
        assert_eq!(domain, TimeDomain { start: at(9, 0), end: at(10, 0) });
    }

    #[test]
    fn zoom_two_halves_a_day() {
        let domain = time_domain(&day_subset(), 2.0, 0.0, at(1, 0));
        assert_eq!(domain.span(), Duration::hours(12));
        assert_eq!(domain.start, at(9, 0));
        assert_eq!(domain.end, at(9, 12));
    }

    #[test]
    fn pan_shifts_by_fraction_of_zoomed_span() {
        let domain = time_domain(&day_subset(), 2.0, 0.5, at(1, 0));
        assert_eq!(domain.span(), Duration::hours(12));
        assert_eq!(domain.start, at(8, 18));
        assert_eq!(domain.end, at(9, 6));

        let domain = time_domain(&day_subset(), 2.0, -1.0, at(1, 0));
        assert_eq!(domain.start, at(9, 12));
        assert_eq!(domain.end, at(10, 0));
    }

    #[test]
    fn empty_subset_uses_now() {
        let now = at(3, 7);
        let domain = time_domain(&[], 3.0, 0.25, now);
        assert_eq!(domain, TimeDomain { start: now, end: now });
    }

    #[test]
    fn invalid_zoom_is_neutral() {
        let subset = day_subset();
        let neutral = time_domain(&subset, 1.0, 0.0, at(1, 0));
        for zoom in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert_eq!(time_domain(&subset, zoom, 0.0, at(1, 0)), neutral);
        }
        assert_eq!(time_domain(&subset, 1.0, f64::NAN, at(1, 0)), neutral);
    }

    #[test]
    fn transform_sanitises_once_for_both_axes() {
        assert_eq!(ViewTransform::new(f64::NAN, f64::INFINITY), ViewTransform::NEUTRAL);
        assert_eq!(
            ViewTransform::new(2.0, -0.5),
            ViewTransform { zoom: 2.0, pan: -0.5 }
        );

        let context = ViewContext::builder()
            .range(crate::TimeRange::new(at(9, 0), at(10, 0)))
            .zoom(-3.0)
            .pan(f64::NAN)
            .now(at(1, 0))
            .build();
        assert_eq!(ViewTransform::from(&context), ViewTransform::NEUTRAL);
        assert_eq!(
            axis_domain(&day_subset(), &context),
            AxisDomain {
                x: TimeDomain { start: at(9, 0), end: at(10, 0) },
                y: ValueDomain { min: 40.0, max: 85.0 },
            }
        );
    }

    #[test]
    fn extreme_pan_falls_back_to_base_window() {
        let domain = time_domain(&day_subset(), 1.0, 1e12, at(1, 0));
        assert_eq!(domain, TimeDomain { start: at(9, 0), end: at(10, 0) });
    }

    #[test]
    fn value_domain_is_joint_min_max() {
        assert_eq!(
            value_domain(&day_subset(), 1.0),
            ValueDomain { min: 40.0, max: 85.0 }
        );
    }

    #[test]
    fn value_domain_zoom_is_asymmetric() {
        assert_eq!(
            value_domain(&day_subset(), 2.0),
            ValueDomain { min: 20.0, max: 170.0 }
        );
        assert_eq!(
            value_domain(&day_subset(), 0.5),
            ValueDomain { min: 80.0, max: 42.5 }
        );
    }

    #[test]
    fn empty_value_domain_falls_back() {
        assert_eq!(value_domain(&[], 1.0), ValueDomain { min: 0.0, max: 100.0 });
        assert_eq!(value_domain(&[], 4.0), ValueDomain::FALLBACK);
    }

    #[test]
    fn non_finite_values_never_escape() {
        let subset = [observation(at(9, 0), f64::INFINITY, 50.0, 50.0)];
        assert_eq!(value_domain(&subset, 1.0), ValueDomain::FALLBACK);

        let subset = [observation(at(9, 0), f64::MAX, 50.0, 50.0)];
        assert_eq!(value_domain(&subset, 2.0), ValueDomain::FALLBACK);
    }

    #[test]
    fn axis_domain_reads_context() {
        let context = ViewContext::builder()
            .range(crate::TimeRange::new(at(9, 0), at(10, 0)))
            .zoom(2.0)
            .now(at(1, 0))
            .build();
        let domain = axis_domain(&day_subset(), &context);
        assert_eq!(domain.x.span(), Duration::hours(12));
        assert_eq!(domain.y, ValueDomain { min: 20.0, max: 170.0 });
    }
}
