//! The explicit view state (`ViewContext`) that every derived-value query reads.

use crate::types::observation::Observation;
use crate::types::time_range::{TimeFilter, TimeRange};
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Drag distance, in points, that pans the time axis by one full (zoomed) span.
pub const DRAG_POINTS_PER_SPAN: f64 = 100.0;

/// The mutable UI state that drives recomputation: active range, zoom, pan and the clock.
///
/// The UI owns and mutates this value; the core only reads it. Every derived value is a pure
/// function of the data and one `ViewContext`, so after any change the caller simply queries
/// again. There are no globals and no invalidation protocol.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use weather_view::{TimeRange, ViewContext};
///
/// let now = Utc.with_ymd_and_hms(2025, 7, 9, 12, 0, 0).unwrap();
/// let context = ViewContext::builder()
///     .range(TimeRange::ending_at(now, Duration::days(1)))
///     .zoom(2.0)
///     .now(now)
///     .build();
/// assert_eq!(context.pan, 0.0);
///
/// let dragged = context.with_drag(-50.0);
/// assert_eq!(dragged.pan, -0.5);
/// assert_eq!(dragged.zoom, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Builder)]
pub struct ViewContext {
    /// Inclusive window selecting which observations are shown.
    pub range: TimeRange,
    /// Chart zoom factor. `1.0` is neutral, above 1 zooms in.
    #[builder(default = 1.0)]
    pub zoom: f64,
    /// Horizontal pan as a signed fraction of the zoomed time span.
    #[builder(default = 0.0)]
    pub pan: f64,
    /// Substitute instant for empty subsets. Defaults to the time the context was built.
    #[builder(default = Utc::now())]
    pub now: DateTime<Utc>,
}

impl ViewContext {
    /// A context for `range` with neutral zoom and pan.
    pub fn new(range: TimeRange, now: DateTime<Utc>) -> Self {
        Self {
            range,
            zoom: 1.0,
            pan: 0.0,
            now,
        }
    }

    /// The dashboard's initial state: the last seven days, neutral zoom and pan.
    pub fn last_week(now: DateTime<Utc>) -> Self {
        Self::new(TimeFilter::LastWeek.range(now, &[]), now)
    }

    /// A context for one of the preset windows.
    pub fn from_filter(filter: TimeFilter, now: DateTime<Utc>, observations: &[Observation]) -> Self {
        Self::new(filter.range(now, observations), now)
    }

    pub fn with_range(self, range: TimeRange) -> Self {
        Self { range, ..self }
    }

    pub fn with_zoom(self, zoom: f64) -> Self {
        Self { zoom, ..self }
    }

    pub fn with_pan(self, pan: f64) -> Self {
        Self { pan, ..self }
    }

    /// Pans by a horizontal drag translation in points, see [`pan_from_drag`].
    pub fn with_drag(self, translation: f64) -> Self {
        self.with_pan(pan_from_drag(translation))
    }

    /// Drops any zoom and pan, keeping the range.
    pub fn reset_view(self) -> Self {
        Self {
            zoom: 1.0,
            pan: 0.0,
            ..self
        }
    }
}

/// Converts a horizontal drag translation (points) into a pan fraction.
///
/// Dragging right by [`DRAG_POINTS_PER_SPAN`] points moves the window one full span earlier.
pub fn pan_from_drag(translation: f64) -> f64 {
    translation / DRAG_POINTS_PER_SPAN
}
