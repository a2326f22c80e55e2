//! `WeatherView`, the single entry point for every derived value the dashboard draws.

use crate::analysis::axis_domain::{
    scaled_value_domain, transformed_axis_domain, transformed_time_domain, AxisDomain,
    TimeDomain, ValueDomain, ViewTransform,
};
use crate::analysis::statistics::{field_statistic, info_statistics, series, FieldStatistic, SeriesPoint};
use crate::analysis::wind::WindRadar;
use crate::observations::data_store::DataStore;
use crate::types::observation::Observation;
use crate::types::quantity::Quantity;
use crate::types::time_range::TickStyle;
use crate::view::context::ViewContext;
use log::debug;

/// One snapshot of the derived views for a store under a [`ViewContext`].
///
/// Creating a `WeatherView` filters the store and sanitises the zoom and pan once; every
/// accessor then derives its value from that subset and transform. The view holds no other
/// state, so after the context changes the caller builds a new view instead of patching the
/// old one.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use weather_view::{DataStore, Quantity, ValueDomain, ViewContext, WeatherView};
///
/// let store = DataStore::empty();
/// let now = Utc.with_ymd_and_hms(2025, 7, 9, 12, 0, 0).unwrap();
/// let context = ViewContext::last_week(now);
///
/// let view = WeatherView::new(&store, &context);
/// assert!(view.subset().is_empty());
/// assert_eq!(view.statistic(Quantity::Temperature), None);
/// assert_eq!(view.value_domain(), ValueDomain::FALLBACK);
/// assert_eq!(view.wind_radar().max_speed, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct WeatherView<'a> {
    context: &'a ViewContext,
    transform: ViewTransform,
    subset: Vec<Observation>,
}

impl<'a> WeatherView<'a> {
    /// Filters `store` by the range of `context`.
    pub fn new(store: &DataStore, context: &'a ViewContext) -> Self {
        let subset = store.filter(&context.range);
        debug!(
            "View over {} selected {} of {} observations",
            context.range,
            subset.len(),
            store.len()
        );
        Self {
            context,
            transform: ViewTransform::from(context),
            subset,
        }
    }

    pub fn context(&self) -> &ViewContext {
        self.context
    }

    /// The observations inside the active range, in stored order.
    pub fn subset(&self) -> &[Observation] {
        &self.subset
    }

    /// Current/max/min of one quantity, `None` when the range holds no observations.
    pub fn statistic(&self, quantity: Quantity) -> Option<FieldStatistic> {
        field_statistic(&self.subset, quantity)
    }

    /// Statistics for every info box, in dashboard order.
    pub fn info_boxes(&self) -> Vec<(Quantity, Option<FieldStatistic>)> {
        info_statistics(&self.subset)
    }

    /// The zoom and pan actually applied, after replacing invalid values.
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn time_domain(&self) -> TimeDomain {
        transformed_time_domain(&self.subset, self.transform, self.context.now)
    }

    pub fn value_domain(&self) -> ValueDomain {
        scaled_value_domain(&self.subset, self.transform.zoom)
    }

    pub fn axis_domain(&self) -> AxisDomain {
        transformed_axis_domain(&self.subset, self.transform, self.context.now)
    }

    pub fn wind_radar(&self) -> WindRadar {
        WindRadar::from_subset(&self.subset)
    }

    pub fn series(&self, quantity: Quantity) -> Vec<SeriesPoint> {
        series(&self.subset, quantity)
    }

    /// The three lines of the time plot (temperature, dew point, humidity).
    pub fn time_plot_series(&self) -> Vec<(Quantity, Vec<SeriesPoint>)> {
        Quantity::TIME_PLOT
            .into_iter()
            .map(|quantity| (quantity, self.series(quantity)))
            .collect()
    }

    /// The rainfall area plot.
    pub fn rain_series(&self) -> Vec<SeriesPoint> {
        self.series(Quantity::RainfallRate)
    }

    /// Tick label style for the active range.
    pub fn tick_style(&self) -> TickStyle {
        self.context.range.tick_style()
    }
}
