//! Computational core of a single-station weather dashboard.
//!
//! Observations are loaded once into a [`DataStore`], selected by an inclusive [`TimeRange`],
//! and every value the dashboard draws (info-box statistics, chart axis domains, the wind
//! radar) is derived on demand from that subset and a [`ViewContext`]. [`WeatherView`] bundles
//! those queries behind one entry point.

mod analysis;
mod error;
mod observations;
mod types;
mod view;

pub use error::WeatherViewError;

pub use observations::data_store::*;
pub use observations::error::{DecodeError, LoadError};

pub use types::into_utc_trait::IntoUtcDateTime;
pub use types::observation::Observation;
pub use types::quantity::Quantity;
pub use types::time_range::{TickStyle, TimeFilter, TimeRange};
pub use types::timestamp_format::TimestampFormat;

pub use analysis::axis_domain::*;
pub use analysis::statistics::*;
pub use analysis::wind::*;

pub use view::context::*;
pub use view::weather_view::WeatherView;
