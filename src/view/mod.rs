pub mod context;
pub mod weather_view;
