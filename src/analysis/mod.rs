pub mod axis_domain;
pub mod statistics;
pub mod wind;
