//! Horizon reference forecaster: bootstrap random-walk naive model.

pub mod model;

pub use model::{NaiveForecaster, SampleForecast};
