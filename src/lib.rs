//! `climate-trends` library crate.
//!
//! The binary (`climate`) is a thin wrapper around this library so that:
//!
//! - the predictor and insight rules are testable without spawning processes
//! - modules are reusable (e.g., a web front-end over the same core)
//!
//! The core is `fit::predict` and `insights::generate_insights`; everything
//! else generates data for them or presents their results.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod insights;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod tui;

pub use domain::{Insight, Observation, Prediction, PredictionResult, Series, Severity, Trend};
pub use error::PredictError;
pub use fit::predict;
pub use insights::generate_insights;
