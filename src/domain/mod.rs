//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - time series samples (`Observation`, `Series`, `ClimateBundle`)
//! - predictor outputs (`Prediction`, `PredictionResult`, `Trend`)
//! - advisory messages (`Insight`, `Severity`)
//! - run configuration (`DashboardConfig`)

pub mod types;

pub use types::*;
