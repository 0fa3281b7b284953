//! Trend fitting and projection.

pub mod predictor;

pub use predictor::*;
