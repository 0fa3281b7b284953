//! Trend predictor: linear fit, extrapolation, and confidence scoring.
//!
//! For a series of yearly observations we:
//! 1. fit an OLS line (`math::fit_line`)
//! 2. project `horizon` consecutive years after the latest observed year
//! 3. clamp R² into a display-stable confidence range
//! 4. classify direction from the slope sign
//!
//! The latest year is computed with `max`, so callers may pass series in any
//! order.

use tracing::debug;

use crate::domain::{Observation, Prediction, PredictionResult, Trend};
use crate::error::PredictError;
use crate::math::fit_line;

/// Default number of future years to project.
pub const DEFAULT_HORIZON: i64 = 6;

/// Confidence is never reported below this value.
pub const CONFIDENCE_FLOOR: f64 = 0.1;

/// Confidence is never reported above this value.
pub const CONFIDENCE_CEILING: f64 = 0.95;

/// Fit a linear trend to `series` and project `horizon` future years.
pub fn predict(series: &[Observation], horizon: i64) -> Result<PredictionResult, PredictError> {
    if horizon < 0 {
        return Err(PredictError::BadHorizon { horizon });
    }

    let fit = fit_line(series)?;

    let last_year = series
        .iter()
        .map(|o| o.year)
        .max()
        .ok_or_else(|| PredictError::degenerate("empty series"))?;

    // The last projected year must still be representable.
    i64::from(last_year)
        .checked_add(horizon)
        .and_then(|end| i32::try_from(end).ok())
        .ok_or(PredictError::BadHorizon { horizon })?;

    let mut predictions = Vec::new();
    for step in 1..=horizon {
        let year = (i64::from(last_year) + step) as i32;
        let value = fit.value_at(f64::from(year));
        if !value.is_finite() {
            return Err(PredictError::degenerate(format!(
                "non-finite projection for year {year}"
            )));
        }
        predictions.push(Prediction { year, value });
    }

    let confidence = fit.r_squared.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING);

    debug!(
        n = fit.n,
        slope = fit.slope,
        r_squared = fit.r_squared,
        last_year,
        horizon,
        "fitted linear trend"
    );

    Ok(PredictionResult {
        predictions,
        confidence,
        trend: Trend::from_slope(fit.slope),
        rate: fit.slope.abs(),
    })
}

/// `predict` with the default six-year horizon.
pub fn predict_default(series: &[Observation]) -> Result<PredictionResult, PredictError> {
    predict(series, DEFAULT_HORIZON)
}
