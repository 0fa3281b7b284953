//! Closed-form simple linear regression.
//!
//! We fit `value = slope * year + intercept` over small yearly series using
//! sums centered on the means, which keeps precision for years far from zero:
//!
//! ```text
//! slope     = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
//! intercept = ȳ - slope x̄
//! ```
//!
//! Series are tens to low hundreds of points, so a single pass over the data
//! is all we need; no matrix solver is involved.

use crate::domain::Observation;
use crate::error::PredictError;

/// Fitted line plus its coefficient of determination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
    /// Raw R² (not clamped). A series with zero variance in y is a perfect fit (1.0).
    pub r_squared: f64,
    pub n: usize,
}

impl LineFit {
    pub fn value_at(&self, year: f64) -> f64 {
        self.slope * year + self.intercept
    }
}

/// Fit an OLS line through `(year, value)` pairs.
///
/// Fails with `DegenerateSeries` when there are fewer than two points, when
/// every year is identical, or when the sums overflow into non-finite values.
pub fn fit_line(series: &[Observation]) -> Result<LineFit, PredictError> {
    let n = series.len();
    if n < 2 {
        return Err(PredictError::degenerate(format!(
            "need at least 2 observations, got {n}"
        )));
    }

    let first_year = series[0].year;
    if series.iter().all(|o| o.year == first_year) {
        return Err(PredictError::degenerate(format!(
            "all {n} observations share year {first_year}"
        )));
    }

    let nf = n as f64;
    let x_mean = series.iter().map(|o| f64::from(o.year)).sum::<f64>() / nf;
    let y_mean = series.iter().map(|o| o.value).sum::<f64>() / nf;
    if !(x_mean.is_finite() && y_mean.is_finite()) {
        return Err(PredictError::degenerate("non-finite observations"));
    }

    // Identical values fit exactly; `y_mean` may carry rounding error.
    let first_value = series[0].value;
    if series.iter().all(|o| o.value == first_value) {
        return Ok(LineFit {
            slope: 0.0,
            intercept: first_value,
            r_squared: 1.0,
            n,
        });
    }

    let (mut sxy, mut sxx) = (0.0, 0.0);
    for o in series {
        let dx = f64::from(o.year) - x_mean;
        sxy += dx * (o.value - y_mean);
        sxx += dx * dx;
    }

    if !(sxx.is_finite() && sxx > 0.0) {
        return Err(PredictError::degenerate("zero variance in years"));
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    if !(slope.is_finite() && intercept.is_finite()) {
        return Err(PredictError::degenerate("non-finite regression coefficients"));
    }

    let (mut ss_res, mut ss_tot) = (0.0, 0.0);
    for o in series {
        let fitted = slope * f64::from(o.year) + intercept;
        ss_res += (o.value - fitted).powi(2);
        ss_tot += (o.value - y_mean).powi(2);
    }

    let r_squared = if ss_tot == 0.0 { 1.0 } else { 1.0 - ss_res / ss_tot };
    if !r_squared.is_finite() {
        return Err(PredictError::degenerate("non-finite goodness of fit"));
    }

    Ok(LineFit {
        slope,
        intercept,
        r_squared,
        n,
    })
}
