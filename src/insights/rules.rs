//! Insight rules.
//!
//! Each rule reads one named series from the bundle, runs the trend predictor
//! on it, and emits at most one insight. Rules are plain data (tagged variants)
//! so new ones can be appended without touching the generator loop.

use crate::domain::{ClimateBundle, Insight, PredictionResult, Severity, SeriesKind};
use crate::error::PredictError;
use crate::fit::{DEFAULT_HORIZON, predict};

/// Year the threshold rules look at.
pub const TARGET_YEAR: i32 = 2030;

/// Paris Agreement warming limit (°C anomaly).
pub const TEMPERATURE_LIMIT_C: f64 = 1.5;

/// CO₂ concentration considered a warning level (ppm).
pub const CO2_LIMIT_PPM: f64 = 450.0;

#[derive(Debug, Clone)]
pub enum InsightRule {
    /// Emit when the projection for exactly `year` is strictly above `threshold`.
    ///
    /// Produces nothing when `year` is not inside the projection horizon.
    ThresholdAtYear {
        series: SeriesKind,
        horizon: i64,
        year: i32,
        threshold: f64,
        severity: Severity,
        icon: &'static str,
        message: fn(f64) -> String,
    },
    /// Always emit, describing the fitted trend.
    TrendSummary {
        series: SeriesKind,
        horizon: i64,
        severity: Severity,
        icon: &'static str,
        message: fn(&PredictionResult) -> String,
    },
}

impl InsightRule {
    pub fn series(&self) -> SeriesKind {
        match self {
            InsightRule::ThresholdAtYear { series, .. } | InsightRule::TrendSummary { series, .. } => {
                *series
            }
        }
    }

    /// Evaluate this rule against the bundle.
    pub fn evaluate(&self, bundle: &ClimateBundle) -> Result<Option<Insight>, PredictError> {
        match self {
            InsightRule::ThresholdAtYear {
                series,
                horizon,
                year,
                threshold,
                severity,
                icon,
                message,
            } => {
                let result = predict(bundle.get(*series), *horizon)?;
                let fired = result
                    .value_at(*year)
                    .filter(|value| *value > *threshold)
                    .map(|value| Insight {
                        icon: (*icon).to_string(),
                        text: message(value),
                        severity: *severity,
                    });
                Ok(fired)
            }
            InsightRule::TrendSummary {
                series,
                horizon,
                severity,
                icon,
                message,
            } => {
                let result = predict(bundle.get(*series), *horizon)?;
                Ok(Some(Insight {
                    icon: (*icon).to_string(),
                    text: message(&result),
                    severity: *severity,
                }))
            }
        }
    }
}

/// The dashboard's rule set, in output order.
pub fn default_rules() -> Vec<InsightRule> {
    vec![
        InsightRule::ThresholdAtYear {
            series: SeriesKind::Temperature,
            horizon: DEFAULT_HORIZON,
            year: TARGET_YEAR,
            threshold: TEMPERATURE_LIMIT_C,
            severity: Severity::Danger,
            icon: "fa-temperature-high",
            message: temperature_message,
        },
        InsightRule::ThresholdAtYear {
            series: SeriesKind::Co2,
            horizon: DEFAULT_HORIZON,
            year: TARGET_YEAR,
            threshold: CO2_LIMIT_PPM,
            severity: Severity::Warning,
            icon: "fa-smog",
            message: co2_message,
        },
        InsightRule::TrendSummary {
            series: SeriesKind::Precipitation,
            horizon: DEFAULT_HORIZON,
            severity: Severity::Info,
            icon: "fa-cloud-rain",
            message: precipitation_message,
        },
    ]
}

fn temperature_message(value: f64) -> String {
    format!(
        "Temperature is projected to reach +{value:.1}°C by {TARGET_YEAR}, exceeding the Paris Agreement target."
    )
}

fn co2_message(_value: f64) -> String {
    format!(
        "CO₂ levels could exceed {CO2_LIMIT_PPM} ppm by {TARGET_YEAR} if current trends continue."
    )
}

fn precipitation_message(result: &PredictionResult) -> String {
    format!(
        "Precipitation patterns show {} trend at {:.1} mm/year.",
        result.trend, result.rate
    )
}
