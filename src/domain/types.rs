//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - produced by the series generator and consumed by the predictor
//! - rendered by the CLI/TUI as plain data
//! - exported to JSON

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One sample of a yearly time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub value: f64,
}

impl Observation {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// Ordered sequence of observations (years strictly increasing, by convention).
pub type Series = Vec<Observation>;

/// A projected value for a future year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub year: i32,
    pub value: f64,
}

/// Qualitative direction of a fitted trend.
///
/// There is no "flat": a slope of exactly zero is classified as `Decreasing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
}

impl Trend {
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            Trend::Increasing
        } else {
            Trend::Decreasing
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one trend prediction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Projected values for `last_year + 1 ..= last_year + horizon`.
    pub predictions: Vec<Prediction>,
    /// R²-derived goodness of fit, clamped to `[0.1, 0.95]`.
    pub confidence: f64,
    pub trend: Trend,
    /// Absolute slope (units per year).
    pub rate: f64,
}

impl PredictionResult {
    /// Projected value for exactly `year`, if it falls inside the horizon.
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.predictions
            .iter()
            .find(|p| p.year == year)
            .map(|p| p.value)
    }
}

/// Severity of an advisory message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A human-readable advisory derived from one series' prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub icon: String,
    pub text: String,
    pub severity: Severity,
}

/// The named series known to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Temperature,
    Co2,
    Precipitation,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 3] = [
        SeriesKind::Temperature,
        SeriesKind::Co2,
        SeriesKind::Precipitation,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            SeriesKind::Temperature => "Temperature",
            SeriesKind::Co2 => "CO₂",
            SeriesKind::Precipitation => "Precipitation",
        }
    }

    /// Axis label used by charts.
    pub fn axis_label(self) -> &'static str {
        match self {
            SeriesKind::Temperature => "Temperature Anomaly (°C)",
            SeriesKind::Co2 => "CO₂ (ppm)",
            SeriesKind::Precipitation => "Precipitation (mm/year)",
        }
    }

    /// Format a value in this series' display unit.
    pub fn format_value(self, value: f64) -> String {
        match self {
            SeriesKind::Temperature => format!("+{value:.1}°C"),
            SeriesKind::Co2 => format!("{} ppm", value.round()),
            SeriesKind::Precipitation => format!("{} mm", value.round()),
        }
    }

    pub fn next(self) -> Self {
        match self {
            SeriesKind::Temperature => SeriesKind::Co2,
            SeriesKind::Co2 => SeriesKind::Precipitation,
            SeriesKind::Precipitation => SeriesKind::Temperature,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SeriesKind::Temperature => SeriesKind::Precipitation,
            SeriesKind::Co2 => SeriesKind::Temperature,
            SeriesKind::Precipitation => SeriesKind::Co2,
        }
    }
}

/// The bundle of named series handed to the insight generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClimateBundle {
    pub temperature: Series,
    pub co2: Series,
    pub precipitation: Series,
}

impl ClimateBundle {
    pub fn get(&self, kind: SeriesKind) -> &[Observation] {
        match kind {
            SeriesKind::Temperature => &self.temperature,
            SeriesKind::Co2 => &self.co2,
            SeriesKind::Precipitation => &self.precipitation,
        }
    }
}

/// Most recent observation by year (not by position).
pub fn latest_observation(series: &[Observation]) -> Option<Observation> {
    series.iter().copied().max_by_key(|o| o.year)
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// RNG seed for the synthetic series.
    pub seed: u64,
    /// Projection horizon for the temperature chart.
    pub chart_horizon: i64,
    /// Projection horizon for prediction cards and insights.
    pub card_horizon: i64,
    /// Year reported on prediction cards.
    pub target_year: i32,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            chart_horizon: 10,
            card_horizon: crate::fit::DEFAULT_HORIZON,
            target_year: 2030,
            plot: true,
            plot_width: 100,
            plot_height: 25,
            export: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_slope_is_decreasing() {
        assert_eq!(Trend::from_slope(0.0), Trend::Decreasing);
        assert_eq!(Trend::from_slope(-1e-9), Trend::Decreasing);
        assert_eq!(Trend::from_slope(1e-9), Trend::Increasing);
    }

    #[test]
    fn latest_observation_uses_max_year() {
        let series = vec![
            Observation::new(2001, 3.0),
            Observation::new(2003, 1.0),
            Observation::new(2002, 2.0),
        ];
        let latest = latest_observation(&series).unwrap();
        assert_eq!(latest.year, 2003);
        assert_eq!(latest.value, 1.0);
        assert!(latest_observation(&[]).is_none());
    }

    #[test]
    fn value_formatting_matches_units() {
        assert_eq!(SeriesKind::Temperature.format_value(1.234), "+1.2°C");
        assert_eq!(SeriesKind::Co2.format_value(420.6), "421 ppm");
        assert_eq!(SeriesKind::Precipitation.format_value(1011.4), "1011 mm");
    }

    #[test]
    fn series_kind_cycles() {
        for kind in SeriesKind::ALL {
            assert_eq!(kind.next().prev(), kind);
        }
    }
}
