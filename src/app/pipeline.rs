//! Shared "dashboard pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! series generation -> latest metrics -> chart projections -> prediction cards -> insights
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).
//! Everything the front-ends need lives in an explicit `DashboardContext`
//! value; the predictor and insight generator never see it.

use serde::Serialize;
use tracing::{info, warn};

use crate::data::generate_bundle;
use crate::domain::{
    ClimateBundle, DashboardConfig, Insight, Prediction, PredictionResult, SeriesKind,
    latest_observation,
};
use crate::error::AppError;
use crate::fit::predict;
use crate::insights::generate_insights;

/// Most recent observed value of one series.
#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub kind: SeriesKind,
    pub year: i32,
    pub value: f64,
}

/// History plus projected continuation for one chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub kind: SeriesKind,
    pub history: Vec<(i32, f64)>,
    /// Empty when the series could not be fitted.
    pub projection: Vec<Prediction>,
}

/// Target-year prediction shown on a card.
///
/// `prediction` is `None` when the series failed to fit or the target year is
/// outside the card horizon; front-ends render a placeholder for it.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionCard {
    pub kind: SeriesKind,
    pub target_year: i32,
    pub prediction: Option<CardValue>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CardValue {
    pub value: f64,
    pub confidence: f64,
}

/// All computed outputs of a single dashboard run.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardContext {
    pub seed: u64,
    #[serde(skip)]
    pub bundle: ClimateBundle,
    pub metrics: Vec<Metric>,
    pub charts: Vec<ChartSeries>,
    pub cards: Vec<PredictionCard>,
    pub insights: Vec<Insight>,
}

impl DashboardContext {
    pub fn chart(&self, kind: SeriesKind) -> Option<&ChartSeries> {
        self.charts.iter().find(|c| c.kind == kind)
    }

    pub fn card(&self, kind: SeriesKind) -> Option<&PredictionCard> {
        self.cards.iter().find(|c| c.kind == kind)
    }
}

/// Generate data for `config.seed` and compute the dashboard.
pub fn run_dashboard(config: &DashboardConfig) -> Result<DashboardContext, AppError> {
    info!(seed = config.seed, "loading climate data");
    let bundle = generate_bundle(config.seed);
    run_dashboard_with_bundle(config, bundle)
}

/// Compute the dashboard over a pre-built bundle.
///
/// Chart and card failures are suppressed (logged, placeholder shown); an
/// insight failure aborts the run.
pub fn run_dashboard_with_bundle(
    config: &DashboardConfig,
    bundle: ClimateBundle,
) -> Result<DashboardContext, AppError> {
    if config.chart_horizon < 0 || config.card_horizon < 0 {
        return Err(AppError::new(2, "Horizons must be >= 0."));
    }

    let metrics = SeriesKind::ALL
        .iter()
        .filter_map(|&kind| {
            latest_observation(bundle.get(kind)).map(|o| Metric {
                kind,
                year: o.year,
                value: o.value,
            })
        })
        .collect();

    let charts = SeriesKind::ALL
        .iter()
        .map(|&kind| {
            let series = bundle.get(kind);
            let projection = suppressed(kind, predict(series, config.chart_horizon))
                .map(|r| r.predictions)
                .unwrap_or_default();
            ChartSeries {
                kind,
                history: series.iter().map(|o| (o.year, o.value)).collect(),
                projection,
            }
        })
        .collect();

    let cards = SeriesKind::ALL
        .iter()
        .map(|&kind| {
            let prediction = suppressed(kind, predict(bundle.get(kind), config.card_horizon))
                .and_then(|r| {
                    r.value_at(config.target_year).map(|value| CardValue {
                        value,
                        confidence: r.confidence,
                    })
                });
            PredictionCard {
                kind,
                target_year: config.target_year,
                prediction,
            }
        })
        .collect();

    let insights = generate_insights(&bundle)?;
    info!(insights = insights.len(), "dashboard ready");

    Ok(DashboardContext {
        seed: config.seed,
        bundle,
        metrics,
        charts,
        cards,
        insights,
    })
}

fn suppressed(
    kind: SeriesKind,
    result: Result<PredictionResult, crate::error::PredictError>,
) -> Option<PredictionResult> {
    match result {
        Ok(r) => Some(r),
        Err(err) => {
            warn!(series = ?kind, %err, "prediction unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Observation, Severity};

    #[test]
    fn default_run_fills_every_panel() {
        let ctx = run_dashboard(&DashboardConfig::default()).unwrap();
        assert_eq!(ctx.metrics.len(), 3);
        assert_eq!(ctx.charts.len(), 3);

        let temp = ctx.chart(SeriesKind::Temperature).unwrap();
        assert_eq!(temp.history.len(), 145);
        assert_eq!(temp.projection.len(), 10);
        assert_eq!(temp.projection[0].year, 2025);

        for kind in SeriesKind::ALL {
            let card = ctx.card(kind).unwrap();
            let value = card.prediction.expect("2030 is inside a six-year horizon");
            assert!((0.1..=0.95).contains(&value.confidence));
        }

        assert_eq!(ctx.insights.last().map(|i| i.severity), Some(Severity::Info));
    }

    #[test]
    fn unfittable_horizons_leave_placeholders_but_keep_insights() {
        let config = DashboardConfig {
            chart_horizon: i64::MAX,
            card_horizon: i64::MAX,
            ..DashboardConfig::default()
        };
        let ctx = run_dashboard(&config).unwrap();

        assert_eq!(ctx.charts.len(), 3);
        for chart in &ctx.charts {
            assert!(chart.projection.is_empty(), "{:?}", chart.kind);
            assert!(!chart.history.is_empty());
        }
        assert!(ctx.cards.iter().all(|c| c.prediction.is_none()));
        assert!(crate::report::format_cards(&ctx.cards).contains('—'));
        assert_eq!(ctx.metrics.len(), 3);
        assert_eq!(ctx.insights.last().map(|i| i.severity), Some(Severity::Info));
    }

    #[test]
    fn degenerate_insight_series_aborts_the_run() {
        let mut bundle = generate_bundle(3);
        bundle.temperature = vec![Observation::new(2024, 1.0)];
        let err = run_dashboard_with_bundle(&DashboardConfig::default(), bundle).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn target_year_outside_horizon_leaves_placeholder() {
        let config = DashboardConfig {
            target_year: 2040,
            ..DashboardConfig::default()
        };
        let ctx = run_dashboard(&config).unwrap();
        assert!(ctx.cards.iter().all(|c| c.prediction.is_none()));
    }

    #[test]
    fn negative_horizon_is_a_usage_error() {
        let config = DashboardConfig {
            chart_horizon: -2,
            ..DashboardConfig::default()
        };
        assert_eq!(run_dashboard(&config).unwrap_err().exit_code(), 2);
    }
}
