//! Insight generator.
//!
//! Runs an ordered list of `InsightRule`s over a `ClimateBundle`. Output order
//! follows rule order, so with the default rules the temperature insight (if
//! any) comes first, then CO₂, then the precipitation summary.
//!
//! Predictor failures are not swallowed here: an insight over a degenerate
//! series is meaningless, so the first failure aborts the whole call.

use tracing::debug;

use crate::domain::{ClimateBundle, Insight};
use crate::error::PredictError;

pub mod rules;

pub use rules::*;

/// Generate insights with the default rule set.
pub fn generate_insights(bundle: &ClimateBundle) -> Result<Vec<Insight>, PredictError> {
    generate_insights_with(bundle, &default_rules())
}

/// Generate insights with an explicit rule list.
pub fn generate_insights_with(
    bundle: &ClimateBundle,
    rules: &[InsightRule],
) -> Result<Vec<Insight>, PredictError> {
    let mut out = Vec::with_capacity(rules.len());
    for rule in rules {
        if let Some(insight) = rule.evaluate(bundle)? {
            debug!(series = ?rule.series(), severity = %insight.severity, "insight emitted");
            out.push(insight);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Observation, Series, Severity, SeriesKind, Trend};

    /// Linear series over 2000..=2024 whose fitted line passes through
    /// `(2030, at_2030)` with the given slope.
    fn through_2030(at_2030: f64, slope: f64) -> Series {
        (2000..=2024)
            .map(|y| Observation::new(y, at_2030 + slope * f64::from(y - 2030)))
            .collect()
    }

    fn bundle(temp_2030: f64, co2_2030: f64) -> ClimateBundle {
        ClimateBundle {
            temperature: through_2030(temp_2030, 0.02),
            co2: through_2030(co2_2030, 2.0),
            precipitation: through_2030(1010.0, 0.5),
        }
    }

    #[test]
    fn all_rules_fire_in_order() {
        let insights = generate_insights(&bundle(1.8, 460.0)).unwrap();
        let severities: Vec<Severity> = insights.iter().map(|i| i.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Danger, Severity::Warning, Severity::Info]
        );
        assert_eq!(insights[0].icon, "fa-temperature-high");
        assert!(
            insights[0].text.contains("+1.8°C"),
            "text: {}",
            insights[0].text
        );
        assert_eq!(insights[1].icon, "fa-smog");
        assert_eq!(
            insights[1].text,
            "CO₂ levels could exceed 450 ppm by 2030 if current trends continue."
        );
        assert_eq!(insights[2].icon, "fa-cloud-rain");
    }

    #[test]
    fn below_thresholds_only_precipitation_remains() {
        let insights = generate_insights(&bundle(1.2, 400.0)).unwrap();
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].severity, Severity::Info);
        assert_eq!(
            insights[0].text,
            "Precipitation patterns show increasing trend at 0.5 mm/year."
        );
    }

    #[test]
    fn temperature_and_co2_rules_are_independent() {
        let insights = generate_insights(&bundle(1.2, 460.0)).unwrap();
        let severities: Vec<Severity> = insights.iter().map(|i| i.severity).collect();
        assert_eq!(severities, vec![Severity::Warning, Severity::Info]);

        let insights = generate_insights(&bundle(1.8, 400.0)).unwrap();
        let severities: Vec<Severity> = insights.iter().map(|i| i.severity).collect();
        assert_eq!(severities, vec![Severity::Danger, Severity::Info]);
    }

    #[test]
    fn missing_target_year_produces_nothing() {
        // Series ends in 2010: a six-year horizon never reaches 2030.
        let early: Series = (1990..=2010)
            .map(|y| Observation::new(y, 100.0 + f64::from(y)))
            .collect();
        let b = ClimateBundle {
            temperature: early.clone(),
            co2: early,
            precipitation: through_2030(1000.0, -1.0),
        };
        let insights = generate_insights(&b).unwrap();
        assert_eq!(insights.len(), 1);
        assert!(insights[0].text.contains(Trend::Decreasing.as_str()));
    }

    #[test]
    fn degenerate_series_propagates() {
        let mut b = bundle(1.8, 460.0);
        b.co2 = vec![Observation::new(2024, 420.0)];
        let err = generate_insights(&b).unwrap_err();
        assert!(matches!(err, PredictError::DegenerateSeries { .. }));
    }

    #[test]
    fn custom_rules_extend_without_changing_the_generator() {
        let mut rules = default_rules();
        rules.push(InsightRule::TrendSummary {
            series: SeriesKind::Temperature,
            horizon: 1,
            severity: Severity::Info,
            icon: "fa-chart-line",
            message: |r| format!("Temperature is {}.", r.trend),
        });
        let insights = generate_insights_with(&bundle(1.2, 400.0), &rules).unwrap();
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[1].text, "Temperature is increasing.");

        assert!(generate_insights_with(&bundle(1.2, 400.0), &[]).unwrap().is_empty());
    }
}
