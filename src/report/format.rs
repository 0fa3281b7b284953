//! Formatted terminal output: metrics, prediction cards, insights.
//!
//! We keep formatting code in one place so:
//! - the predictor and insight rules stay free of presentation concerns
//! - output changes are localized

use crate::app::pipeline::{DashboardContext, PredictionCard};
use crate::domain::{Insight, PredictionResult, SeriesKind};

/// Shown when a card has no prediction to display.
const PLACEHOLDER: &str = "—";

/// Format the full dashboard summary (latest metrics + target-year cards).
pub fn format_dashboard(ctx: &DashboardContext) -> String {
    let mut out = String::new();

    out.push_str("=== climate - Climate Trend Dashboard ===\n");
    out.push_str(&format!("Seed: {}\n", ctx.seed));

    out.push_str("\nLatest observations:\n");
    for m in &ctx.metrics {
        out.push_str(&format!(
            "- {:<14} {:>10} ({})\n",
            m.kind.display_name(),
            m.kind.format_value(m.value),
            m.year
        ));
    }

    out.push_str("\nPredictions:\n");
    out.push_str(&format_cards(&ctx.cards));

    out
}

/// Format prediction cards as an aligned table.
pub fn format_cards(cards: &[PredictionCard]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<14} {:>6} {:>12} {:>11}\n",
        "series", "year", "value", "confidence"
    ));
    out.push_str(&format!("{:-<14} {:-<6} {:-<12} {:-<11}\n", "", "", "", ""));

    for card in cards {
        let (value, confidence) = match card.prediction {
            Some(p) => (card.kind.format_value(p.value), confidence_pct(p.confidence)),
            None => (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()),
        };
        out.push_str(&format!(
            "{:<14} {:>6} {:>12} {:>11}\n",
            card.kind.display_name(),
            card.target_year,
            value,
            confidence
        ));
    }

    out
}

/// Format the insight list (or the "nothing to report" line).
pub fn format_insights(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return "No significant insights detected.".to_string();
    }

    let mut out = String::from("Insights:\n");
    for insight in insights {
        out.push_str(&format!(
            "[{:<7}] {}\n",
            insight.severity.as_str().to_uppercase(),
            insight.text
        ));
    }
    out
}

/// Format one prediction result as a table of projected years.
pub fn format_prediction(kind: SeriesKind, result: &PredictionResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}: {} trend, rate={:.4}/yr, confidence={}\n",
        kind.display_name(),
        result.trend,
        result.rate,
        confidence_pct(result.confidence)
    ));

    if result.predictions.is_empty() {
        out.push_str("(no projected years)\n");
        return out;
    }

    out.push_str(&format!("{:>6} {:>14}\n", "year", "value"));
    for p in &result.predictions {
        out.push_str(&format!("{:>6} {:>14.4}\n", p.year, p.value));
    }
    out
}

/// Whole-percent confidence label.
pub fn confidence_pct(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::CardValue;
    use crate::domain::{Prediction, Severity, Trend};

    #[test]
    fn cards_render_placeholder_for_missing_prediction() {
        let cards = vec![
            PredictionCard {
                kind: SeriesKind::Co2,
                target_year: 2030,
                prediction: Some(CardValue {
                    value: 455.4,
                    confidence: 0.95,
                }),
            },
            PredictionCard {
                kind: SeriesKind::Precipitation,
                target_year: 2030,
                prediction: None,
            },
        ];
        let txt = format_cards(&cards);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("455 ppm") && lines[2].ends_with("95%"), "{}", lines[2]);
        assert!(lines[3].contains(PLACEHOLDER), "{}", lines[3]);
    }

    #[test]
    fn empty_insights_message() {
        assert_eq!(format_insights(&[]), "No significant insights detected.");
    }

    #[test]
    fn insights_are_tagged_by_severity() {
        let txt = format_insights(&[Insight {
            icon: "fa-smog".to_string(),
            text: "CO₂ is high.".to_string(),
            severity: Severity::Warning,
        }]);
        assert!(txt.contains("[WARNING] CO₂ is high."), "{txt}");
    }

    #[test]
    fn prediction_table_lists_each_year() {
        let result = PredictionResult {
            predictions: vec![
                Prediction { year: 2025, value: 1.25 },
                Prediction { year: 2026, value: 1.5 },
            ],
            confidence: 0.5,
            trend: Trend::Increasing,
            rate: 0.25,
        };
        let txt = format_prediction(SeriesKind::Temperature, &result);
        assert!(txt.starts_with("Temperature: increasing trend, rate=0.2500/yr, confidence=50%"));
        assert!(txt.contains("  2026         1.5000"), "{txt}");
    }

    #[test]
    fn zero_horizon_prediction_is_labelled() {
        let result = PredictionResult {
            predictions: vec![],
            confidence: 0.1,
            trend: Trend::Decreasing,
            rate: 0.0,
        };
        assert!(format_prediction(SeriesKind::Co2, &result).contains("(no projected years)"));
    }
}
