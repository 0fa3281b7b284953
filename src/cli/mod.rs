//! Command-line parsing for the climate trend dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::SeriesKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "climate", version, about = "Climate Trend Dashboard (synthetic series)")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print metrics, target-year predictions, insights, and a temperature plot.
    Summary(DashboardArgs),
    /// Print insights only (useful for scripting).
    Insights(DashboardArgs),
    /// Fit and project a single series.
    Predict(PredictArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same underlying pipeline as `climate summary`, but renders
    /// results in a terminal UI using Ratatui.
    Tui(DashboardArgs),
}

/// Common options for dashboard runs.
#[derive(Debug, Parser, Clone)]
pub struct DashboardArgs {
    /// Random seed for the synthetic series.
    #[arg(long, env = "CLIMATE_SEED", default_value_t = 42)]
    pub seed: u64,

    /// Years projected on the charts.
    #[arg(long, default_value_t = 10)]
    pub chart_horizon: i64,

    /// Years projected for prediction cards.
    #[arg(long, default_value_t = 6)]
    pub card_horizon: i64,

    /// Year shown on prediction cards.
    #[arg(long, default_value_t = 2030)]
    pub target_year: i32,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the dashboard snapshot to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for a single-series prediction.
#[derive(Debug, Parser, Clone)]
pub struct PredictArgs {
    /// Series to fit.
    #[arg(short, long, value_enum, default_value_t = SeriesKind::Temperature)]
    pub series: SeriesKind,

    /// Number of future years to project.
    #[arg(long, default_value_t = 6, allow_negative_numbers = true)]
    pub horizon: i64,

    /// Random seed for the synthetic series.
    #[arg(long, env = "CLIMATE_SEED", default_value_t = 42)]
    pub seed: u64,
}
