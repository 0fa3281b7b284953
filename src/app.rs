//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - runs the dashboard pipeline
//! - prints reports/plots or launches the TUI
//! - writes optional exports

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{Command, DashboardArgs, PredictArgs};
use crate::domain::DashboardConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `climate` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may carry CLIMATE_SEED / RUST_LOG; a missing file is fine.
    dotenvy::dotenv().ok();

    // We want `climate` and `climate --seed 7` to behave like `climate tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let is_tui = matches!(cli.command, Command::Tui(_));
    init_logging(cli.verbose, is_tui);

    match cli.command {
        Command::Summary(args) => handle_summary(args, OutputMode::Full),
        Command::Insights(args) => handle_summary(args, OutputMode::InsightsOnly),
        Command::Predict(args) => handle_predict(args),
        Command::Tui(args) => crate::tui::run(config_from_args(&args)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    InsightsOnly,
}

fn handle_summary(args: DashboardArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = config_from_args(&args);
    let ctx = pipeline::run_dashboard(&config)?;

    if mode == OutputMode::Full {
        println!("{}", crate::report::format_dashboard(&ctx));
    }
    println!("{}", crate::report::format_insights(&ctx.insights));

    if mode == OutputMode::Full && config.plot {
        if let Some(chart) = ctx.chart(crate::domain::SeriesKind::Temperature) {
            let plot = crate::plot::render_ascii_chart(chart, config.plot_width, config.plot_height);
            println!("{plot}");
        }
    }

    if let Some(path) = &config.export {
        crate::io::export::write_dashboard_json(path, &ctx)?;
        info!(path = %path.display(), "wrote dashboard snapshot");
    }

    Ok(())
}

fn handle_predict(args: PredictArgs) -> Result<(), AppError> {
    let bundle = crate::data::generate_bundle(args.seed);
    let result = crate::fit::predict(bundle.get(args.series), args.horizon)?;
    println!(
        "{}",
        crate::report::format_prediction(args.series, &result)
    );
    Ok(())
}

pub fn config_from_args(args: &DashboardArgs) -> DashboardConfig {
    DashboardConfig {
        seed: args.seed,
        chart_horizon: args.chart_horizon,
        card_horizon: args.card_horizon,
        target_year: args.target_year,
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export: args.export.clone(),
    }
}

/// Priority: RUST_LOG > --verbose > default (`info`, or `off` for the TUI so
/// log lines never land on the alternate screen).
fn init_logging(verbose: bool, is_tui: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else if is_tui {
        EnvFilter::new("off")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

/// Rewrite argv so `climate` defaults to `climate tui`.
///
/// Rules:
/// - `climate`                      -> `climate tui`
/// - `climate --seed 7 ...`         -> `climate tui --seed 7 ...`
/// - `climate --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "summary" | "insights" | "predict" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}
