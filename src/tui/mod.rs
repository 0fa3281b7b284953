//! Ratatui-based terminal UI.
//!
//! The TUI renders the dashboard for one seed: a chart of the selected series
//! with its projection, target-year prediction cards, and the insight list.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use plotters::style::RGBColor;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::pipeline::{DashboardContext, run_dashboard};
use crate::domain::{DashboardConfig, SeriesKind, Severity};
use crate::error::AppError;
use crate::report::confidence_pct;

mod plotters_chart;

use plotters_chart::ClimatePlottersChart;

/// Start the TUI.
pub fn run(config: DashboardConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config);
    app.refresh();
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    config: DashboardConfig,
    selected: SeriesKind,
    status: String,
    ctx: Option<DashboardContext>,
}

impl App {
    fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            selected: SeriesKind::Temperature,
            status: "Loading climate data...".to_string(),
            ctx: None,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Left | KeyCode::Up => {
                self.selected = self.selected.prev();
                self.status = format!("series: {}", self.selected.display_name());
            }
            KeyCode::Right | KeyCode::Down => {
                self.selected = self.selected.next();
                self.status = format!("series: {}", self.selected.display_name());
            }
            KeyCode::Char('r') => {
                self.config.seed = self.config.seed.wrapping_add(1);
                self.refresh();
            }
            _ => {}
        }
        false
    }

    /// Recompute the dashboard; failures are shown in the status line.
    fn refresh(&mut self) {
        match run_dashboard(&self.config) {
            Ok(ctx) => {
                self.status = format!("seed {}: {} insight(s)", ctx.seed, ctx.insights.len());
                self.ctx = Some(ctx);
            }
            Err(err) => {
                self.status = format!("Dashboard unavailable: {err}");
                self.ctx = None;
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("climate", Style::default().fg(Color::Cyan)),
            Span::raw(" | synthetic climate trends"),
        ]));

        let metrics = self
            .ctx
            .as_ref()
            .map(|ctx| {
                ctx.metrics
                    .iter()
                    .map(|m| format!("{}: {} ({})", m.kind.display_name(), m.kind.format_value(m.value), m.year))
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .unwrap_or_else(|| "-".to_string());

        lines.push(Line::from(Span::styled(
            format!("seed: {} | {metrics}", self.config.seed),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        self.draw_chart(frame, chunks[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(chunks[1]);

        self.draw_cards(frame, side[0]);
        self.draw_insights(frame, side[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(self.selected.display_name())
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(data) = self.ctx.as_ref().and_then(|ctx| chart_data(ctx, self.selected)) else {
            let msg = Paragraph::new("Waiting for data...").style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        };

        let widget = ClimatePlottersChart {
            history: &data.history,
            projection: &data.projection,
            history_color: series_color(self.selected),
            x_bounds: data.x_bounds,
            y_bounds: data.y_bounds,
            x_label: "year",
            y_label: self.selected.axis_label(),
            fmt_x: fmt_axis_year,
            fmt_y: fmt_axis_value,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_cards(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = format!("Predictions {}", self.config.target_year);
        let mut items = Vec::new();

        if let Some(ctx) = &self.ctx {
            for card in &ctx.cards {
                let text = match card.prediction {
                    Some(p) => format!(
                        "{:<14} {:>10}  {}",
                        card.kind.display_name(),
                        card.kind.format_value(p.value),
                        confidence_pct(p.confidence)
                    ),
                    None => format!("{:<14} {:>10}", card.kind.display_name(), "—"),
                };
                let style = if card.kind == self.selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                items.push(ListItem::new(text).style(style));
            }
        }

        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(list, area);
    }

    fn draw_insights(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        match &self.ctx {
            Some(ctx) if !ctx.insights.is_empty() => {
                for insight in &ctx.insights {
                    lines.push(Line::from(Span::styled(
                        insight.text.clone(),
                        Style::default().fg(severity_color(insight.severity)),
                    )));
                    lines.push(Line::raw(""));
                }
            }
            Some(_) => lines.push(Line::from(Span::styled(
                "No significant insights detected.",
                Style::default().fg(Color::Gray),
            ))),
            None => {}
        }

        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Insights").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "←/→ series  r reseed  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Chart-ready series and bounds.
#[derive(Debug, Clone)]
struct ChartData {
    history: Vec<(f64, f64)>,
    projection: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

/// Build chart series for Plotters.
fn chart_data(ctx: &DashboardContext, kind: SeriesKind) -> Option<ChartData> {
    let chart = ctx.chart(kind)?;

    let history: Vec<(f64, f64)> = chart
        .history
        .iter()
        .map(|&(year, value)| (f64::from(year), value))
        .collect();
    let projection: Vec<(f64, f64)> = chart
        .projection
        .iter()
        .map(|p| (f64::from(p.year), p.value))
        .collect();

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in history.iter().chain(projection.iter()) {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !x_min.is_finite() || !x_max.is_finite() || x_max <= x_min {
        return None;
    }
    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);

    Some(ChartData {
        history,
        projection,
        x_bounds: [x_min, x_max],
        y_bounds: [y_min - pad, y_max + pad],
    })
}

fn series_color(kind: SeriesKind) -> RGBColor {
    match kind {
        SeriesKind::Temperature => RGBColor(211, 47, 47),
        SeriesKind::Co2 => RGBColor(245, 124, 0),
        SeriesKind::Precipitation => RGBColor(2, 136, 209),
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Danger => Color::Red,
    }
}

fn fmt_axis_year(v: f64) -> String {
    format!("{v:.0}")
}

fn fmt_axis_value(v: f64) -> String {
    format!("{v:.1}")
}
