//! Plotters-powered climate series chart widget for Ratatui.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A lightweight, render-only chart description.
///
/// All series and bounds are computed outside the render call; `render()` only
/// draws.
pub struct ClimatePlottersChart<'a> {
    /// Observed history (year, value).
    pub history: &'a [(f64, f64)],
    /// Projected continuation (year, value).
    pub projection: &'a [(f64, f64)],
    /// Line color for the history series.
    pub history_color: RGBColor,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl<'a> Widget for ClimatePlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| (self.fmt_x)(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let projection_color = RGBColor(255, 152, 0); // orange

            chart.draw_series(LineSeries::new(self.history.iter().copied(), &self.history_color))?;

            // Join the last observation to the first projected year so the two
            // segments read as one line.
            let bridge = self.history.last().copied();
            chart.draw_series(LineSeries::new(
                bridge.into_iter().chain(self.projection.iter().copied()),
                &projection_color,
            ))?;

            // `Circle` radii are mis-scaled by the ratatui backend; use pixels.
            chart.draw_series(
                self.projection
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), projection_color)),
            )?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
