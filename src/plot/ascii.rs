//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed history: `-` line
//! - projected values: `*`

use crate::app::pipeline::ChartSeries;

/// Render one chart (history line plus projection markers).
pub fn render_ascii_chart(chart: &ChartSeries, width: usize, height: usize) -> String {
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

    let header = format!("{} [{}]", chart.kind.display_name(), chart.kind.axis_label());
    render_plot(&header, &history, &projection, width, height)
}

fn render_plot(
    header: &str,
    history: &[(f64, f64)],
    projection: &[(f64, f64)],
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let all = || history.iter().chain(projection.iter());
    let (x_min, x_max) = range(all().map(|&(x, _)| x)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = range(all().map(|&(_, y)| y)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw history first (so projection markers can overlay).
    draw_curve(&mut grid, history, x_min, x_max, y_min, y_max);

    for &(x, y) in projection {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = '*';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {header} | year=[{x_min:.0}, {x_max:.0}] | y=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    if curve.is_empty() {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Prediction, SeriesKind};

    #[test]
    fn plot_golden_snapshot_small() {
        let chart = ChartSeries {
            kind: SeriesKind::Co2,
            history: (2000..2010).map(|y| (y, 100.0)).collect(),
            projection: vec![Prediction {
                year: 2010,
                value: 110.0,
            }],
        };

        let txt = render_ascii_chart(&chart, 10, 5);
        let expected = concat!(
            "Plot: CO₂ [CO₂ (ppm)] | year=[2000, 2010] | y=[99.50, 110.50]\n",
            "         *\n",
            "          \n",
            "          \n",
            "          \n",
            "--------- \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn flat_input_does_not_panic() {
        let chart = ChartSeries {
            kind: SeriesKind::Temperature,
            history: vec![(2000, 1.0)],
            projection: vec![],
        };
        let txt = render_ascii_chart(&chart, 20, 6);
        assert_eq!(txt.lines().count(), 7);
        assert!(txt.contains('-'));
    }
}
