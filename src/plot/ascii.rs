//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed points: `o`
//! - fitted curve: `-` line

use crate::domain::{CurveFile, FitResult, Point};

/// Render observed points with the fitted sample curve on top.
///
/// The x-range covers both the points and the curve, so points excluded from
/// a power/exponential fit still show up.
pub fn render_ascii_plot(points: &[Point], fit: &FitResult, width: usize, height: usize) -> String {
    render_plot(points, &fit.sample_curve, width, height)
}

/// Render a plot from a saved curve JSON file (curve only, no overlay points).
pub fn render_ascii_plot_from_curve_file(curve: &CurveFile, width: usize, height: usize) -> String {
    let curve_points: Vec<Point> = curve
        .grid
        .x
        .iter()
        .zip(curve.grid.y.iter())
        .map(|(&x, &y)| Point::new(x, y))
        .collect();

    render_plot(&[], &curve_points, width, height)
}

fn render_plot(points: &[Point], curve: &[Point], width: usize, height: usize) -> String {
    let all = || points.iter().chain(curve.iter());
    let view = Viewport::fit(
        finite_range(all().map(|p| p.x)).unwrap_or((0.0, 1.0)),
        finite_range(all().map(|p| p.y)).unwrap_or((0.0, 1.0)),
        width.max(10),
        height.max(5),
    );

    let mut canvas = vec![vec![' '; view.cols]; view.rows];

    // Curve first; observed points overwrite it.
    let mut prev: Option<(usize, usize)> = None;
    for p in curve {
        let Some(cell) = view.cell(p) else {
            prev = None;
            continue;
        };
        match prev {
            Some(from) => stroke(&mut canvas, from, cell, '-'),
            None => canvas[cell.1][cell.0] = '-',
        }
        prev = Some(cell);
    }
    for (col, row) in points.iter().filter_map(|p| view.cell(p)) {
        canvas[row][col] = 'o';
    }

    let mut out = format!(
        "Plot: x=[{:.3}, {:.3}] | y=[{:.2}, {:.2}]\n",
        view.x_min, view.x_max, view.y_min, view.y_max
    );
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Data ranges mapped onto a character grid (row 0 is the top).
struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    cols: usize,
    rows: usize,
}

impl Viewport {
    /// The y-range gets a 5% margin so extreme points stay off the border.
    fn fit((x_min, x_max): (f64, f64), (y_lo, y_hi): (f64, f64), cols: usize, rows: usize) -> Self {
        let margin = ((y_hi - y_lo).abs() * 0.05).max(1e-12);
        Self {
            x_min,
            x_max,
            y_min: y_lo - margin,
            y_max: y_hi + margin,
            cols,
            rows,
        }
    }

    /// Grid cell `(col, row)` for a point, or `None` for non-finite coordinates.
    fn cell(&self, p: &Point) -> Option<(usize, usize)> {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return None;
        }
        let col = scale(p.x, self.x_min, self.x_max, self.cols);
        let row = self.rows - 1 - scale(p.y, self.y_min, self.y_max, self.rows);
        Some((col, row))
    }
}

/// Position of `v` within `[lo, hi]` as a clamped index in `0..steps`.
fn scale(v: f64, lo: f64, hi: f64, steps: usize) -> usize {
    let t = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
    (t * (steps - 1) as f64).round() as usize
}

/// Min/max over finite values; a zero-width range is widened by ±0.5.
fn finite_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo > hi {
        None
    } else if hi > lo {
        Some((lo, hi))
    } else {
        Some((lo - 0.5, hi + 0.5))
    }
}

/// Bresenham segment between two cells; only blank cells are painted.
fn stroke(canvas: &mut [Vec<char>], (c0, r0): (usize, usize), (c1, r1): (usize, usize), ch: char) {
    let (mut c, mut r) = (c0 as isize, r0 as isize);
    let (c1, r1) = (c1 as isize, r1 as isize);
    let dc = (c1 - c).abs();
    let dr = -(r1 - r).abs();
    let step_c = if c < c1 { 1 } else { -1 };
    let step_r = if r < r1 { 1 } else { -1 };
    let mut err = dc + dr;

    loop {
        let slot = canvas
            .get_mut(r as usize)
            .and_then(|line| line.get_mut(c as usize));
        if let Some(slot) = slot.filter(|s| **s == ' ') {
            *slot = ch;
        }
        if c == c1 && r == r1 {
            break;
        }
        let twice = 2 * err;
        if twice >= dr {
            err += dr;
            c += step_c;
        }
        if twice <= dc {
            err += dc;
            r += step_r;
        }
    }
}
