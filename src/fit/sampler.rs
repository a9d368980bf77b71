//! Uniform x grids for plot-ready curves.

use crate::domain::Point;

/// `count` evenly spaced values from `min` to `max` inclusive.
///
/// The last value is pinned to `max` so the grid always ends exactly on the
/// data range. `min == max` yields a repeated value; `count == 1` yields
/// `[min]`.
pub fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let last = count - 1;
            (0..count)
                .map(|i| {
                    if i == last {
                        max
                    } else {
                        let u = i as f64 / last as f64;
                        min + u * (max - min)
                    }
                })
                .collect()
        }
    }
}

/// Smallest and largest x, or `None` for an empty set.
pub fn x_range(points: &[Point]) -> Option<(f64, f64)> {
    let mut iter = points.iter().map(|p| p.x);
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
}

/// Evaluate `f` over `linspace(min, max, count)`.
pub fn sample_curve(min: f64, max: f64, count: usize, f: impl Fn(f64) -> f64) -> Vec<Point> {
    linspace(min, max, count)
        .into_iter()
        .map(|x| Point::new(x, f(x)))
        .collect()
}
