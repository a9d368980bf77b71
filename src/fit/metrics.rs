//! Goodness-of-fit metrics.

use crate::domain::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorMetrics {
    pub rmse: f64,
    pub r2: f64,
}

/// RMSE and R² of `predict` against `points`.
///
/// `r2 = 1 − SSres/SStot` is not guarded: when every `y` is identical
/// `SStot` is zero and `r2` comes out NaN (perfect fit) or −∞.
pub fn error_metrics(points: &[Point], predict: impl Fn(f64) -> f64) -> ErrorMetrics {
    let n = points.len() as f64;
    let residuals: Vec<f64> = points.iter().map(|p| p.y - predict(p.x)).collect();

    let ss_res: f64 = residuals.iter().map(|r| r * r).sum();
    let rmse = (ss_res / n).sqrt();

    let y_mean = points.iter().map(|p| p.y).sum::<f64>() / n;
    let ss_tot: f64 = points.iter().map(|p| (p.y - y_mean).powi(2)).sum();
    let r2 = 1.0 - ss_res / ss_tot;

    ErrorMetrics { rmse, r2 }
}
