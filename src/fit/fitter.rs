//! Model fitters.
//!
//! Each fitter:
//! - validates the point set for its model
//! - solves for parameters in closed form (directly, or after a log transform)
//! - samples the fitted curve over the x-range of the points it used
//! - scores the fit against those same points
//!
//! Failures never escape as `Err`: they are folded into `FitResult::error`.

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::domain::{DEFAULT_CURVE_SAMPLES, FitResult, ModelKind, ModelParams, Point};
use crate::error::FitError;
use crate::fit::metrics::error_metrics;
use crate::fit::sampler::{sample_curve, x_range};
use crate::math::{RegressionSums, solve_normal_equations};
use crate::models::{fill_design_row, format_equation, predict};

/// Fit the requested model.
pub fn fit(points: &[Point], model: ModelKind) -> FitResult {
    match model {
        ModelKind::Linear => fit_linear(points),
        ModelKind::Polynomial { degree } => fit_polynomial(points, degree),
        ModelKind::Power => fit_power(points),
        ModelKind::Exponential => fit_exponential(points),
    }
}

/// Least-squares line through all points.
///
/// The sample curve is the segment between the smallest and largest x.
pub fn fit_linear(points: &[Point]) -> FitResult {
    finish(ModelKind::Linear, points, linear_params(points), 2)
}

/// Least-squares polynomial of the given degree through all points.
pub fn fit_polynomial(points: &[Point], degree: usize) -> FitResult {
    let model = ModelKind::Polynomial { degree };
    finish(model, points, polynomial_params(points, degree), DEFAULT_CURVE_SAMPLES)
}

/// Polynomial of degree `n − 1` through all `n` points.
pub fn fit_interpolation(points: &[Point]) -> FitResult {
    fit_polynomial(points, points.len().saturating_sub(1))
}

/// `y = A·x^b`, fitted on points with `x > 0` and `y > 0` only.
///
/// Points outside that quadrant take no part in the parameters, the sample
/// range, or the metrics.
pub fn fit_power(points: &[Point]) -> FitResult {
    let used = positive_points(points);
    let params = log_linear_params(&used, LogModel::Power);
    finish(ModelKind::Power, &used, params, DEFAULT_CURVE_SAMPLES)
}

/// `y = A·e^(b·x)`, fitted on points with `x > 0` and `y > 0` only.
///
/// The model itself only needs `y > 0`; the stricter filter matches the power
/// fit and is kept for compatibility with existing results.
pub fn fit_exponential(points: &[Point]) -> FitResult {
    let used = positive_points(points);
    let params = log_linear_params(&used, LogModel::Exponential);
    finish(ModelKind::Exponential, &used, params, DEFAULT_CURVE_SAMPLES)
}

fn finish(
    model: ModelKind,
    used: &[Point],
    params: Result<ModelParams, FitError>,
    curve_samples: usize,
) -> FitResult {
    let params = match params {
        Ok(p) => p,
        Err(err) => {
            debug!(%model, n = used.len(), category = ?err.category(), error = %err, "fit failed");
            return FitResult::failed(model, err);
        }
    };

    // Validation guarantees at least one point here.
    let Some((x_min, x_max)) = x_range(used) else {
        return FitResult::failed(model, FitError::NoData);
    };

    let sample_curve = sample_curve(x_min, x_max, curve_samples, |x| predict(&params, x));
    let metrics = error_metrics(used, |x| predict(&params, x));
    let equation = format_equation(&params);

    debug!(%model, n = used.len(), rmse = metrics.rmse, r2 = metrics.r2, %equation, "fit complete");

    FitResult {
        model,
        params: Some(params),
        sample_curve,
        rmse: metrics.rmse,
        r2: metrics.r2,
        equation,
        n_used: used.len(),
        error: None,
    }
}

fn linear_params(points: &[Point]) -> Result<ModelParams, FitError> {
    if points.len() < 2 {
        return Err(FitError::TooFewPoints);
    }

    let sums = RegressionSums::from_pairs(points.iter().map(|p| (p.x, p.y)));
    let slope = sums.slope().ok_or(FitError::ZeroDenominator)?;
    let intercept = sums.intercept_from_slope(slope);

    Ok(ModelParams::Linear { slope, intercept })
}

fn polynomial_params(points: &[Point], degree: usize) -> Result<ModelParams, FitError> {
    if points.is_empty() {
        return Err(FitError::NoData);
    }
    if degree < 1 {
        return Err(FitError::DegreeTooLow);
    }
    if degree >= points.len() {
        return Err(FitError::DegreeTooHigh);
    }

    let n = points.len();
    let p = degree + 1;

    // Vandermonde design matrix and target vector.
    let mut x = DMatrix::<f64>::zeros(n, p);
    let mut y = DVector::<f64>::zeros(n);
    let mut row = vec![0.0; p];

    for (i, point) in points.iter().enumerate() {
        fill_design_row(point.x, &mut row);
        for (j, v) in row.iter().enumerate() {
            x[(i, j)] = *v;
        }
        y[i] = point.y;
    }

    let beta = solve_normal_equations(&x, &y)?;
    Ok(ModelParams::Polynomial {
        coefficients: beta.iter().copied().collect(),
    })
}

/// Models that become a straight line after taking `ln y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogModel {
    /// `ln y = ln A + b·ln x`
    Power,
    /// `ln y = ln A + b·x`
    Exponential,
}

impl LogModel {
    fn name(self) -> &'static str {
        match self {
            LogModel::Power => "power",
            LogModel::Exponential => "exponential",
        }
    }

    fn linearize(self, p: &Point) -> (f64, f64) {
        match self {
            LogModel::Power => (p.x.ln(), p.y.ln()),
            LogModel::Exponential => (p.x, p.y.ln()),
        }
    }

    fn params(self, amplitude: f64, slope: f64) -> ModelParams {
        match self {
            LogModel::Power => ModelParams::Power {
                amplitude,
                exponent: slope,
            },
            LogModel::Exponential => ModelParams::Exponential { amplitude, rate: slope },
        }
    }
}

fn positive_points(points: &[Point]) -> Vec<Point> {
    points.iter().copied().filter(|p| p.x > 0.0 && p.y > 0.0).collect()
}

fn log_linear_params(used: &[Point], model: LogModel) -> Result<ModelParams, FitError> {
    match used.len() {
        0 => return Err(FitError::NoPositivePoints(model.name())),
        1 => return Err(FitError::TooFewValidPoints),
        _ => {}
    }

    let sums = RegressionSums::from_pairs(used.iter().map(|p| model.linearize(p)));
    let (ln_amplitude, slope) = sums.solve().ok_or(FitError::ZeroLogDenominator)?;
    let amplitude = ln_amplitude.exp();

    if !amplitude.is_finite() || !slope.is_finite() {
        return Err(FitError::NonFiniteParameters);
    }

    Ok(model.params(amplitude, slope))
}
