//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON
//! - reloaded later for plotting

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FitError;

/// Number of grid points in a dense sample curve (100 intervals).
pub const DEFAULT_CURVE_SAMPLES: usize = 101;

/// A single observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Model family selectable on the command line.
///
/// The polynomial degree is supplied separately (`--degree`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    Linear,
    Polynomial,
    Power,
    Exponential,
}

impl ModelFamily {
    /// Attach the degree (only meaningful for `Polynomial`).
    pub fn with_degree(self, degree: usize) -> ModelKind {
        match self {
            ModelFamily::Linear => ModelKind::Linear,
            ModelFamily::Polynomial => ModelKind::Polynomial { degree },
            ModelFamily::Power => ModelKind::Power,
            ModelFamily::Exponential => ModelKind::Exponential,
        }
    }
}

/// Concrete model to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelKind {
    Linear,
    Polynomial { degree: usize },
    Power,
    Exponential,
}

impl ModelKind {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Linear => "Linear",
            ModelKind::Polynomial { .. } => "Polynomial",
            ModelKind::Power => "Power",
            ModelKind::Exponential => "Exponential",
        }
    }

    pub fn family(self) -> ModelFamily {
        match self {
            ModelKind::Linear => ModelFamily::Linear,
            ModelKind::Polynomial { .. } => ModelFamily::Polynomial,
            ModelKind::Power => ModelFamily::Power,
            ModelKind::Exponential => ModelFamily::Exponential,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Polynomial { degree } => write!(f, "Polynomial (degree {degree})"),
            other => f.write_str(other.display_name()),
        }
    }
}

/// Fitted parameters, one shape per model family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum ModelParams {
    /// `y = slope·x + intercept`
    Linear { slope: f64, intercept: f64 },
    /// `y = Σ coefficients[i]·x^i`
    Polynomial { coefficients: Vec<f64> },
    /// `y = amplitude·x^exponent`
    Power { amplitude: f64, exponent: f64 },
    /// `y = amplitude·e^(rate·x)`
    Exponential { amplitude: f64, rate: f64 },
}

/// Output of a single fit.
///
/// When `error` is set, every other field except `model` is a placeholder
/// (`params = None`, empty curve and equation, NaN metrics) and must not be
/// used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitResult {
    pub model: ModelKind,
    pub params: Option<ModelParams>,
    /// Plot-ready `(x, fitted y)` pairs across the fitted x-range.
    pub sample_curve: Vec<Point>,
    pub rmse: f64,
    pub r2: f64,
    pub equation: String,
    /// Points the parameters and metrics were computed from (after filtering).
    pub n_used: usize,
    #[serde(rename = "error_message")]
    pub error: Option<FitError>,
}

impl FitResult {
    pub fn failed(model: ModelKind, error: FitError) -> Self {
        Self {
            model,
            params: None,
            sample_curve: Vec::new(),
            rmse: f64::NAN,
            r2: f64::NAN,
            equation: String::new(),
            n_used: 0,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The user-facing failure message, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    /// Parameters of a successful fit, or the reason there are none.
    pub fn fitted_params(&self) -> Result<&ModelParams, FitError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.params.as_ref().ok_or(FitError::NoData)
    }
}

/// Fit quality diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    #[serde(deserialize_with = "nan_if_null")]
    pub rmse: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub r2: f64,
    /// Number of points the metrics were computed over (after filtering).
    pub n: usize,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub csv_path: Option<PathBuf>,
    /// Points given inline on the command line (appended after CSV rows).
    pub inline_points: Vec<Point>,
    /// `None` fits the interpolating polynomial (degree n-1).
    pub model: Option<ModelKind>,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_curve: Option<PathBuf>,
    pub json: bool,
}

/// A saved curve file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub model: ModelKind,
    pub params: ModelParams,
    pub equation: String,
    pub fit_quality: FitQuality,
    pub grid: CurveGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    #[serde(deserialize_with = "nan_if_null_vec")]
    pub y: Vec<f64>,
}

// serde_json writes non-finite floats as `null`; read them back as NaN.
fn nan_if_null<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NAN))
}

fn nan_if_null_vec<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<f64>, D::Error> {
    let raw = Vec::<Option<f64>>::deserialize(d)?;
    Ok(raw.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}
