//! Command-line parsing for the curve fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{ModelFamily, Point};
use crate::fit::DEFAULT_COMPARE_DEGREE;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "fitcurve",
    version,
    about = "Least-squares curve fitting (linear, polynomial, power, exponential)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit one model, print the equation and fit quality, and optionally plot/export.
    Fit(FitArgs),
    /// Fit every model and highlight the one with the highest R².
    Compare(CompareArgs),
    /// Fit a polynomial of degree n-1 through all n points.
    Interpolate(InterpolateArgs),
    /// Print an equivalent Python (numpy/matplotlib) script for the fit.
    Code(CodeArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
}

/// Where the points come from. Both sources may be combined.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// CSV file with `x` and `y` columns (non-numeric rows are skipped).
    #[arg(long, value_name = "CSV")]
    pub csv: Option<PathBuf>,

    /// A point as `X,Y`. Repeatable; appended after any CSV rows.
    #[arg(
        short = 'p',
        long = "point",
        value_name = "X,Y",
        value_parser = parse_point,
        allow_hyphen_values = true
    )]
    pub points: Vec<Point>,
}

/// Terminal plot options.
#[derive(Debug, Args, Clone)]
pub struct PlotOpts {
    /// Render an ASCII plot of the points and fitted curve.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

/// Options for fitting a single model.
#[derive(Debug, Args, Clone)]
pub struct FitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Which model to fit.
    #[arg(short = 'm', long, value_enum, default_value_t = ModelFamily::Linear)]
    pub model: ModelFamily,

    /// Polynomial degree (used with `--model polynomial`).
    #[arg(short = 'd', long, default_value_t = DEFAULT_COMPARE_DEGREE)]
    pub degree: usize,

    #[command(flatten)]
    pub plot: PlotOpts,

    /// Export the fitted curve (model + params + sampled grid) to JSON.
    #[arg(long = "export-curve", value_name = "JSON")]
    pub export_curve: Option<PathBuf>,

    /// Print the fit result as JSON instead of a text summary.
    #[arg(long)]
    pub json: bool,
}

/// Options for comparing all models.
#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Polynomial degree used in the comparison.
    #[arg(short = 'd', long, default_value_t = DEFAULT_COMPARE_DEGREE)]
    pub degree: usize,
}

/// Options for polynomial interpolation.
#[derive(Debug, Args, Clone)]
pub struct InterpolateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub plot: PlotOpts,

    /// Print the fit result as JSON instead of a text summary.
    #[arg(long)]
    pub json: bool,
}

/// Options for script generation.
#[derive(Debug, Args, Clone)]
pub struct CodeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Which model the script should fit.
    #[arg(short = 'm', long, value_enum, default_value_t = ModelFamily::Linear)]
    pub model: ModelFamily,

    /// Polynomial degree (used with `--model polynomial`).
    #[arg(short = 'd', long, default_value_t = DEFAULT_COMPARE_DEGREE)]
    pub degree: usize,
}

/// Options for plotting a saved curve.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Curve JSON file produced by `fitcurve fit --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

/// Parse `X,Y` into a point.
pub fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{raw}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("invalid x `{}`: {e}", x.trim()))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("invalid y `{}`: {e}", y.trim()))?;
    Ok(Point::new(x, y))
}
