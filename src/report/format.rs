//! Formatted terminal output for fits and comparisons.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::domain::{FitResult, ModelParams};
use crate::fit::FitComparison;

/// Summary of a single fit: equation, parameters, quality, or the error.
pub fn format_fit_summary(fit: &FitResult, n_points: usize) -> String {
    let mut out = String::new();

    out.push_str("=== fitcurve - Curve Fit ===\n");
    out.push_str(&format!("Model: {}\n", fit.model));
    out.push_str(&format!("Points: n={n_points}\n"));

    if let Some(err) = &fit.error {
        out.push_str(&format!("Error: {err}\n"));
        return out;
    }

    out.push_str(&format!("Equation: {}\n", fit.equation));
    if let Some(params) = &fit.params {
        out.push_str(&format!("Parameters: {}\n", fmt_params(params)));
    }
    out.push_str(&format!("RMSE: {}\n", fmt_metric(fit.rmse)));
    out.push_str(&format!("R²: {}\n", fmt_metric(fit.r2)));

    out
}

/// One row per model; the best model is marked with `*`.
pub fn format_comparison(cmp: &FitComparison) -> String {
    let mut out = String::new();
    out.push_str(format!("  {:<24} {:>12} {:>12}  {}", "model", "rmse", "r2", "equation").trim_end());
    out.push('\n');
    out.push_str(format!("  {:-<24} {:-<12} {:-<12}  {:-<8}", "", "", "", "").trim_end());
    out.push('\n');

    for (i, fit) in cmp.fits.iter().enumerate() {
        let mark = if cmp.best == Some(i) { '*' } else { ' ' };
        let label = fit.model.to_string();
        let line = match &fit.error {
            Some(err) => format!("{mark} {label:<24} {:>12} {:>12}  ({err})", "-", "-"),
            None => format!(
                "{mark} {label:<24} {:>12} {:>12}  {}",
                fmt_metric(fit.rmse),
                fmt_metric(fit.r2),
                fit.equation
            ),
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }

    match cmp.best_fit() {
        Some(best) => out.push_str(&format!("\nBest fit: {} (R² = {})\n", best.model, fmt_metric(best.r2))),
        None => out.push_str("\nBest fit: none (every model failed)\n"),
    }

    out
}

fn fmt_params(params: &ModelParams) -> String {
    match params {
        ModelParams::Linear { slope, intercept } => format!("slope={slope:.6}, intercept={intercept:.6}"),
        ModelParams::Polynomial { coefficients } => format!("coefficients={}", fmt_vec(coefficients)),
        ModelParams::Power { amplitude, exponent } => format!("A={amplitude:.6}, b={exponent:.6}"),
        ModelParams::Exponential { amplitude, rate } => format!("A={amplitude:.6}, b={rate:.6}"),
    }
}

fn fmt_metric(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.6}")
    } else {
        format!("{v}")
    }
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", parts.join(", "))
}
