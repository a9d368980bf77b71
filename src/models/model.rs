//! Model evaluation for the four regression families.
//!
//! The fitter relies on three primitive operations:
//! - build a design row for a given x (polynomial OLS)
//! - predict y(x) given fitted parameters (for residuals/plots)
//! - render the fitted equation as text

use crate::domain::ModelParams;

/// Fill a Vandermonde design row `[1, x, x², …, x^degree]`.
///
/// Callers size `out` as `degree + 1`.
pub fn fill_design_row(x: f64, out: &mut [f64]) {
    for (i, v) in out.iter_mut().enumerate() {
        *v = x.powi(i as i32);
    }
}

/// Predict `y(x)` for the given parameters.
pub fn predict(params: &ModelParams, x: f64) -> f64 {
    match params {
        ModelParams::Linear { slope, intercept } => slope * x + intercept,
        ModelParams::Polynomial { coefficients } => eval_polynomial(coefficients, x),
        ModelParams::Power { amplitude, exponent } => amplitude * x.powf(*exponent),
        ModelParams::Exponential { amplitude, rate } => amplitude * (rate * x).exp(),
    }
}

/// `Σ coefficients[i]·x^i`, summed from the constant term upwards.
pub fn eval_polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .fold(0.0, |sum, (i, c)| sum + c * x.powi(i as i32))
}

/// Human-readable equation with 3-decimal parameters.
///
/// Polynomial terms are emitted uniformly as `{c}x^{i}`, including `x^0` and
/// `x^1`.
pub fn format_equation(params: &ModelParams) -> String {
    match params {
        ModelParams::Linear { slope, intercept } => format!("y = {}x + {}", fixed3(*slope), fixed3(*intercept)),
        ModelParams::Polynomial { coefficients } => {
            let terms: Vec<String> = coefficients
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{}x^{i}", fixed3(*c)))
                .collect();
            format!("y = {}", terms.join(" + "))
        }
        ModelParams::Power { amplitude, exponent } => format!("y = {}x^{}", fixed3(*amplitude), fixed3(*exponent)),
        ModelParams::Exponential { amplitude, rate } => format!("y = {}e^{{{}x}}", fixed3(*amplitude), fixed3(*rate)),
    }
}

/// Three decimals; an exact `-0.0` prints as `0.000`.
fn fixed3(v: f64) -> String {
    format!("{:.3}", v + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_row_is_vandermonde() {
        let mut row = [0.0; 4];
        fill_design_row(2.0, &mut row);
        assert_eq!(row, [1.0, 2.0, 4.0, 8.0]);
    }

    #[test]
    fn predict_each_family() {
        let lin = ModelParams::Linear { slope: 2.0, intercept: 1.0 };
        assert_eq!(predict(&lin, 3.0), 7.0);

        let poly = ModelParams::Polynomial { coefficients: vec![1.0, 0.0, 1.0] };
        assert_eq!(predict(&poly, 3.0), 10.0);

        let pow = ModelParams::Power { amplitude: 3.0, exponent: 2.0 };
        assert_eq!(predict(&pow, 2.0), 12.0);

        let exp = ModelParams::Exponential { amplitude: 2.0, rate: 0.0 };
        assert_eq!(predict(&exp, 5.0), 2.0);
    }

    #[test]
    fn equations_use_three_decimals() {
        let lin = ModelParams::Linear { slope: 2.0, intercept: -0.5 };
        assert_eq!(format_equation(&lin), "y = 2.000x + -0.500");

        let poly = ModelParams::Polynomial { coefficients: vec![1.0, 0.0, 1.23456] };
        assert_eq!(format_equation(&poly), "y = 1.000x^0 + 0.000x^1 + 1.235x^2");

        let pow = ModelParams::Power { amplitude: 3.0, exponent: 2.0 };
        assert_eq!(format_equation(&pow), "y = 3.000x^2.000");

        let exp = ModelParams::Exponential { amplitude: 1.5, rate: 0.25 };
        assert_eq!(format_equation(&exp), "y = 1.500e^{0.250x}");
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        let lin = ModelParams::Linear { slope: -0.0, intercept: -0.0 };
        assert_eq!(format_equation(&lin), "y = 0.000x + 0.000");
        // Small negatives keep their sign after rounding.
        let lin = ModelParams::Linear { slope: -0.0001, intercept: 1.0 };
        assert_eq!(format_equation(&lin), "y = -0.000x + 1.000");
    }
}
