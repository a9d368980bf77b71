//! Equivalent Python (numpy + matplotlib) analysis scripts.
//!
//! The scripts are a convenience export: they let a user reproduce a fit
//! outside this tool. Log-linearized models apply the same `x > 0 && y > 0`
//! filter and the same transforms as the fitters, so the numbers agree.

use crate::domain::{ModelKind, Point};

/// Render the script for `model` with `points` embedded.
pub fn generate_script(model: ModelKind, points: &[Point]) -> String {
    let data = data_block(points);
    let body = match model {
        ModelKind::Linear => linear_body(),
        ModelKind::Polynomial { degree } => polynomial_body(degree),
        ModelKind::Power => power_body(),
        ModelKind::Exponential => exponential_body(),
    };
    format!("{PRELUDE}{data}\n{body}{}", plot_block(model))
}

const PRELUDE: &str = "import numpy as np\nimport matplotlib.pyplot as plt\n\n";

fn join_values(values: impl Iterator<Item = f64>) -> String {
    values.map(py_float).collect::<Vec<_>>().join(", ")
}

/// Python literal for a float; non-finite values use numpy's names.
fn py_float(v: f64) -> String {
    if v.is_nan() {
        "np.nan".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "np.inf" } else { "-np.inf" }.to_string()
    } else {
        v.to_string()
    }
}

fn data_block(points: &[Point]) -> String {
    format!(
        "# Input data\nx = np.array([{}])\ny = np.array([{}])\n",
        join_values(points.iter().map(|p| p.x)),
        join_values(points.iter().map(|p| p.y)),
    )
}

fn linear_body() -> String {
    "\
# Perform linear regression (degree = 1)
coefficients = np.polyfit(x, y, 1)
slope, intercept = coefficients
print(f\"Slope: {slope}\")
print(f\"Intercept: {intercept}\")
print(f\"Equation: y = {slope:.4f}x + {intercept:.4f}\")

# Generate predicted values
x_fit = np.linspace(min(x), max(x), 101)
y_fit = slope * x_fit + intercept
"
    .to_string()
}

fn polynomial_body(degree: usize) -> String {
    format!(
        "\
# Fit a polynomial of degree {degree}
coefficients = np.polyfit(x, y, {degree})
polynomial = np.poly1d(coefficients)

# Print the polynomial
print(\"Polynomial Coefficients:\", coefficients)
print(\"Fitted Polynomial:\")
print(polynomial)

# Generate fitted curve
x_fit = np.linspace(min(x), max(x), 101)
y_fit = polynomial(x_fit)
"
    )
}

fn power_body() -> String {
    "\
# Remove non-positive values for log transform
mask = (x > 0) & (y > 0)
x = x[mask]
y = y[mask]

# Fit a line: log(y) = log(a) + b*log(x)
b, log_a = np.polyfit(np.log(x), np.log(y), 1)
a = np.exp(log_a)

print(f\"a = {a}\")
print(f\"b = {b}\")
print(f\"Fitted Power Function: y = {a:.4f} * x^{b:.4f}\")

# Generate fitted curve
x_fit = np.linspace(min(x), max(x), 101)
y_fit = a * x_fit**b
"
    .to_string()
}

fn exponential_body() -> String {
    "\
# Remove non-positive values for log transform
mask = (x > 0) & (y > 0)
x = x[mask]
y = y[mask]

# Fit a line: log(y) = log(a) + b*x
b, log_a = np.polyfit(x, np.log(y), 1)
a = np.exp(log_a)

print(f\"a = {a}\")
print(f\"b = {b}\")
print(f\"Fitted Exponential Function: y = {a:.4f} * e^({b:.4f}x)\")

# Generate fitted curve
x_fit = np.linspace(min(x), max(x), 101)
y_fit = a * np.exp(b * x_fit)
"
    .to_string()
}

fn plot_block(model: ModelKind) -> String {
    let (label, title) = match model {
        ModelKind::Linear => ("Fitted Line".to_string(), "Linear Regression"),
        ModelKind::Polynomial { degree } => (format!("Polynomial Fit (deg={degree})"), "Polynomial Curve Fitting"),
        ModelKind::Power => ("Fitted Power Function".to_string(), "Power Function Fitting: y = a*x^b"),
        ModelKind::Exponential => (
            "Fitted Exponential Curve".to_string(),
            "Exponential Curve Fitting: y = a*e^(bx)",
        ),
    };
    format!(
        "
# Plot original data and fitted curve
plt.scatter(x, y, color='red', label='Data Points')
plt.plot(x_fit, y_fit, color='blue', label='{label}')
plt.xlabel('x')
plt.ylabel('y')
plt.title('{title}')
plt.legend()
plt.grid(True)
plt.show()
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(f64, f64)]) -> Vec<Point> {
        v.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn embeds_points_in_input_order() {
        let script = generate_script(ModelKind::Linear, &pts(&[(2.0, 5.5), (1.0, 3.0), (-0.25, 1.0)]));
        assert!(script.starts_with("import numpy as np\nimport matplotlib.pyplot as plt\n"));
        assert!(script.contains("x = np.array([2, 1, -0.25])"));
        assert!(script.contains("y = np.array([5.5, 3, 1])"));
        assert!(script.contains("np.polyfit(x, y, 1)"));
        assert!(script.trim_end().ends_with("plt.show()"));
    }

    #[test]
    fn polynomial_script_uses_degree() {
        let script = generate_script(ModelKind::Polynomial { degree: 3 }, &pts(&[(0.0, 1.0)]));
        assert!(script.contains("# Fit a polynomial of degree 3"));
        assert!(script.contains("np.polyfit(x, y, 3)"));
        assert!(script.contains("label='Polynomial Fit (deg=3)'"));
    }

    #[test]
    fn log_models_filter_like_the_fitters() {
        for model in [ModelKind::Power, ModelKind::Exponential] {
            let script = generate_script(model, &pts(&[(1.0, 1.0)]));
            assert!(script.contains("mask = (x > 0) & (y > 0)"), "{model}");
        }
        let power = generate_script(ModelKind::Power, &[]);
        assert!(power.contains("np.polyfit(np.log(x), np.log(y), 1)"));
        let exp = generate_script(ModelKind::Exponential, &[]);
        assert!(exp.contains("np.polyfit(x, np.log(y), 1)"));
        assert!(exp.contains("x = np.array([])"));
    }

    #[test]
    fn non_finite_values_use_numpy_names() {
        let script = generate_script(
            ModelKind::Linear,
            &pts(&[(f64::INFINITY, 1.0), (2.0, f64::NAN), (f64::NEG_INFINITY, 3.0)]),
        );
        assert!(script.contains("x = np.array([np.inf, 2, -np.inf])"), "{script}");
        assert!(script.contains("y = np.array([1, np.nan, 3])"), "{script}");
        assert!(!script.contains("[inf") && !script.contains("NaN"));
    }
}
