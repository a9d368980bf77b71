use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use curve_fit::domain::{DEFAULT_CURVE_SAMPLES, FitResult, ModelKind, ModelParams, Point};
use curve_fit::fit::{compare_fits, fit, fit_exponential, fit_linear, fit_polynomial, fit_power};

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

/// Noisy samples of `f` on random x in `(lo, hi)`.
fn noisy(seed: u64, n: usize, lo: f64, hi: f64, sigma: f64, f: impl Fn(f64) -> f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, sigma).unwrap();
    (0..n)
        .map(|_| {
            let x = rng.gen_range(lo..hi);
            Point::new(x, f(x) + noise.sample(&mut rng))
        })
        .collect()
}

fn same_bits(a: &FitResult, b: &FitResult) -> bool {
    let bits = |v: f64| v.to_bits();
    a.model == b.model
        && a.params == b.params
        && a.equation == b.equation
        && a.error == b.error
        && bits(a.rmse) == bits(b.rmse)
        && bits(a.r2) == bits(b.r2)
        && a.sample_curve.len() == b.sample_curve.len()
        && a
            .sample_curve
            .iter()
            .zip(&b.sample_curve)
            .all(|(p, q)| bits(p.x) == bits(q.x) && bits(p.y) == bits(q.y))
}

#[test]
fn line_is_recovered_exactly() {
    let r = fit_linear(&pts(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]));
    let Some(ModelParams::Linear { slope, intercept }) = r.params else {
        panic!("expected linear params, got {r:?}");
    };
    assert_abs_diff_eq!(slope, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(intercept, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(r.rmse, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(r.r2, 1.0, epsilon = 1e-9);
}

#[test]
fn linear_failures_carry_their_messages() {
    let one = fit_linear(&pts(&[(1.0, 2.0)]));
    assert_eq!(
        one.error_message().as_deref(),
        Some("At least two points are required for linear fit.")
    );
    assert!(one.params.is_none());

    let vertical = fit_linear(&pts(&[(5.0, 1.0), (5.0, 9.0)]));
    assert_eq!(
        vertical.error_message().as_deref(),
        Some("Denominator zero, cannot compute fit (check points).")
    );
}

#[test]
fn quadratic_is_recovered() {
    let points: Vec<Point> = (0..5).map(|i| f64::from(i)).map(|x| Point::new(x, x * x + 1.0)).collect();
    let r = fit_polynomial(&points, 2);
    let Some(ModelParams::Polynomial { coefficients }) = &r.params else {
        panic!("expected polynomial params, got {r:?}");
    };
    assert_eq!(coefficients.len(), 3);
    for (got, want) in coefficients.iter().zip([1.0, 0.0, 1.0]) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-6);
    }
    assert_abs_diff_eq!(r.r2, 1.0, epsilon = 1e-9);
}

#[test]
fn polynomial_degree_must_be_below_point_count() {
    let r = fit_polynomial(&pts(&[(0.0, 1.0), (1.0, 2.0), (2.0, 5.0)]), 3);
    assert_eq!(
        r.error_message().as_deref(),
        Some("Degree must be less than number of points.")
    );
}

#[test]
fn power_ignores_points_outside_the_positive_quadrant() {
    let with_negative = fit_power(&pts(&[(-1.0, 5.0), (1.0, 3.0), (2.0, 12.0), (3.0, 27.0)]));
    let filtered = fit_power(&pts(&[(1.0, 3.0), (2.0, 12.0), (3.0, 27.0)]));
    assert!(with_negative.is_ok());
    assert!(same_bits(&with_negative, &filtered));

    let Some(ModelParams::Power { amplitude, exponent }) = filtered.params else {
        panic!("expected power params");
    };
    assert_relative_eq!(amplitude, 3.0, max_relative = 1e-9);
    assert_relative_eq!(exponent, 2.0, max_relative = 1e-9);
    assert_abs_diff_eq!(filtered.sample_curve[0].x, 1.0);
}

#[test]
fn exponential_overflow_is_reported() {
    let r = fit_exponential(&pts(&[(1.0, 1e300), (2.0, 1e200)]));
    assert_eq!(
        r.error_message().as_deref(),
        Some("Computed parameters are not finite numbers.")
    );
    assert!(r.sample_curve.is_empty());
}

#[test]
fn exponential_recovers_noisy_growth() {
    let points = noisy(11, 60, 0.5, 4.0, 0.01, |x| 2.0 * (0.7 * x).exp());
    let r = fit_exponential(&points);
    let Some(ModelParams::Exponential { amplitude, rate }) = r.params else {
        panic!("expected exponential params, got {r:?}");
    };
    assert_relative_eq!(amplitude, 2.0, max_relative = 0.02);
    assert_relative_eq!(rate, 0.7, max_relative = 0.02);
    assert!(r.r2 > 0.999);
}

#[test]
fn repeated_fits_are_bit_identical() {
    let points = noisy(7, 40, 0.1, 10.0, 0.5, |x| 0.5 * x * x - x + 3.0);
    let kinds = [
        ModelKind::Linear,
        ModelKind::Polynomial { degree: 3 },
        ModelKind::Power,
        ModelKind::Exponential,
    ];
    for kind in kinds {
        let a = fit(&points, kind);
        let b = fit(&points, kind);
        assert!(same_bits(&a, &b), "{kind} differs between runs");
    }
}

#[test]
fn sample_curves_span_the_fitted_points() {
    let mut points = noisy(3, 25, 0.2, 8.0, 0.3, |x| 1.5 * x.powf(1.3) + 2.0);
    // Excluded from power/exponential; included in polynomial.
    points.push(Point::new(-2.0, 4.0));

    let positive: Vec<&Point> = points.iter().filter(|p| p.x > 0.0 && p.y > 0.0).collect();
    let pos_min = positive.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let pos_max = positive.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let all_max = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);

    let cases = [
        (ModelKind::Polynomial { degree: 2 }, -2.0, all_max),
        (ModelKind::Power, pos_min, pos_max),
        (ModelKind::Exponential, pos_min, pos_max),
    ];
    for (kind, lo, hi) in cases {
        let r = fit(&points, kind);
        assert!(r.is_ok(), "{kind}: {:?}", r.error);
        assert_eq!(r.sample_curve.len(), DEFAULT_CURVE_SAMPLES);
        assert_eq!(r.sample_curve[0].x, lo);
        assert_eq!(r.sample_curve[DEFAULT_CURVE_SAMPLES - 1].x, hi);
        assert!(r.sample_curve.windows(2).all(|w| w[0].x <= w[1].x), "{kind}");
    }

    let line = fit_linear(&points);
    assert_eq!(line.sample_curve.len(), 2);
}

#[test]
fn comparison_prefers_the_generating_model() {
    let points = noisy(5, 50, 0.5, 6.0, 0.05, |x| 4.0 * x + 1.0);
    let cmp = compare_fits(&points, 2);
    assert_eq!(cmp.fits.len(), 4);
    let best = cmp.best_fit().expect("some model succeeds");
    // The quadratic nests the line, so it can only match or beat it on R².
    assert_eq!(best.model, ModelKind::Polynomial { degree: 2 });
    assert!(best.r2 >= cmp.fits[0].r2);
}
