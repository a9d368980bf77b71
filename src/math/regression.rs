//! Closed-form simple linear regression (`v = intercept + slope·u`).
//!
//! Linear, power and exponential fits all reduce to this after choosing what
//! `u` and `v` are (`x`/`y`, `ln x`/`ln y`, or `x`/`ln y`).

/// Running sums of a `(u, v)` sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegressionSums {
    pub n: f64,
    pub su: f64,
    pub sv: f64,
    pub suv: f64,
    pub suu: f64,
}

impl RegressionSums {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut s = Self::default();
        for (u, v) in pairs {
            s.n += 1.0;
            s.su += u;
            s.sv += v;
            s.suv += u * v;
            s.suu += u * u;
        }
        s
    }

    /// `nΣu² − (Σu)²`. Zero when every `u` is identical.
    pub fn denominator(&self) -> f64 {
        self.n * self.suu - self.su * self.su
    }

    /// Slope, or `None` when the denominator is exactly zero.
    ///
    /// No tolerance is applied: near-singular inputs produce large but finite
    /// slopes.
    pub fn slope(&self) -> Option<f64> {
        let den = self.denominator();
        if den == 0.0 {
            return None;
        }
        Some((self.n * self.suv - self.su * self.sv) / den)
    }

    /// Intercept recovered from the slope: `(Σv − slope·Σu) / n`.
    pub fn intercept_from_slope(&self, slope: f64) -> f64 {
        (self.sv - slope * self.su) / self.n
    }

    /// Intercept and slope both solved over the common denominator:
    /// `a = (ΣvΣu² − ΣuΣuv) / den`.
    pub fn solve(&self) -> Option<(f64, f64)> {
        let den = self.denominator();
        if den == 0.0 {
            return None;
        }
        let intercept = (self.sv * self.suu - self.su * self.suv) / den;
        let slope = (self.n * self.suv - self.su * self.sv) / den;
        Some((intercept, slope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_line() {
        let s = RegressionSums::from_pairs([(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);
        let m = s.slope().unwrap();
        assert!((m - 2.0).abs() < 1e-12);
        assert!((s.intercept_from_slope(m) - 1.0).abs() < 1e-12);

        let (a, b) = s.solve().unwrap();
        assert!((a - 1.0).abs() < 1e-12);
        assert!((b - 2.0).abs() < 1e-12);
    }

    #[test]
    fn identical_u_has_no_solution() {
        let s = RegressionSums::from_pairs([(5.0, 1.0), (5.0, 9.0)]);
        assert_eq!(s.denominator(), 0.0);
        assert!(s.slope().is_none());
        assert!(s.solve().is_none());
    }
}
