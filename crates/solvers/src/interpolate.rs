//! Closed-form minimizers of low-order polynomial fits.
//!
//! Each function fits a polynomial to information known at two points `a` and
//! `b` and returns the fit's minimizer. None of them require `a < b`.
//!
//! A fit that has no usable minimizer returns `None`: an input is not finite,
//! the two points coincide, a denominator vanishes, the fit has no local
//! minimum, or the arithmetic overflows. Callers decide how to fall back.

/// Minimizer of the quadratic through `(a, fa)` and `(b, fb)` with slope `da` at `a`.
///
/// Returns `None` if the quadratic is not strictly convex.
#[must_use]
pub fn quadratic_minimum(a: f64, b: f64, fa: f64, fb: f64, da: f64) -> Option<f64> {
    if !all_finite(&[a, b, fa, fb, da]) {
        return None;
    }

    let h = b - a;
    let curvature = fb - fa - da * h;
    if h == 0.0 || curvature <= 0.0 {
        return None;
    }

    finite(a - da * h * h / (2.0 * curvature))
}

/// Minimizer of the quadratic whose slope is `da` at `a` and `db` at `b`.
///
/// This is the secant step on the derivative. Function values are not needed.
#[must_use]
pub fn secant_minimum(a: f64, b: f64, da: f64, db: f64) -> Option<f64> {
    if !all_finite(&[a, b, da, db]) {
        return None;
    }

    let slope_change = db - da;
    if a == b || slope_change == 0.0 {
        return None;
    }

    finite(a - da * (b - a) / slope_change)
}

/// Minimizer of the cubic Hermite fit through `(a, fa, da)` and `(b, fb, db)`.
///
/// Returns `None` when the cubic has no local minimum.
#[must_use]
pub fn cubic_minimum(a: f64, b: f64, fa: f64, fb: f64, da: f64, db: f64) -> Option<f64> {
    if !all_finite(&[a, b, fa, fb, da, db]) || a == b {
        return None;
    }

    let d1 = da + db - 3.0 * (fa - fb) / (a - b);
    let discriminant = d1 * d1 - da * db;
    if discriminant < 0.0 {
        return None;
    }

    let d2 = (b - a).signum() * discriminant.sqrt();
    let denominator = db - da + 2.0 * d2;
    if denominator == 0.0 {
        return None;
    }

    finite(b - (b - a) * (db + d2 - d1) / denominator)
}

fn all_finite(xs: &[f64]) -> bool {
    xs.iter().all(|x| x.is_finite())
}

fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    // f(x) = (x - 1)², f'(x) = 2(x - 1)
    fn parabola(x: f64) -> (f64, f64) {
        ((x - 1.0).powi(2), 2.0 * (x - 1.0))
    }

    // f(x) = x³ - 3x has a local minimum at x = 1.
    fn cubic(x: f64) -> (f64, f64) {
        (x.powi(3) - 3.0 * x, 3.0 * x.powi(2) - 3.0)
    }

    #[test]
    fn quadratic_recovers_parabola_vertex() {
        let (fa, da) = parabola(0.0);
        let (fb, _) = parabola(3.0);

        let x = quadratic_minimum(0.0, 3.0, fa, fb, da).expect("convex fit");
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);

        // Works with the points in either order.
        let (fa, da) = parabola(3.0);
        let (fb, _) = parabola(-0.5);
        let x = quadratic_minimum(3.0, -0.5, fa, fb, da).expect("convex fit");
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn quadratic_rejects_concave_fit() {
        // f(x) = -x² through 0 and 1 with slope 0 at 0.
        assert_eq!(quadratic_minimum(0.0, 1.0, 0.0, -1.0, 0.0), None);
    }

    #[test]
    fn secant_recovers_parabola_vertex() {
        let (_, da) = parabola(-2.0);
        let (_, db) = parabola(0.5);

        let x = secant_minimum(-2.0, 0.5, da, db).expect("slopes differ");
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn secant_rejects_equal_slopes() {
        assert_eq!(secant_minimum(0.0, 1.0, -1.0, -1.0), None);
        assert_eq!(secant_minimum(2.0, 2.0, -1.0, 1.0), None);
    }

    #[test]
    fn cubic_recovers_cubic_minimum() {
        let (fa, da) = cubic(0.0);
        let (fb, db) = cubic(2.0);

        let x = cubic_minimum(0.0, 2.0, fa, fb, da, db).expect("has minimum");
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);

        let x = cubic_minimum(2.0, 0.0, fb, fa, db, da).expect("has minimum");
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn cubic_is_exact_on_parabola() {
        let (fa, da) = parabola(0.0);
        let (fb, db) = parabola(2.0);

        let x = cubic_minimum(0.0, 2.0, fa, fb, da, db).expect("has minimum");
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn cubic_rejects_fit_without_minimum() {
        // f(x) = x³ + x is strictly increasing, so the fit has no turning point.
        assert_eq!(cubic_minimum(1.0, 2.0, 2.0, 10.0, 4.0, 13.0), None);
        assert_eq!(cubic_minimum(1.0, 1.0, 1.0, 1.0, 3.0, 3.0), None);
    }

    #[test]
    fn non_finite_inputs_yield_none() {
        assert_eq!(cubic_minimum(0.0, 1.0, 0.0, f64::INFINITY, -1.0, 1.0), None);
        assert_eq!(quadratic_minimum(0.0, 2.0, 1.0, f64::INFINITY, -2.0), None);
        assert_eq!(secant_minimum(0.0, 1.0, -1.0, f64::INFINITY), None);
        assert_eq!(secant_minimum(0.0, 1.0, f64::NAN, 1.0), None);
    }
}
