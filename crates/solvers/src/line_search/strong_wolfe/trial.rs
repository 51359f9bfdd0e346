use crate::interpolate::{cubic_minimum, quadratic_minimum, secant_minimum};

use super::bracket::Bracket;

/// Which rule produced a zoom trial step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialKind {
    /// Cubic fit over the bracket.
    Cubic,

    /// Quadratic fit, used when the cubic fit has no minimum.
    Quadratic,

    /// Average of the cubic and quadratic fits.
    Average,

    /// Secant step on the endpoint slopes.
    Secant,

    /// Cubic fit with the endpoint roles swapped.
    SwappedCubic,

    /// Bracket midpoint, forced because the bracket stopped shrinking.
    Bisection,

    /// Bracket midpoint, used because no fit produced a finite minimum.
    Midpoint,
}

/// A candidate step for the next zoom evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Trial {
    pub(super) alpha: f64,
    pub(super) kind: TrialKind,
}

impl Trial {
    fn new(alpha: f64, kind: TrialKind) -> Self {
        Self { alpha, kind }
    }

    pub(super) fn bisection(bracket: &Bracket) -> Self {
        Self::new(bracket.midpoint(), TrialKind::Bisection)
    }

    fn midpoint(bracket: &Bracket) -> Self {
        Self::new(bracket.midpoint(), TrialKind::Midpoint)
    }
}

/// Chooses the next trial step from the bracket endpoints.
///
/// The cases are checked in order:
///
/// 1. `hi` is higher than `lo`: take the cubic step if it lands closer to `lo`
///    than the quadratic step, otherwise average the two.
/// 2. The endpoint slopes differ in sign: take the cubic step unless it lands
///    closer to `hi` than the secant step.
/// 3. The slope at `hi` is no steeper than at `lo`: take the secant step.
/// 4. Otherwise take the cubic step with `lo` and `hi` swapped.
///
/// A fit without a finite minimum drops out of its case. If every fit in the
/// chosen case drops out, the bracket midpoint is used.
pub(super) fn select(bracket: &Bracket) -> Trial {
    let Bracket { lo, hi } = *bracket;

    let cubic = || cubic_minimum(lo.alpha, hi.alpha, lo.value, hi.value, lo.slope, hi.slope);
    let secant = || secant_minimum(lo.alpha, hi.alpha, lo.slope, hi.slope);

    if hi.value > lo.value {
        let quadratic = quadratic_minimum(lo.alpha, hi.alpha, lo.value, hi.value, lo.slope);
        match (cubic(), quadratic) {
            (Some(c), Some(q)) => {
                if (c - lo.alpha).abs() < (q - lo.alpha).abs() {
                    Trial::new(c, TrialKind::Cubic)
                } else {
                    Trial::new(0.5 * (q + c), TrialKind::Average)
                }
            }
            (Some(c), None) => Trial::new(c, TrialKind::Cubic),
            (None, Some(q)) => Trial::new(q, TrialKind::Quadratic),
            (None, None) => Trial::midpoint(bracket),
        }
    } else if lo.slope * hi.slope < 0.0 {
        match (cubic(), secant()) {
            (Some(c), Some(s)) => {
                if (c - hi.alpha).abs() >= (s - hi.alpha).abs() {
                    Trial::new(c, TrialKind::Cubic)
                } else {
                    Trial::new(s, TrialKind::Secant)
                }
            }
            (Some(c), None) => Trial::new(c, TrialKind::Cubic),
            (None, Some(s)) => Trial::new(s, TrialKind::Secant),
            (None, None) => Trial::midpoint(bracket),
        }
    } else if hi.slope.abs() <= lo.slope.abs() {
        secant().map_or_else(
            || Trial::midpoint(bracket),
            |s| Trial::new(s, TrialKind::Secant),
        )
    } else {
        cubic_minimum(hi.alpha, lo.alpha, hi.value, lo.value, hi.slope, lo.slope).map_or_else(
            || Trial::midpoint(bracket),
            |c| Trial::new(c, TrialKind::SwappedCubic),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::super::Point;

    // f(a) = (a - 1)², f'(a) = 2(a - 1)
    fn parabola(alpha: f64) -> Point {
        Point::new(alpha, (alpha - 1.0).powi(2), 2.0 * (alpha - 1.0))
    }

    // f(a) = a³ - 3a, f'(a) = 3a² - 3
    fn cubic(alpha: f64) -> Point {
        Point::new(alpha, alpha.powi(3) - 3.0 * alpha, 3.0 * alpha.powi(2) - 3.0)
    }

    #[test]
    fn higher_hi_averages_when_fits_agree() {
        // On an exact parabola the cubic and quadratic coincide, so the cubic is
        // not strictly closer to `lo` and the average is returned.
        let bracket = Bracket::new(parabola(0.0), parabola(3.0));

        let trial = select(&bracket);

        assert_eq!(trial.kind, TrialKind::Average);
        assert_relative_eq!(trial.alpha, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn higher_hi_prefers_cubic_closer_to_lo() {
        // f(a) = -sin(a) on [0, 3.5]: the quadratic ignores the flattening
        // slope at hi and overshoots the cubic step.
        let f = |a: f64| Point::new(a, -a.sin(), -a.cos());
        let bracket = Bracket::new(f(0.0), f(3.5));

        let trial = select(&bracket);

        assert_eq!(trial.kind, TrialKind::Cubic);
        assert!((trial.alpha - FRAC_PI_2).abs() < 0.2);
    }

    #[test]
    fn higher_hi_averages_when_quadratic_is_closer_to_lo() {
        // f(a) = a³ - 3a on [0, 2.5]: the cubic lands on the minimum at 1 and
        // the quadratic at 0.6, so the two are averaged.
        let bracket = Bracket::new(cubic(0.0), cubic(2.5));

        let trial = select(&bracket);

        assert_eq!(trial.kind, TrialKind::Average);
        assert_relative_eq!(trial.alpha, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn opposite_slopes_tie_goes_to_cubic() {
        // Equal values at both ends of a parabola: both fits give the vertex.
        let bracket = Bracket::new(parabola(0.5), parabola(1.5));

        let trial = select(&bracket);

        assert_eq!(trial.kind, TrialKind::Cubic);
        assert_relative_eq!(trial.alpha, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn opposite_slopes_use_secant_when_cubic_is_closer_to_hi() {
        // f(a) = a³ - 3a on [0, 1.5]: the cubic step is 1, the secant step
        // is 2/3, and the cubic lands closer to hi.
        let bracket = Bracket::new(cubic(0.0), cubic(1.5));
        assert!(bracket.hi.value <= bracket.lo.value);

        let trial = select(&bracket);

        assert_eq!(trial.kind, TrialKind::Secant);
        assert_relative_eq!(trial.alpha, 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn flatter_hi_uses_secant() {
        // Both slopes negative on the way down to the vertex, hi is flatter.
        let bracket = Bracket::new(parabola(0.0), parabola(0.5));

        let trial = select(&bracket);

        assert_eq!(trial.kind, TrialKind::Secant);
        assert_relative_eq!(trial.alpha, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn steeper_hi_uses_swapped_cubic() {
        // Same-sign slopes with hi steeper than lo and hi no higher than lo.
        let lo = Point::new(0.5, 0.25, -1.0);
        let hi = Point::new(0.0, 0.25, -3.0);
        let bracket = Bracket::new(lo, hi);

        let trial = select(&bracket);

        assert_eq!(trial.kind, TrialKind::SwappedCubic);
        assert!(trial.alpha.is_finite());
    }

    #[test]
    fn higher_hi_uses_quadratic_when_cubic_has_no_minimum() {
        // Endpoint data with d1 = 0 and same-sign slopes: the cubic
        // discriminant is negative, while the quadratic opens upward.
        let lo = Point::new(1.0, 0.0, -1.0);
        let hi = Point::new(0.0, 2.0, -5.0);
        let bracket = Bracket::new(lo, hi);

        let trial = select(&bracket);

        assert_eq!(trial.kind, TrialKind::Quadratic);
        assert_relative_eq!(trial.alpha, 1.5);
    }

    #[test]
    fn degenerate_bracket_falls_back_to_midpoint() {
        let point = parabola(2.0);
        let bracket = Bracket::new(point, point);

        let trial = select(&bracket);

        assert_eq!(trial.kind, TrialKind::Midpoint);
        assert_relative_eq!(trial.alpha, 2.0);
    }

    #[test]
    fn infinite_hi_falls_back_to_midpoint() {
        let lo = parabola(0.0);
        let hi = Point::new(2.0, f64::INFINITY, 2.0);
        let bracket = Bracket::new(lo, hi);

        let trial = select(&bracket);

        assert_eq!(trial.kind, TrialKind::Midpoint);
        assert_relative_eq!(trial.alpha, 1.0);
    }

    #[test]
    fn bisection_uses_midpoint() {
        let bracket = Bracket::new(parabola(0.25), parabola(2.25));

        let trial = Trial::bisection(&bracket);

        assert_eq!(trial.kind, TrialKind::Bisection);
        assert_relative_eq!(trial.alpha, 1.25);
    }
}
