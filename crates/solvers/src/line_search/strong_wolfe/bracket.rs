use super::Point;

/// Relative change in bracket width below which zoom counts as stalled.
const STALL_RATIO: f64 = 0.667;

/// Interpolation trials allowed before the stall check applies.
const STALL_TRIALS: usize = 2;

/// Zoom bracket.
///
/// `lo` is the endpoint with the lowest value seen that satisfies sufficient
/// decrease, and `hi` is chosen so that `lo.slope * (hi.alpha - lo.alpha) < 0`.
/// The endpoints are not ordered: `hi.alpha` may be smaller than `lo.alpha`.
#[derive(Debug, Clone, Copy)]
pub(super) struct Bracket {
    pub(super) lo: Point,
    pub(super) hi: Point,
}

impl Bracket {
    pub(super) fn new(lo: Point, hi: Point) -> Self {
        Self { lo, hi }
    }

    pub(super) fn width(&self) -> f64 {
        (self.hi.alpha - self.lo.alpha).abs()
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.lo.alpha + self.hi.alpha)
    }
}

/// Detects when interpolation stops shrinking the bracket.
///
/// The width is recorded at the first trial of each run. Once more than
/// [`STALL_TRIALS`] interpolation trials have been made, a width that has
/// changed by less than [`STALL_RATIO`] of the recorded width signals a stall
/// and starts a new run.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Stagnation {
    reference: f64,
    trials: usize,
}

impl Stagnation {
    /// Returns true if zoom should bisect instead of interpolating.
    pub(super) fn is_stalled(&mut self, width: f64) -> bool {
        if self.trials == 0 {
            self.reference = width;
        }

        let change = ((width - self.reference) / self.reference).abs();
        if self.trials > STALL_TRIALS && change < STALL_RATIO {
            self.trials = 0;
            true
        } else {
            self.trials += 1;
            false
        }
    }
}
