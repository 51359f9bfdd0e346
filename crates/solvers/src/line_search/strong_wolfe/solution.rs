use super::{Config, Origin, Point};

/// Indicates how the line search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Found a step satisfying both Strong Wolfe conditions.
    Converged,

    /// Zoom produced a trial below the minimum step and returned the floor.
    Floor,

    /// Zoom stopped because the slope at the last trial was essentially zero.
    SlopeTolerance,

    /// Reached the iteration limit; the step is a best-effort estimate.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Strong Wolfe line search.
///
/// Only [`Status::Converged`] guarantees the Strong Wolfe conditions. For any
/// other status, use [`Solution::is_wolfe`] to re-check the step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The step length.
    pub alpha: f64,

    /// Value and slope at `alpha`, if the solver evaluated it.
    ///
    /// This is `None` when the floor is returned and when the bracketing
    /// budget runs out before the last extrapolated trial is evaluated.
    pub point: Option<Point>,

    /// Number of bracketing and zoom iterations.
    pub iters: usize,

    /// Number of function value evaluations, including halving retries.
    pub evals: usize,
}

impl Solution {
    /// Returns true if the step is known to satisfy both Strong Wolfe conditions.
    #[must_use]
    pub fn is_wolfe(&self, config: &Config, origin: &Origin) -> bool {
        self.point.is_some_and(|point| {
            config.sufficient_decrease(origin, &point) && config.curvature(origin, &point)
        })
    }
}
