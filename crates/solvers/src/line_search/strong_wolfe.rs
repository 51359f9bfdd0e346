//! Strong Wolfe line search for one-dimensional step-length selection.
//!
//! # Algorithm
//!
//! The search looks for a step `alpha` in `(0, alpha_max]` satisfying both
//! Strong Wolfe conditions for a function with value `f0` and slope
//! `slope0 < 0` at the origin:
//!
//! - sufficient decrease: `f(alpha) <= f0 + c1 * alpha * slope0`
//! - curvature: `|f'(alpha)| <= -c2 * slope0`
//!
//! It runs in two phases. **Bracketing** starts at `alpha0` and grows the step
//! by up to [`DELTA_MAX`] times the last increment until the step is accepted
//! or an interval known to contain an acceptable step is found. **Zoom** then
//! shrinks that interval with safeguarded cubic, quadratic and secant
//! interpolation, falling back to bisection when the interval stops
//! shrinking.
//!
//! # Budgets and fallbacks
//!
//! Each phase is limited to [`MAX_UPDATE_ITERATIONS`] iterations. Running out
//! is not an error: the last trial step is returned with
//! [`Status::MaxIters`]. Only [`Status::Converged`] guarantees the Strong
//! Wolfe conditions; use [`Solution::is_wolfe`] to re-check other results.
//!
//! Zoom never returns a step below [`ALPHA_MIN`]. A trial that falls below it
//! ends the search with [`Status::Floor`] and `alpha == ALPHA_MIN`.
//!
//! An infinite function value during bracketing halves the trial step. If the
//! budget runs out while the value is still infinite, the last halved step is
//! returned with [`Status::MaxIters`]. A NaN value or slope anywhere ends the
//! search with an error.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation:
//!
//! - [`Event::Halved`] — a bracketing trial had an infinite value
//! - [`Event::Bracketing`] — a bracketing trial was evaluated
//! - [`Event::Zoom`] — a zoom trial was evaluated, with the rule that chose it
//!
//! Observers can return [`Action::StopEarly`] to halt immediately with the
//! point just evaluated.
//!
//! # Example
//!
//! ```
//! use wolfe_core::from_fns;
//! use wolfe_solvers::line_search::strong_wolfe::{self, Config, Origin, Status};
//!
//! let f = from_fns(|a: f64| (a - 3.0).powi(2), |a: f64| 2.0 * (a - 3.0));
//! let origin = Origin::of(&f).expect("descent direction");
//! let config = Config::default();
//!
//! let solution = strong_wolfe::search_unobserved(&f, origin, &config).expect("no NaN");
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!(solution.is_wolfe(&config, &origin));
//! ```

mod action;
mod bracket;
mod config;
mod error;
mod evaluate;
mod event;
mod origin;
mod point;
mod search;
mod solution;
mod trial;
mod zoom;


pub use action::Action;
pub use config::{Config, ConfigBuilder, ConfigError};
pub use error::Error;
pub use event::Event;
pub use origin::{Origin, OriginError};
pub use point::Point;
pub use solution::{Solution, Status};
pub use trial::TrialKind;

use wolfe_core::{DifferentiableFunction, Observer};

/// Iteration budget for each of the bracketing and zoom phases.
pub const MAX_UPDATE_ITERATIONS: usize = 40;

/// Largest factor by which bracketing grows the last step increment.
pub const DELTA_MAX: f64 = 4.0;

/// Smallest step zoom will return.
pub const ALPHA_MIN: f64 = 5e-3;

/// Slope magnitude at which zoom stops refining.
pub const SLOPE_TOL: f64 = 1e-8;

/// Finds a step satisfying the Strong Wolfe conditions.
///
/// The observer receives an [`Event`] for each evaluation.
/// See the [module docs](self) for details on budgets and fallbacks.
///
/// # Errors
///
/// Returns an error if the function produces a NaN value or slope.
pub fn search<F, Obs>(
    function: &F,
    origin: Origin,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: DifferentiableFunction,
    Obs: Observer<Event, Action>,
{
    search::search(function, &origin, config, observer)
}

/// Finds a step satisfying the Strong Wolfe conditions without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`search`].
pub fn search_unobserved<F>(function: &F, origin: Origin, config: &Config) -> Result<Solution, Error>
where
    F: DifferentiableFunction,
{
    search(function, origin, config, ())
}
