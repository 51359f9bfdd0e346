//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once against the capabilities it needs.
//!
//! # Event traits
//!
//! - [`HasAlpha`] — events that carry a trial step
//! - [`HasValue`] — events that carry a function value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use wolfe_core::Observer;
//! use wolfe_observers::traits::{CanStopEarly, HasValue};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasValue, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.value() <= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use wolfe_solvers::line_search::strong_wolfe;

/// An event that carries a trial step.
pub trait HasAlpha {
    /// Returns the trial step for this event.
    fn alpha(&self) -> f64;
}

/// An event that carries a function value.
pub trait HasValue {
    /// Returns the function value for this event.
    ///
    /// The value may be infinite when the event reports a rejected trial.
    fn value(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasAlpha for strong_wolfe::Event {
    fn alpha(&self) -> f64 {
        strong_wolfe::Event::alpha(self)
    }
}

impl HasValue for strong_wolfe::Event {
    fn value(&self) -> f64 {
        strong_wolfe::Event::value(self)
    }
}

impl CanStopEarly for strong_wolfe::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
