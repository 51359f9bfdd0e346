//! Solvers for one-dimensional step-length problems.
//!
//! A line search looks along a descent ray for a step `alpha > 0` that makes
//! acceptable progress on a [`DifferentiableFunction`]. The caller supplies the
//! value and slope at `alpha = 0`; the solver never evaluates the origin itself.
//!
//! # Solvers
//!
//! - [`strong_wolfe`] — bracketing and zoom search for a step satisfying the
//!   Strong Wolfe conditions
//!
//! [`DifferentiableFunction`]: wolfe_core::DifferentiableFunction

pub mod strong_wolfe;
