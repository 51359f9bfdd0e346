//! Core traits for the Wolfe line search workspace.
//!
//! This crate defines the shared abstractions that solvers and observers build
//! on:
//!
//! - [`DifferentiableFunction`] — a scalar function of one variable that can
//!   report both its value and its slope
//! - [`FnPair`] and [`NumericSlope`] — adapters that turn closures into a
//!   [`DifferentiableFunction`]
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{DifferentiableFunction, FnPair, NumericSlope, from_fns};
pub use observer::Observer;
