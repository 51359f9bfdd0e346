//! Line search solvers for the Wolfe workspace.
//!
//! - [`interpolate`] — closed-form minimizers of quadratic and cubic fits
//! - [`line_search`] — step-length searches built on those fits

pub mod interpolate;
pub mod line_search;
