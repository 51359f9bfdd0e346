use thiserror::Error;

use wolfe_core::DifferentiableFunction;

/// The function value and slope at `alpha = 0`.
///
/// A line search only makes sense along a descent direction, so an origin
/// with a non-negative slope is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    value: f64,
    slope: f64,
}

/// Errors that can occur when validating a line search origin.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum OriginError {
    #[error("value at the origin must be finite, got {0}")]
    Value(f64),

    #[error("slope at the origin must be finite and negative, got {0}")]
    Slope(f64),
}

impl Origin {
    /// Creates an origin from a known value and slope.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not finite, or if `slope` is not finite
    /// and strictly negative.
    pub fn new(value: f64, slope: f64) -> Result<Self, OriginError> {
        if !value.is_finite() {
            return Err(OriginError::Value(value));
        }
        if !slope.is_finite() || slope >= 0.0 {
            return Err(OriginError::Slope(slope));
        }

        Ok(Self { value, slope })
    }

    /// Evaluates `function` at zero and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Origin::new`].
    pub fn of<F: DifferentiableFunction>(function: &F) -> Result<Self, OriginError> {
        Self::new(function.value(0.0), function.slope(0.0))
    }

    /// Returns the function value at the origin.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the function slope at the origin.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }
}
