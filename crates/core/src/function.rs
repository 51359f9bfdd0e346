/// A scalar function of one real variable with a known slope.
///
/// Line searches evaluate the function along a ray, so the single variable is
/// usually a step length `alpha`. Implementations are expected to be
/// deterministic and free of side effects: a solver may evaluate the same
/// `alpha` more than once and relies on getting the same answer.
pub trait DifferentiableFunction {
    /// Returns the function value at `alpha`.
    fn value(&self, alpha: f64) -> f64;

    /// Returns the derivative of the function at `alpha`.
    fn slope(&self, alpha: f64) -> f64;
}

impl<T> DifferentiableFunction for &T
where
    T: DifferentiableFunction + ?Sized,
{
    fn value(&self, alpha: f64) -> f64 {
        (**self).value(alpha)
    }

    fn slope(&self, alpha: f64) -> f64 {
        (**self).slope(alpha)
    }
}

/// A [`DifferentiableFunction`] built from a value closure and a slope closure.
///
/// Construct with [`from_fns`].
#[derive(Debug, Clone, Copy)]
pub struct FnPair<V, S> {
    value: V,
    slope: S,
}

/// Combines a value closure and a slope closure into a [`DifferentiableFunction`].
///
/// # Example
///
/// ```
/// use wolfe_core::{DifferentiableFunction, from_fns};
///
/// let f = from_fns(|a: f64| (a - 1.0).powi(2), |a: f64| 2.0 * (a - 1.0));
///
/// assert_eq!(f.value(3.0), 4.0);
/// assert_eq!(f.slope(3.0), 4.0);
/// ```
pub fn from_fns<V, S>(value: V, slope: S) -> FnPair<V, S>
where
    V: Fn(f64) -> f64,
    S: Fn(f64) -> f64,
{
    FnPair { value, slope }
}

impl<V, S> DifferentiableFunction for FnPair<V, S>
where
    V: Fn(f64) -> f64,
    S: Fn(f64) -> f64,
{
    fn value(&self, alpha: f64) -> f64 {
        (self.value)(alpha)
    }

    fn slope(&self, alpha: f64) -> f64 {
        (self.slope)(alpha)
    }
}

/// A [`DifferentiableFunction`] whose slope is estimated by central differences.
///
/// Useful when only the function value is available. The step is scaled by
/// the magnitude of `alpha` so the estimate stays well conditioned away from
/// the origin.
#[derive(Debug, Clone, Copy)]
pub struct NumericSlope<V> {
    value: V,
}

impl<V> NumericSlope<V>
where
    V: Fn(f64) -> f64,
{
    /// Wraps a value closure.
    pub fn new(value: V) -> Self {
        Self { value }
    }

    fn step(alpha: f64) -> f64 {
        f64::EPSILON.cbrt() * alpha.abs().max(1.0)
    }
}

impl<V> DifferentiableFunction for NumericSlope<V>
where
    V: Fn(f64) -> f64,
{
    fn value(&self, alpha: f64) -> f64 {
        (self.value)(alpha)
    }

    fn slope(&self, alpha: f64) -> f64 {
        let h = Self::step(alpha);
        ((self.value)(alpha + h) - (self.value)(alpha - h)) / (2.0 * h)
    }
}
