/// A step length with its evaluated value and slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The step length.
    pub alpha: f64,

    /// The function value at `alpha`.
    pub value: f64,

    /// The function slope at `alpha`.
    pub slope: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(alpha: f64, value: f64, slope: f64) -> Self {
        Self {
            alpha,
            value,
            slope,
        }
    }
}
