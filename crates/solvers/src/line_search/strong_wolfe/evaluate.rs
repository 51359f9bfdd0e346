use wolfe_core::DifferentiableFunction;

use super::{Error, Point, Solution, Status};

/// Evaluates the function on behalf of the solver and keeps the counters.
///
/// NaN values and slopes are turned into errors here so the search logic
/// never compares against them.
pub(super) struct Probe<'f, F> {
    function: &'f F,
    iters: usize,
    evals: usize,
}

impl<'f, F: DifferentiableFunction> Probe<'f, F> {
    pub(super) fn new(function: &'f F) -> Self {
        Self {
            function,
            iters: 0,
            evals: 0,
        }
    }

    /// Counts one bracketing or zoom iteration.
    pub(super) fn tick(&mut self) {
        self.iters += 1;
    }

    pub(super) fn value(&mut self, alpha: f64) -> Result<f64, Error> {
        self.evals += 1;
        let value = self.function.value(alpha);
        if value.is_nan() {
            return Err(Error::NanValue { alpha });
        }
        Ok(value)
    }

    pub(super) fn slope(&self, alpha: f64) -> Result<f64, Error> {
        let slope = self.function.slope(alpha);
        if slope.is_nan() {
            return Err(Error::NanSlope { alpha });
        }
        Ok(slope)
    }

    pub(super) fn point(&mut self, alpha: f64) -> Result<Point, Error> {
        let value = self.value(alpha)?;
        let slope = self.slope(alpha)?;
        Ok(Point::new(alpha, value, slope))
    }

    pub(super) fn finish(&self, status: Status, alpha: f64, point: Option<Point>) -> Solution {
        Solution {
            status,
            alpha,
            point,
            iters: self.iters,
            evals: self.evals,
        }
    }

    pub(super) fn finish_at(&self, status: Status, point: Point) -> Solution {
        self.finish(status, point.alpha, Some(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use wolfe_core::from_fns;

    #[test]
    fn counts_value_evaluations() {
        let f = from_fns(|a: f64| a * a, |a: f64| 2.0 * a);
        let mut probe = Probe::new(&f);

        probe.tick();
        let point = probe.point(3.0).unwrap();
        let _ = probe.value(1.0).unwrap();

        assert_eq!(point, Point::new(3.0, 9.0, 6.0));

        let solution = probe.finish_at(Status::Converged, point);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.evals, 2);
    }

    #[test]
    fn nan_value_is_an_error() {
        let f = from_fns(|a: f64| a.ln(), |a: f64| a.recip());
        let mut probe = Probe::new(&f);

        assert_eq!(probe.value(-1.0), Err(Error::NanValue { alpha: -1.0 }));
    }

    #[test]
    fn nan_slope_is_an_error() {
        let f = from_fns(|a: f64| a, |_: f64| f64::NAN);
        let mut probe = Probe::new(&f);

        assert_eq!(probe.point(0.5), Err(Error::NanSlope { alpha: 0.5 }));
    }

    #[test]
    fn infinite_values_pass_through() {
        let f = from_fns(|_: f64| f64::INFINITY, |_: f64| 0.0);
        let mut probe = Probe::new(&f);

        assert_eq!(probe.value(1.0), Ok(f64::INFINITY));
    }
}
