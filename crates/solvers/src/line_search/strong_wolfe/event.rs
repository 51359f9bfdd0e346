use std::fmt;

use wolfe_core::Observer;

use super::{Action, Point, TrialKind};

/// Events emitted by the Strong Wolfe line search.
///
/// `iter` counts iterations within the phase that emitted the event, starting
/// at 1. Halving retries advance the bracketing count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A bracketing trial was evaluated.
    Bracketing {
        /// Bracketing iteration.
        iter: usize,

        /// The evaluated trial.
        point: Point,

        /// The previous accepted trial, or the origin on the first iteration.
        previous: Point,
    },

    /// A bracketing trial had an infinite value and will be halved.
    Halved {
        /// Bracketing iteration.
        iter: usize,

        /// The step that produced the infinite value.
        alpha: f64,

        /// The infinite value.
        value: f64,
    },

    /// A zoom trial was evaluated.
    Zoom {
        /// Zoom iteration.
        iter: usize,

        /// The rule that produced the trial step.
        trial: TrialKind,

        /// The evaluated trial.
        point: Point,

        /// The low endpoint before this trial was applied.
        lo: Point,

        /// The high endpoint before this trial was applied.
        hi: Point,
    },
}

impl Event {
    /// Returns the iteration count within the emitting phase.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Bracketing { iter, .. } | Self::Halved { iter, .. } | Self::Zoom { iter, .. } => {
                *iter
            }
        }
    }

    /// Returns the step that was evaluated.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        match self {
            Self::Bracketing { point, .. } | Self::Zoom { point, .. } => point.alpha,
            Self::Halved { alpha, .. } => *alpha,
        }
    }

    /// Returns the function value at the evaluated step.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Bracketing { point, .. } | Self::Zoom { point, .. } => point.value,
            Self::Halved { value, .. } => *value,
        }
    }

    /// Returns the evaluated point, if a slope was computed.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        match self {
            Self::Bracketing { point, .. } | Self::Zoom { point, .. } => Some(*point),
            Self::Halved { .. } => None,
        }
    }

    /// Emits the event and reports whether the observer asked to stop.
    pub(super) fn stops<Obs>(self, observer: &mut Obs) -> bool
    where
        Obs: Observer<Event, Action>,
    {
        matches!(observer.observe(&self), Some(Action::StopEarly))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bracketing { iter, point, .. } => write!(
                f,
                "bracketing {iter}: alpha = {}, f = {}, df = {}",
                point.alpha, point.value, point.slope
            ),
            Self::Halved { iter, alpha, value } => {
                write!(f, "bracketing {iter}: f({alpha}) = {value}, halving")
            }
            Self::Zoom {
                iter,
                trial,
                point,
                lo,
                hi,
            } => write!(
                f,
                "zoom {iter}: {trial:?} alpha = {} in [{}, {}], f = {}, df = {}",
                point.alpha, lo.alpha, hi.alpha, point.value, point.slope
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_read_the_evaluated_point() {
        let point = Point::new(0.5, 0.25, -1.0);
        let origin = Point::new(0.0, 1.0, -2.0);

        let event = Event::Bracketing {
            iter: 2,
            point,
            previous: origin,
        };
        assert_eq!(event.iter(), 2);
        assert_eq!(event.alpha(), 0.5);
        assert_eq!(event.value(), 0.25);
        assert_eq!(event.point(), Some(point));

        let event = Event::Halved {
            iter: 1,
            alpha: 4.0,
            value: f64::INFINITY,
        };
        assert_eq!(event.alpha(), 4.0);
        assert_eq!(event.point(), None);
    }

    #[test]
    fn display_names_the_phase() {
        let point = Point::new(0.5, 0.25, -1.0);
        let event = Event::Zoom {
            iter: 3,
            trial: TrialKind::Secant,
            point,
            lo: Point::new(0.0, 1.0, -2.0),
            hi: Point::new(2.0, 1.0, 2.0),
        };

        let text = event.to_string();
        assert!(text.starts_with("zoom 3: Secant alpha = 0.5 in [0, 2]"));
    }

    #[test]
    fn stops_only_on_stop_early() {
        let event = Event::Halved {
            iter: 1,
            alpha: 1.0,
            value: f64::INFINITY,
        };

        assert!(!event.stops(&mut ()));
        assert!(event.stops(&mut |_: &Event| Some(Action::StopEarly)));
    }
}
