//! Recording observer for inspecting a line search after it finishes.

use wolfe_core::Observer;
use wolfe_solvers::line_search::strong_wolfe::Event;

/// The line-search phase that emitted a recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A bracketing trial was evaluated.
    Bracketing,

    /// A bracketing trial had an infinite value and was halved.
    Halved,

    /// A zoom trial was evaluated.
    Zoom,
}

/// A single recorded event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub phase: Phase,
    pub iter: usize,
    pub alpha: f64,
    pub value: f64,

    /// The slope at `alpha`, or `None` for a halved trial.
    pub slope: Option<f64>,
}

impl From<&Event> for Record {
    fn from(event: &Event) -> Self {
        let phase = match event {
            Event::Bracketing { .. } => Phase::Bracketing,
            Event::Halved { .. } => Phase::Halved,
            Event::Zoom { .. } => Phase::Zoom,
        };

        Self {
            phase,
            iter: event.iter(),
            alpha: event.alpha(),
            value: event.value(),
            slope: event.point().map(|point| point.slope),
        }
    }
}

/// An observer that records every line-search event.
///
/// Pass `&mut History` as the observer so the records stay available once
/// the search returns.
///
/// # Example
///
/// ```
/// use wolfe_core::from_fns;
/// use wolfe_observers::{History, Phase};
/// use wolfe_solvers::line_search::strong_wolfe::{self, Config, Origin};
///
/// let f = from_fns(|a: f64| (a - 3.0).powi(2), |a: f64| 2.0 * (a - 3.0));
/// let origin = Origin::of(&f).expect("descent direction");
///
/// let mut history = History::new();
/// strong_wolfe::search(&f, origin, &Config::default(), &mut history).expect("no NaN");
///
/// assert_eq!(history.records()[0].phase, Phase::Bracketing);
/// assert_eq!(history.records()[0].alpha, 1.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record for `event`.
    pub fn record(&mut self, event: &Event) {
        self.records.push(Record::from(event));
    }

    /// Returns the recorded events in the order they were emitted.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the trial steps in the order they were tried.
    pub fn alphas(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.alpha)
    }

    /// Returns the number of events recorded for `phase`.
    #[must_use]
    pub fn count(&self, phase: Phase) -> usize {
        self.records
            .iter()
            .filter(|record| record.phase == phase)
            .count()
    }

    /// Consumes the history and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<A> Observer<Event, A> for History {
    fn observe(&mut self, event: &Event) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the records can be read after the search completes.
impl<A> Observer<Event, A> for &mut History {
    fn observe(&mut self, event: &Event) -> Option<A> {
        (*self).observe(event)
    }
}
