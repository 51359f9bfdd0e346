//! Observer that forwards solver events to the `log` facade.

use std::fmt::Display;

use log::Level;
use wolfe_core::Observer;

/// An observer that logs every event it receives.
///
/// Events are formatted with their [`Display`] impl and emitted at the
/// configured level under the configured target. Nothing is formatted when
/// the level is disabled.
///
/// # Example
///
/// ```
/// use log::Level;
/// use wolfe_core::from_fns;
/// use wolfe_observers::LogObserver;
/// use wolfe_solvers::line_search::strong_wolfe::{self, Config, Origin};
///
/// let f = from_fns(|a: f64| (a - 3.0).powi(2), |a: f64| 2.0 * (a - 3.0));
/// let origin = Origin::of(&f).expect("descent direction");
///
/// let observer = LogObserver::new(Level::Info).with_target("my_app::line_search");
/// strong_wolfe::search(&f, origin, &Config::default(), observer).expect("no NaN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
    target: &'static str,
}

impl LogObserver {
    /// Creates an observer that logs at `level` under the `wolfe` target.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            target: "wolfe",
        }
    }

    /// Sets the log target.
    #[must_use]
    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<E: Display, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        log::log!(target: self.target, self.level, "{event}");
        None
    }
}
