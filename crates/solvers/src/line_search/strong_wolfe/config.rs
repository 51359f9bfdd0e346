use thiserror::Error;

use super::{ALPHA_MIN, Origin, Point};

/// Configuration for the Strong Wolfe line search.
///
/// A config is validated when it is built and cannot be changed afterwards.
/// Use [`Config::new`] to set every tunable at once, or [`Config::builder`] to
/// override only some of the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    c1: f64,
    c2: f64,
    alpha_max: f64,
    alpha0: f64,
}

/// Errors that can occur when validating a Strong Wolfe config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("c1 must lie strictly between 0 and 1")]
    C1,

    #[error("c2 must lie strictly between c1 and 1")]
    C2,

    #[error("alpha_max must be finite and at least the minimum step")]
    AlphaMax,

    #[error("alpha0 must be positive and no larger than alpha_max")]
    Alpha0,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            c1: 1e-3,
            c2: 0.5,
            alpha_max: 1000.0,
            alpha0: 1.0,
        }
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `c1` is outside `(0, 1)`, `c2` is outside `(c1, 1)`,
    /// `alpha_max` is non-finite or below [`ALPHA_MIN`], or `alpha0` is not in
    /// `(0, alpha_max]`.
    pub fn new(c1: f64, c2: f64, alpha_max: f64, alpha0: f64) -> Result<Self, ConfigError> {
        if !(c1 > 0.0 && c1 < 1.0) {
            return Err(ConfigError::C1);
        }
        if !(c2 > c1 && c2 < 1.0) {
            return Err(ConfigError::C2);
        }
        if !alpha_max.is_finite() || alpha_max < ALPHA_MIN {
            return Err(ConfigError::AlphaMax);
        }
        if !(alpha0 > 0.0 && alpha0 <= alpha_max) {
            return Err(ConfigError::Alpha0);
        }

        Ok(Self {
            c1,
            c2,
            alpha_max,
            alpha0,
        })
    }

    /// Returns a builder that starts from the default parameters.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder {
            config: Self::default(),
        }
    }

    /// Returns the sufficient decrease constant.
    #[must_use]
    pub fn c1(&self) -> f64 {
        self.c1
    }

    /// Returns the curvature constant.
    #[must_use]
    pub fn c2(&self) -> f64 {
        self.c2
    }

    /// Returns the largest step the search will try.
    #[must_use]
    pub fn alpha_max(&self) -> f64 {
        self.alpha_max
    }

    /// Returns the first step the search tries.
    #[must_use]
    pub fn alpha0(&self) -> f64 {
        self.alpha0
    }

    /// Checks the sufficient decrease (Armijo) condition at `point`.
    ///
    /// Holds when `value <= f0 + c1 * alpha * slope0`.
    #[must_use]
    pub fn sufficient_decrease(&self, origin: &Origin, point: &Point) -> bool {
        point.value <= origin.value() + self.c1 * point.alpha * origin.slope()
    }

    /// Checks the strong curvature condition at `point`.
    ///
    /// Holds when `|slope| <= -c2 * slope0`.
    #[must_use]
    pub fn curvature(&self, origin: &Origin, point: &Point) -> bool {
        point.slope.abs() <= -self.c2 * origin.slope()
    }
}

/// Builder for [`Config`].
///
/// Unset parameters keep their defaults: `c1 = 1e-3`, `c2 = 0.5`,
/// `alpha_max = 1000`, `alpha0 = 1`.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Sets the sufficient decrease constant.
    #[must_use]
    pub fn c1(mut self, c1: f64) -> Self {
        self.config.c1 = c1;
        self
    }

    /// Sets the curvature constant.
    #[must_use]
    pub fn c2(mut self, c2: f64) -> Self {
        self.config.c2 = c2;
        self
    }

    /// Sets the largest step the search will try.
    #[must_use]
    pub fn alpha_max(mut self, alpha_max: f64) -> Self {
        self.config.alpha_max = alpha_max;
        self
    }

    /// Sets the first step the search tries.
    #[must_use]
    pub fn alpha0(mut self, alpha0: f64) -> Self {
        self.config.alpha0 = alpha0;
        self
    }

    /// Validates the parameters and builds the config.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Config::new`].
    pub fn build(self) -> Result<Config, ConfigError> {
        let Config {
            c1,
            c2,
            alpha_max,
            alpha0,
        } = self.config;
        Config::new(c1, c2, alpha_max, alpha0)
    }
}
