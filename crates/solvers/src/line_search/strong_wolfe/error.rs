use thiserror::Error;

use super::{config::ConfigError, origin::OriginError};

/// Errors that can occur during a Strong Wolfe line search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid origin: {0}")]
    InvalidOrigin(#[from] OriginError),

    #[error("function value is NaN at alpha = {alpha}")]
    NanValue { alpha: f64 },

    #[error("function slope is NaN at alpha = {alpha}")]
    NanSlope { alpha: f64 },
}
