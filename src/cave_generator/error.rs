use thiserror::Error;

/// Errors reported by [`CaveGenerator`](crate::CaveGenerator).
///
/// Every failure is returned synchronously from `generate`; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// A parameter lies outside its documented domain. Raised before carving starts.
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Carving and smoothing produced no floor, so there is nowhere to spawn.
    #[error("no floor tiles left to choose a spawn point from")]
    EmptyFloorSet,

    /// A write landed outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    CellOutOfBounds {
        /// Column of the rejected write.
        x: usize,
        /// Row of the rejected write.
        y: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
}

impl GenerationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { field, reason: reason.into() }
    }
}

/// Errors raised while loading [`CaveGeneratorParameters`](crate::params::CaveGeneratorParameters) from JSON.
#[derive(Error, Debug)]
pub enum ParamsLoadError {
    /// The config file could not be read.
    #[error("could not read parameters: {0}")]
    Io(#[from] std::io::Error),

    /// The config is not valid JSON for the parameters struct.
    #[error("could not parse parameters: {0}")]
    Json(#[from] serde_json::Error),

    /// The config parsed but failed validation.
    #[error(transparent)]
    Invalid(#[from] GenerationError),
}
