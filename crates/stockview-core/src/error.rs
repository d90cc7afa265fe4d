// File: crates/stockview-core/src/error.rs
// Summary: Error types for chart construction and rendering.

use thiserror::Error;

/// A required structural input is missing or unusable.
///
/// All of these are detected synchronously, at construction or at the start of
/// a render call, and abort the render in progress.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("no container surface supplied")]
    MissingContainer,
    #[error("no drawing surface supplied")]
    MissingSurface,
    #[error("{0} value not defined")]
    MissingBound(&'static str),
    #[error("{name} value {value} is not usable")]
    InvalidBound { name: &'static str, value: f64 },
    #[error("no datetimes found for X axis")]
    EmptyLabels,
    #[error("value range [{low}, {high}] is empty")]
    InvalidRange { low: f64, high: f64 },
    #[error("option `{name}` has invalid value {value:?}")]
    InvalidOption { name: &'static str, value: String },
    #[error("bar {index} is inconsistent: {reason}")]
    InvalidBar { index: usize, reason: &'static str },
    #[error("bar {index} is not after its predecessor")]
    UnorderedSeries { index: usize },
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("failed to allocate a {width}x{height} drawing surface")]
    Surface { width: u32, height: u32 },
    #[error("malformed render input: {0}")]
    Input(#[from] serde_json::Error),
}

impl ChartError {
    /// The configuration error behind this failure, if that is what it was.
    pub fn configuration(&self) -> Option<&ConfigurationError> {
        match self {
            ChartError::Configuration(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
