//! Error types shared by blocks, recorder and driver

use thiserror::Error;

/// Simulation errors
///
/// Nothing is retried: every error aborts the current run and propagates
/// to the caller of [`System::run`](crate::system::System::run).
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Block '{block}': {reason}")]
    Domain { block: String, reason: String },

    #[error("Duplicate block name '{0}'")]
    DuplicateName(String),

    #[error("Cyclic signal graph through block '{0}'")]
    CyclicGraph(String),

    #[error("Invalid time grid: end time {end_time}, step {step}")]
    InvalidTimeStep { end_time: f64, step: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    pub(crate) fn domain(block: &str, reason: impl Into<String>) -> Self {
        SimError::Domain {
            block: block.to_string(),
            reason: reason.into(),
        }
    }

    /// True for parameter errors that make the block math undefined
    pub fn is_domain(&self) -> bool {
        matches!(self, SimError::Domain { .. } | SimError::InvalidTimeStep { .. })
    }

    /// True for wiring errors (duplicate names, cycles)
    pub fn is_configuration(&self) -> bool {
        matches!(self, SimError::DuplicateName(_) | SimError::CyclicGraph(_))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SimError>;
