//! Error types for retargeting and importing camera clips.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by a single clip retarget pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RetargetError {
    /// The source clip carries no curves; the host should reimport the model.
    #[error("clip '{clip}' has no curves")]
    EmptyCurveSet { clip: String },
}

/// Errors surfaced by the import driver and its collaborators.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("asset source failed for {}: {message}", path.display())]
    Source { path: PathBuf, message: String },
    #[error("clip store failed for {}: {message}", path.display())]
    Store { path: PathBuf, message: String },
    #[error(transparent)]
    Retarget(#[from] RetargetError),
}

impl ImportError {
    pub fn asset(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        ImportError::Source {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn store(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        ImportError::Store {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
