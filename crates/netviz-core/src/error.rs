//! Error taxonomy for the report pipeline.
//!
//! Three failure classes cover everything the pipeline can hit: bad or
//! incomplete input data, a centrality computation that fails to converge,
//! and an unwritable output path. There is no retry or partial-output mode —
//! any error aborts the run and surfaces to the caller.

use std::path::PathBuf;

/// Errors produced by the netviz pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file is missing or its header lacks a required column.
    #[error("input data error: {reason}")]
    Data {
        /// Human-readable description of what was wrong with the input.
        reason: String,
    },

    /// Eigenvector centrality failed to converge within the iteration cap.
    #[error("eigenvector centrality did not converge within {iterations} iterations")]
    Convergence {
        /// Number of iterations performed before giving up.
        iterations: usize,
    },

    /// Failed to serialize the visualization payload to JSON.
    #[error("failed to serialize visualization payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output path could not be created or written.
    #[error("failed to write report to {path}")]
    Io {
        /// The path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Build a [`Error::Data`] from anything displayable.
    pub fn data(reason: impl Into<String>) -> Self {
        Self::Data {
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
