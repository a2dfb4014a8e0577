/*!
 * Error Types
 * Driver-facing error handling with thiserror and miette
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export MemoryError from memory module
pub use crate::memory::MemoryError;

/// Benchmark operation result
pub type BenchResult<T> = Result<T, BenchError>;

/// Errors surfaced to the operator by the benchmark driver
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum BenchError {
    #[error(
        "Internal error, different checksum or number of nodes created: \
         {left} built {left_nodes} nodes (checksum {left_checksum}), \
         {right} built {right_nodes} nodes (checksum {right_checksum})"
    )]
    #[diagnostic(
        code(bench::mismatch),
        help("One of the tree implementations is wrong. No report is produced.")
    )]
    Mismatch {
        left: String,
        left_nodes: u64,
        left_checksum: u64,
        right: String,
        right_nodes: u64,
        right_checksum: u64,
    },

    #[error("Invalid value {value:?} for {key}: {reason}")]
    #[diagnostic(
        code(bench::invalid_config),
        help("Unset the variable to use the compiled-in default.")
    )]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },
}

impl BenchError {
    pub fn invalid_config(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BenchError::InvalidConfig {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
