//! Error types for the boundary checks.
//!
//! The move engine is total over well-formed grids; these errors only surface when
//! data enters from outside (grid construction, environment configuration).

use thiserror::Error;

/// A grid that violates the tile invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("tile at ({row}, {col}) is {value}, expected 0 or a power of two")]
    InvalidTile { row: usize, col: usize, value: u32 },
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}
