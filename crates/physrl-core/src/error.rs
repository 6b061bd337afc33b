//! Error types for PhysRL core

use thiserror::Error;

/// Main error type for PhysRL core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for PhysRL core operations
pub type Result<T> = std::result::Result<T, CoreError>;
