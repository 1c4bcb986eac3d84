//! Docket Error - Unified Error Types
//!
//! Error handling for the edges of the Docket workspace. Store operations
//! themselves never fail; errors only arise while loading configuration,
//! reading document fixtures, or parsing timestamps supplied by a caller.
//!
//! @version 0.1.0
//! @author Docket Development Team

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Unified error type for Docket operations.
#[derive(Error, Debug)]
pub enum DocketError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

// =============================================================================
// Type Aliases
// =============================================================================

/// Result type alias for Docket operations.
pub type Result<T> = std::result::Result<T, DocketError>;

// =============================================================================
// Error Classification
// =============================================================================

impl DocketError {
    /// Returns true if the error was caused by caller input (vs the environment).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DocketError::Configuration(_)
                | DocketError::Serialization(_)
                | DocketError::InvalidTimestamp(_)
        )
    }
}

impl From<serde_json::Error> for DocketError {
    fn from(err: serde_json::Error) -> Self {
        DocketError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DocketError {
    fn from(err: toml::de::Error) -> Self {
        DocketError::Configuration(err.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
