//! Docket Config - Configuration Structures
//!
//! Configuration types for the Docket document store and its command line
//! entry point. Supports loading from TOML files and programmatic
//! construction, with defaults for every field.
//!
//! Key Features:
//! - Store configuration (collection name, pre-sized capacity)
//! - Logging configuration (default level, ANSI output)
//!
//! @version 0.1.0
//! @author Docket Development Team

use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// =============================================================================
// Store Configuration
// =============================================================================

/// Configuration for a document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub name: String,
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "documents".to_string(),
            initial_capacity: 64,
        }
    }
}

// =============================================================================
// Logging Configuration
// =============================================================================

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

// =============================================================================
// Top-level Configuration
// =============================================================================

/// Top-level Docket configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DocketConfig {
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

impl DocketConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> crate::Result<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(crate::DocketError::Configuration(format!(
                "unknown log level '{}', expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if self.store.name.trim().is_empty() {
            return Err(crate::DocketError::Configuration(
                "store name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
