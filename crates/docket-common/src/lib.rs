//! Docket Common - Shared Types and Utilities
//!
//! Foundational types used across the Docket workspace. Provides the error
//! type, configuration structures, and timestamp helpers shared by the
//! document store and the command line entry point.
//!
//! Key Features:
//! - Unified error type with user error classification
//! - Configuration structures loadable from TOML
//! - RFC 3339 timestamp parsing normalized to UTC
//!
//! @version 0.1.0
//! @author Docket Development Team

pub mod config;
pub mod error;
pub mod utils;

pub use config::{DocketConfig, LoggingConfig, StoreConfig};
pub use error::{DocketError, Result};
