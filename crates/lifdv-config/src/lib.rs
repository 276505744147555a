// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # LIF-dV Configuration System
//!
//! Type-safe configuration loader with support for:
//! - TOML file parsing
//! - Environment variable overrides
//! - CLI argument overrides
//! - Validation of every value the neuron builder consumes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lifdv_config::{load_config, LifDvConfig};
//!
//! // Load configuration with automatic file discovery and overrides
//! let config = load_config(None, None).expect("Failed to load config");
//!
//! println!("Timestep: {} ms", config.simulation.timestep_ms);
//! println!("tau_m: {} ms", config.neuron.tau_m);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "std")]
pub mod loader;

pub mod types;
pub mod validation;

#[cfg(feature = "std")]
pub use loader::{
    apply_cli_overrides, apply_environment_overrides, find_config_file, load_config,
    CONFIG_FILE_NAME,
};

pub use types::*;
pub use validation::{collect_violations, validate_config, ConfigValidationError, LOG_LEVELS};

/// Re-export for convenience
pub use serde;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[cfg(feature = "std")]
impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
