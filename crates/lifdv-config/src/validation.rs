// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! This module provides validation logic to ensure configuration values are
//! consistent and within the ranges the neuron model can represent.

use crate::{ConfigError, ConfigResult, LifDvConfig};
use lifdv_npu_neural::{Accum, SYNAPSE_TYPE_COUNT};

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
    SynapseTypeCount { expected: usize, actual: usize },
    InvertedWeightBounds { index: usize, min_weight: i32, max_weight: i32 },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
            Self::SynapseTypeCount { expected, actual } => {
                write!(
                    f,
                    "plasticity.synapse_types has {} entries, expected {}",
                    actual, expected
                )
            }
            Self::InvertedWeightBounds {
                index,
                min_weight,
                max_weight,
            } => {
                write!(
                    f,
                    "plasticity.synapse_types[{}]: min_weight {} exceeds max_weight {}",
                    index, min_weight, max_weight
                )
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - Positive timestep, membrane time constant and capacitance
/// - Smoothing coefficient in [0, 1], non-negative refractory period
/// - One weight-bound entry per synapse type, each with min <= max
/// - Known log level
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every violation
pub fn validate_config(config: &LifDvConfig) -> ConfigResult<()> {
    let errors = collect_violations(config);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

/// Every violation in `config`, in section order
pub fn collect_violations(config: &LifDvConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    validate_simulation(config, &mut errors);
    validate_neuron(config, &mut errors);
    validate_plasticity(config, &mut errors);
    validate_logging(config, &mut errors);
    errors
}

fn positive(field: &str, value: f64, errors: &mut Vec<ConfigValidationError>) {
    if !(value > 0.0 && value.is_finite()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be positive, got {}", value),
        });
    }
}

fn representable(field: &str, value: f64, errors: &mut Vec<ConfigValidationError>) {
    if Accum::checked_from_num(value).is_none() {
        errors.push(ConfigValidationError::InvalidValue {
            field: field.to_string(),
            reason: format!("{} is outside the fixed-point range [-65536, 65536)", value),
        });
    }
}

fn validate_simulation(config: &LifDvConfig, errors: &mut Vec<ConfigValidationError>) {
    positive("simulation.timestep_ms", config.simulation.timestep_ms, errors);
}

fn validate_neuron(config: &LifDvConfig, errors: &mut Vec<ConfigValidationError>) {
    let neuron = &config.neuron;
    positive("neuron.tau_m", neuron.tau_m, errors);
    positive("neuron.cm", neuron.cm, errors);

    representable("neuron.v_init", neuron.v_init, errors);
    representable("neuron.v_rest", neuron.v_rest, errors);
    representable("neuron.v_reset", neuron.v_reset, errors);
    representable("neuron.i_offset", neuron.i_offset, errors);
    // Membrane resistance is derived as tau_m / cm
    if neuron.tau_m > 0.0 && neuron.cm > 0.0 {
        representable("neuron.tau_m / neuron.cm", neuron.tau_m / neuron.cm, errors);
    }

    if !(0.0..=1.0).contains(&neuron.gamma) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "neuron.gamma".to_string(),
            reason: "must be between 0.0 and 1.0".to_string(),
        });
    }

    if !(neuron.tau_refrac >= 0.0) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "neuron.tau_refrac".to_string(),
            reason: "must be non-negative".to_string(),
        });
    }
}

fn validate_plasticity(config: &LifDvConfig, errors: &mut Vec<ConfigValidationError>) {
    let synapse_types = &config.plasticity.synapse_types;
    if synapse_types.len() != SYNAPSE_TYPE_COUNT {
        errors.push(ConfigValidationError::SynapseTypeCount {
            expected: SYNAPSE_TYPE_COUNT,
            actual: synapse_types.len(),
        });
    }

    for (index, bounds) in synapse_types.iter().enumerate() {
        if bounds.min_weight > bounds.max_weight {
            errors.push(ConfigValidationError::InvertedWeightBounds {
                index,
                min_weight: bounds.min_weight,
                max_weight: bounds.max_weight,
            });
        }
    }
}

fn validate_logging(config: &LifDvConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.logging.level.to_lowercase();
    if level.is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "logging.level".to_string(),
        });
    } else if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("must be one of {}", LOG_LEVELS.join(", ")),
        });
    }
}
