// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `lifdv_configuration.toml`. Every section falls back to its defaults, so a
//! file only needs to name what it changes.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LifDvConfig {
    pub simulation: SimulationConfig,
    pub neuron: NeuronConfig,
    pub plasticity: PlasticityConfig,
    pub logging: LoggingConfig,
}

/// Timestep settings shared by every neuron
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulation timestep (ms)
    pub timestep_ms: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { timestep_ms: 1.0 }
    }
}

/// LIF-dV neuron parameters in physical units
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NeuronConfig {
    /// Initial membrane voltage (mV)
    pub v_init: f64,
    /// Resting potential (mV)
    pub v_rest: f64,
    /// Post-spike reset potential (mV)
    pub v_reset: f64,
    /// Membrane time constant (ms)
    pub tau_m: f64,
    /// Membrane capacitance (nF)
    pub cm: f64,
    /// Bias current (nA)
    pub i_offset: f64,
    /// Refractory period (ms)
    pub tau_refrac: f64,
    /// dV/dt smoothing coefficient (0-1)
    pub gamma: f64,
}

impl Default for NeuronConfig {
    fn default() -> Self {
        Self {
            v_init: -65.0,
            v_rest: -65.0,
            v_reset: -70.0,
            tau_m: 20.0,
            cm: 1.0,
            i_offset: 0.0,
            tau_refrac: 2.0,
            gamma: 0.9,
        }
    }
}

/// Weight-dependence bounds, one entry per synapse type in index order
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlasticityConfig {
    pub synapse_types: Vec<WeightBoundsConfig>,
}

impl Default for PlasticityConfig {
    fn default() -> Self {
        Self {
            synapse_types: vec![
                WeightBoundsConfig::default(), // excitatory
                WeightBoundsConfig::default(), // inhibitory
            ],
        }
    }
}

/// Bounds for one synapse type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeightBoundsConfig {
    pub min_weight: i32,
    pub max_weight: i32,
    pub scale: i32,
}

impl Default for WeightBoundsConfig {
    fn default() -> Self {
        Self {
            min_weight: 0,
            max_weight: 32767,
            scale: 1024,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    pub level: String,
    /// Directory for run log files; console only when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}
