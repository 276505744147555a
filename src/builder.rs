// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Construction of runtime objects from a loaded [`LifDvConfig`]
//!
//! Weight bounds are serialized into the host word layout and read back
//! through [`WeightDependence::initialise`], so configured tables are held to
//! the same contract as buffers written by host tooling.

use lifdv_config::{ConfigError, LifDvConfig};
use lifdv_npu_neural::{
    Accum, LifDvNeuron, LifDvParameters, NeuralError, PhysicalParameters, SYNAPSE_TYPE_COUNT,
};
use lifdv_npu_plasticity::{WeightDependence, WeightRegion, WeightRegionTable};
use tracing::{debug, info};

/// Errors raised while turning configuration into runtime objects
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Neural parameter error: {0}")]
    Neural(#[from] NeuralError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Expected {expected} synapse type weight bounds, found {actual}")]
    SynapseTypeCount { expected: usize, actual: usize },
}

/// Build a LIF-dV neuron at `v_init` with no pending refractory period
pub fn neuron_from_config(config: &LifDvConfig) -> Result<LifDvNeuron, BuildError> {
    let neuron = &config.neuron;
    let physical = PhysicalParameters {
        v_rest: neuron.v_rest,
        v_reset: neuron.v_reset,
        tau_m: neuron.tau_m,
        cm: neuron.cm,
        i_offset: neuron.i_offset,
        tau_refrac: neuron.tau_refrac,
        gamma: neuron.gamma,
    };

    let params = LifDvParameters::from_physical(&physical, config.simulation.timestep_ms)?;
    debug!(
        "Derived LIF-dV parameters at dt={}ms: exp_tc={}, r_membrane={}, t_refract={}",
        config.simulation.timestep_ms, params.exp_tc, params.r_membrane, params.t_refract
    );

    Ok(LifDvNeuron::with_state(
        params,
        Accum::from_num(neuron.v_init),
        0,
    ))
}

/// Build the per-synapse-type weight bound table
pub fn weight_table_from_config(config: &LifDvConfig) -> Result<WeightRegionTable, BuildError> {
    let bounds = &config.plasticity.synapse_types;
    if bounds.len() != SYNAPSE_TYPE_COUNT {
        return Err(BuildError::SynapseTypeCount {
            expected: SYNAPSE_TYPE_COUNT,
            actual: bounds.len(),
        });
    }

    let mut words = Vec::new();
    for entry in bounds {
        words.extend(WeightRegion::new(entry.min_weight, entry.max_weight, entry.scale).to_words());
    }

    let mut table = WeightRegionTable::new();
    table.initialise(&words, 0, &[])?;
    info!("Weight bounds loaded from configuration for {} synapse types", bounds.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifdv_config::WeightBoundsConfig;
    use lifdv_npu_neural::{NeuronModel, SynapseType};

    #[test]
    fn test_default_config_builds_resting_neuron() {
        let config = LifDvConfig::default();
        let mut neuron = neuron_from_config(&config).unwrap();

        assert_eq!(neuron.membrane_voltage(), Accum::from_num(config.neuron.v_init));
        assert_eq!(neuron.refract_timer(), 0);
        // v_init == v_rest by default, so zero input leaves it in place
        let v = neuron.state_update(&[], &[], Accum::ZERO);
        assert_eq!(v, Accum::from_num(config.neuron.v_rest));
    }

    #[test]
    fn test_invalid_neuron_config_is_rejected() {
        let mut config = LifDvConfig::default();
        config.neuron.tau_m = 0.0;
        assert!(matches!(
            neuron_from_config(&config),
            Err(BuildError::Neural(NeuralError::InvalidParameter { .. }))
        ));
    }

    #[test]
    fn test_weight_table_matches_config() {
        let mut config = LifDvConfig::default();
        config.plasticity.synapse_types = vec![
            WeightBoundsConfig { min_weight: 0, max_weight: 1024, scale: 64 },
            WeightBoundsConfig { min_weight: 0, max_weight: 512, scale: 32 },
        ];

        let table = weight_table_from_config(&config).unwrap();
        assert_eq!(table.region(SynapseType::Excitatory), &WeightRegion::new(0, 1024, 64));
        assert_eq!(table.region(SynapseType::Inhibitory), &WeightRegion::new(0, 512, 32));
    }

    #[test]
    fn test_weight_table_rejects_wrong_type_count() {
        let mut config = LifDvConfig::default();
        config.plasticity.synapse_types.pop();
        assert!(matches!(
            weight_table_from_config(&config),
            Err(BuildError::SynapseTypeCount { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_weight_table_rejects_inverted_bounds() {
        let mut config = LifDvConfig::default();
        config.plasticity.synapse_types[1] = WeightBoundsConfig {
            min_weight: 10,
            max_weight: -10,
            scale: 1,
        };
        assert!(matches!(
            weight_table_from_config(&config),
            Err(BuildError::Neural(NeuralError::InvalidWeightBounds { .. }))
        ));
    }
}
