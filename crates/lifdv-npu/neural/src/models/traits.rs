// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Neuron Model Traits
//!
//! The uniform interface the host timestep loop drives every neuron through.
//! A model owns one neuron's continuous state and advances it by exactly one
//! timestep per [`NeuronModel::state_update`] call. Threshold comparison is
//! the host's job: it inspects the returned voltage and calls
//! [`NeuronModel::has_spiked`] when the neuron fires.

use crate::types::{Accum, Result};

/// Capability set of a neuron model
pub trait NeuronModel {
    /// Parameters shared by every neuron of this model (may be empty)
    type GlobalParameters;

    /// Human-readable model name
    fn model_name(&self) -> &'static str;

    /// Advance one timestep and return the updated membrane voltage
    ///
    /// # Arguments
    /// * `exc_input` - Excitatory input currents for this timestep
    /// * `inh_input` - Inhibitory input currents for this timestep
    /// * `external_bias` - External bias current
    fn state_update(
        &mut self,
        exc_input: &[Accum],
        inh_input: &[Accum],
        external_bias: Accum,
    ) -> Accum;

    /// Apply the post-spike reset
    fn has_spiked(&mut self);

    /// Current membrane voltage
    fn membrane_voltage(&self) -> Accum;

    /// Install model-wide parameters
    fn set_global_parameters(&mut self, params: &Self::GlobalParameters);

    /// Log the mutable state variables at debug level
    fn print_state_variables(&self);

    /// Log the fixed parameters at debug level
    fn print_parameters(&self);
}

/// Per-neuron parameter set of a model
pub trait ModelParameters {
    /// Check parameter ranges
    fn validate(&self) -> Result<()>;

    /// Number of parameters in the set
    fn parameter_count() -> usize;
}
