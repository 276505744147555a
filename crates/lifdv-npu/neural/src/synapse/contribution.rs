// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! Synaptic input aggregation
//!
//! Pure functions for combining the per-timestep input currents delivered to
//! a neuron by the synaptic-input stage.

use crate::types::Accum;

/// Number of synapse types, fixed at build time
pub const SYNAPSE_TYPE_COUNT: usize = 2;

/// Synapse type (excitatory or inhibitory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SynapseType {
    Excitatory = 0,
    Inhibitory = 1,
}

impl SynapseType {
    /// All synapse types in ascending index order
    pub const ALL: [SynapseType; SYNAPSE_TYPE_COUNT] =
        [SynapseType::Excitatory, SynapseType::Inhibitory];

    /// Index of this type in per-type tables
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SynapseType::Excitatory),
            1 => Some(SynapseType::Inhibitory),
            _ => None,
        }
    }
}

/// Net input current for one timestep
///
/// `input = Σ exc - Σ inh + external_bias + i_offset`, saturating.
///
/// # Example
/// ```
/// use lifdv_npu_neural::{total_input_current, Accum};
///
/// let exc = [Accum::from_int(3), Accum::from_int(2)];
/// let inh = [Accum::from_int(1)];
/// let input = total_input_current(&exc, &inh, Accum::ONE, Accum::ZERO);
/// assert_eq!(input, Accum::from_int(5));
/// ```
#[inline]
pub fn total_input_current(
    exc_input: &[Accum],
    inh_input: &[Accum],
    external_bias: Accum,
    i_offset: Accum,
) -> Accum {
    let total_exc: Accum = exc_input.iter().sum();
    let total_inh: Accum = inh_input.iter().sum();
    total_exc - total_inh + external_bias + i_offset
}
