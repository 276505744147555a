// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Weight Dependence
//!
//! A weight dependence bounds the weight changes a plasticity rule may apply.
//! Its parameters arrive as a region of the synapse parameter buffer, and each
//! implementation knows how many words of that region it owns.

pub mod weight_dv;

use lifdv_npu_neural::{Result, SynapseType};

pub use weight_dv::{WeightRegionTable, WEIGHT_DV_REGION_WORDS};

/// Words per synapse type in a weight-bound record
pub const WEIGHT_REGION_WORDS: usize = 3;

/// Weight bounds for one synapse type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightRegion {
    pub min_weight: i32,
    pub max_weight: i32,
    pub scale: i32,
}

impl WeightRegion {
    pub fn new(min_weight: i32, max_weight: i32, scale: i32) -> Self {
        Self {
            min_weight,
            max_weight,
            scale,
        }
    }

    /// Record words in region order: min, max, scale
    pub fn to_words(&self) -> [i32; WEIGHT_REGION_WORDS] {
        [self.min_weight, self.max_weight, self.scale]
    }

    /// `min_weight <= max_weight`
    pub fn is_ordered(&self) -> bool {
        self.min_weight <= self.max_weight
    }
}

/// Parameter loading contract shared by weight dependences
pub trait WeightDependence {
    /// Human-readable name for logs
    fn name(&self) -> &'static str;

    /// Load parameters from `words` starting at word `offset`
    ///
    /// `ring_buffer_to_input_left_shifts` holds the per-synapse-type shifts
    /// between ring-buffer and input representations; implementations that
    /// work in raw weight units may ignore it.
    ///
    /// Returns the offset of the first word after this region.
    fn initialise(
        &mut self,
        words: &[i32],
        offset: usize,
        ring_buffer_to_input_left_shifts: &[u32],
    ) -> Result<usize>;

    /// Bounds for a synapse type
    fn region(&self, synapse_type: SynapseType) -> &WeightRegion;
}
