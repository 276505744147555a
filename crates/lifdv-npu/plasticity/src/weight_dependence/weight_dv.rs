// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! dV/dt weight dependence parameter table
//!
//! One `{min_weight, max_weight, scale}` record per synapse type, read in
//! ascending synapse-type order from a flat word region:
//!
//! ```text
//! offset + 0  exc.min_weight
//! offset + 1  exc.max_weight
//! offset + 2  exc.scale
//! offset + 3  inh.min_weight
//! offset + 4  inh.max_weight
//! offset + 5  inh.scale
//! ```
//!
//! The table is owned by the simulation instance and passed by reference to
//! whatever applies weight updates.

use super::{WeightDependence, WeightRegion, WEIGHT_REGION_WORDS};
use lifdv_npu_neural::{NeuralError, RegionReader, Result, SynapseType, SYNAPSE_TYPE_COUNT};
use tracing::info;

/// Words consumed by [`WeightRegionTable::initialise`]
pub const WEIGHT_DV_REGION_WORDS: usize = WEIGHT_REGION_WORDS * SYNAPSE_TYPE_COUNT;

/// Per-synapse-type weight bounds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightRegionTable {
    regions: [WeightRegion; SYNAPSE_TYPE_COUNT],
}

impl WeightRegionTable {
    /// Empty table (all bounds zero)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table directly from bounds, in synapse-type order
    pub fn from_regions(regions: [WeightRegion; SYNAPSE_TYPE_COUNT]) -> Self {
        Self { regions }
    }

    /// Load a fresh table from a word region
    ///
    /// Returns the table and the offset following the region.
    pub fn from_region(words: &[i32], offset: usize) -> Result<(Self, usize)> {
        let mut table = Self::new();
        let end = table.initialise(words, offset, &[])?;
        Ok((table, end))
    }

    pub fn regions(&self) -> &[WeightRegion; SYNAPSE_TYPE_COUNT] {
        &self.regions
    }

    pub fn iter(&self) -> impl Iterator<Item = (SynapseType, &WeightRegion)> + '_ {
        SynapseType::ALL.iter().copied().zip(self.regions.iter())
    }

    /// Append this table in region order
    pub fn write_region(&self, out: &mut Vec<i32>) {
        for region in &self.regions {
            out.extend_from_slice(&region.to_words());
        }
    }
}

impl WeightDependence for WeightRegionTable {
    fn name(&self) -> &'static str {
        "DvDt weight dependence"
    }

    fn initialise(
        &mut self,
        words: &[i32],
        offset: usize,
        _ring_buffer_to_input_left_shifts: &[u32],
    ) -> Result<usize> {
        info!("weight_initialise: starting");
        info!("\t{}", self.name());

        let mut reader = RegionReader::new("weight dependence", words, offset);
        let region_words = reader.take(WEIGHT_DV_REGION_WORDS)?;

        // Build aside so a rejected region leaves the current table intact
        let mut regions = [WeightRegion::default(); SYNAPSE_TYPE_COUNT];
        for (s, (slot, record)) in regions
            .iter_mut()
            .zip(region_words.chunks_exact(WEIGHT_REGION_WORDS))
            .enumerate()
        {
            *slot = WeightRegion::new(record[0], record[1], record[2]);
            if !slot.is_ordered() {
                return Err(NeuralError::InvalidWeightBounds {
                    synapse_type: s,
                    min_weight: slot.min_weight,
                    max_weight: slot.max_weight,
                });
            }
        }
        self.regions = regions;

        for (synapse_type, region) in self.iter() {
            info!(
                "\tSynapse type {}: Min weight:{}, Max weight:{}, scale+:{}",
                synapse_type.index(),
                region.min_weight,
                region.max_weight,
                region.scale
            );
        }

        info!("weight_initialise: completed successfully");
        Ok(reader.offset())
    }

    #[inline]
    fn region(&self, synapse_type: SynapseType) -> &WeightRegion {
        &self.regions[synapse_type.index()]
    }
}
