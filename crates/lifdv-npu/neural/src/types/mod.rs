// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neural Types Module
//!
//! Core type definitions shared by the neuron models and the plasticity
//! parameter loaders.

pub mod error;
pub mod numeric;
pub mod region;

// Re-export commonly used types
pub use error::{Error, NeuralError, Result};
pub use numeric::{Accum, ACCUM_FRACTIONAL_BITS};
pub use region::{words_from_le_bytes, words_to_le_bytes, RegionReader, WORD_BYTES};

// Note: SynapseType is in crate::synapse module (shared with algorithms)
// Import it here for convenience
pub use crate::synapse::{SynapseType, SYNAPSE_TYPE_COUNT};
