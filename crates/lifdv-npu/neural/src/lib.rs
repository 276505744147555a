// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # LIF-dV Neural Computation
//!
//! The per-timestep numerical kernel:
//! - **Types**: s16.15 fixed-point [`Accum`], errors, parameter-region words
//! - **Synapse**: synapse types and input-current aggregation
//! - **Models**: the [`NeuronModel`] interface and the LIF-dV neuron
//!
//! All state arithmetic is integer fixed-point with saturation, so a run is
//! bit-for-bit reproducible across platforms.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod types;

pub mod synapse;

pub mod models;

// Re-export types
pub use types::{
    words_from_le_bytes, words_to_le_bytes, Accum, Error, NeuralError, RegionReader, Result,
    ACCUM_FRACTIONAL_BITS, WORD_BYTES,
};

// Re-export synapse module
pub use synapse::{total_input_current, SynapseType, SYNAPSE_TYPE_COUNT};

// Re-export neuron models
pub use models::{
    LifDvGlobalParameters, LifDvNeuron, LifDvParameters, ModelParameters, NeuronModel,
    PhysicalParameters, LIF_DV_REGION_WORDS,
};
