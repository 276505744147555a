// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Neuron Model Architecture
//!
//! Trait-based neuron model system. The host loop drives every model through
//! [`NeuronModel`], so additional variants plug in without touching it.
//!
//! ## Adding a New Neuron Model
//!
//! 1. Create `src/models/your_model.rs`
//! 2. Implement `NeuronModel` for the neuron state and `ModelParameters` for its parameters
//! 3. Add tests
//! 4. Export in `mod.rs`

pub mod lif_dv;
pub mod traits;

// Re-export core types
pub use lif_dv::{
    LifDvGlobalParameters, LifDvNeuron, LifDvParameters, PhysicalParameters, LIF_DV_REGION_WORDS,
};
pub use traits::{ModelParameters, NeuronModel};
