// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # LIF-dV Plasticity Parameters
//!
//! Parameter tables consumed by voltage-dependent plasticity:
//! - Weight dependence: per-synapse-type `{min_weight, max_weight, scale}`
//!   bounds loaded from the synapse parameter region
//!
//! The weight-update rule itself lives with the synapse processing stage and
//! reads these tables by synapse type.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod weight_dependence;

// Re-export key types
pub use weight_dependence::{
    WeightDependence, WeightRegion, WeightRegionTable, WEIGHT_DV_REGION_WORDS,
    WEIGHT_REGION_WORDS,
};
