// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for parameter loading and model construction
//!
//! The per-timestep operations never fail; only construction-time
//! configuration mismatches are surfaced here.

/// Configuration errors raised while building neurons or loading regions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NeuralError {
    #[error("{region} region too short: need {expected} words, {actual} available")]
    RegionTooShort {
        region: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Region byte length {len} is not a multiple of 4")]
    UnalignedRegion { len: usize },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error(
        "Synapse type {synapse_type}: min weight {min_weight} exceeds max weight {max_weight}"
    )]
    InvalidWeightBounds {
        synapse_type: usize,
        min_weight: i32,
        max_weight: i32,
    },
}

pub type Result<T> = core::result::Result<T, NeuralError>;
pub type Error = NeuralError;
