// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # lifdv-observability
//!
//! Unified logging for the LIF-dV crates, with per-crate debug flag support.
//!
//! ## Features
//! - `file-logging`: Timestamped run folders with daily-rolling log files

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

// Re-export commonly used items
pub use cli::*;
pub use init::*;

/// Known crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "lifdv",
    "lifdv-npu-neural",
    "lifdv-npu-plasticity",
    "lifdv-config",
    "lifdv-observability",
];
