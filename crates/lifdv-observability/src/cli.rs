// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! CLI argument parsing for per-crate debug flags
//!
//! Supports flags like `--debug-lifdv-npu-neural`, `--debug-lifdv-config`, etc.
//! to raise the log level of individual crates.

use std::collections::BTreeSet;
use std::env;

use crate::KNOWN_CRATES;

/// Per-crate debug flags
///
/// # Example
/// ```rust
/// use lifdv_observability::CrateDebugFlags;
///
/// let flags = CrateDebugFlags::from_args(vec!["--debug-lifdv-npu-neural".to_string()]);
/// assert!(flags.is_enabled("lifdv-npu-neural"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Parse debug flags from command-line arguments
    ///
    /// Looks for arguments matching `--debug-{crate-name}` pattern.
    /// Also supports `--debug-all` to enable all crates.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = CrateDebugFlags::default();

        for arg in args {
            if arg == "--debug-all" {
                flags.enable_all();
                continue;
            }

            if let Some(crate_name) = arg.strip_prefix("--debug-") {
                if !crate_name.is_empty() {
                    flags.enabled_crates.insert(crate_name.to_string());
                }
            }
        }

        flags
    }

    fn enable_all(&mut self) {
        for crate_name in KNOWN_CRATES {
            self.enabled_crates.insert(crate_name.to_string());
        }
    }

    /// Check if debug is enabled for a specific crate
    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains(crate_name)
    }

    /// Check if debug is enabled for any crate
    pub fn any_enabled(&self) -> bool {
        !self.enabled_crates.is_empty()
    }

    /// Get log level for a crate
    ///
    /// Returns `tracing::Level::DEBUG` if enabled, `tracing::Level::INFO` otherwise.
    pub fn log_level(&self, crate_name: &str) -> tracing::Level {
        if self.is_enabled(crate_name) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Create a tracing filter from debug flags
    ///
    /// Returns a filter string usable with `EnvFilter`, e.g.
    /// `"lifdv_npu_neural=debug,info"`. Crate names are converted to their
    /// tracing target form (underscores).
    pub fn to_filter_string(&self, default_level: &str) -> String {
        let mut filters: Vec<String> = self
            .enabled_crates
            .iter()
            .map(|crate_name| format!("{}=debug", crate_name.replace('-', "_")))
            .collect();
        // Default level for everything else
        filters.push(default_level.to_lowercase());
        filters.join(",")
    }
}

/// Parse debug flags from the process arguments and environment
///
/// Checks both command-line arguments and the `LIFDV_DEBUG` environment variable.
/// Environment variable format: comma-separated crate names, e.g., "lifdv-npu-neural,lifdv-config"
pub fn parse_debug_flags() -> CrateDebugFlags {
    let mut flags = CrateDebugFlags::from_args(env::args());

    if let Ok(env_var) = env::var("LIFDV_DEBUG") {
        apply_env_value(&mut flags, &env_var);
    }

    flags
}

fn apply_env_value(flags: &mut CrateDebugFlags, value: &str) {
    if value == "all" {
        flags.enable_all();
        return;
    }
    for crate_name in value.split(',') {
        let crate_name = crate_name.trim();
        if !crate_name.is_empty() {
            flags.enabled_crates.insert(crate_name.to_string());
        }
    }
}

/// Generate help text for debug flags
pub fn debug_flags_help() -> String {
    format!(
        r#"Debug Flags:
  --debug-all                    Enable debug logging for all crates
  --debug-{{crate-name}}          Enable debug logging for specific crate

Available crates:
  {}

Environment Variable:
  LIFDV_DEBUG={{crate-name}}[,{{crate-name}}]  Enable debug for crates (comma-separated)
  LIFDV_DEBUG=all                               Enable debug for all crates

Examples:
  --debug-lifdv-npu-neural
  --debug-lifdv-npu-neural --debug-lifdv-npu-plasticity
  LIFDV_DEBUG=lifdv-npu-neural,lifdv-config
"#,
        KNOWN_CRATES.join(", ")
    )
}
