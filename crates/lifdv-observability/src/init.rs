// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Unified logging initialization
//!
//! Console output is always installed. With the `file-logging` feature and a
//! log directory, a timestamped run folder receives a daily-rolling log file:
//!
//! ```text
//! <log_dir>/
//!   └── run_20250101_120000/
//!       └── lifdv.log.2025-01-01
//! ```

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::CrateDebugFlags;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the logging backend alive; drop flushes pending file output
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// Run folder receiving file logs, if file logging is active
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Build the `EnvFilter` for the given flags and default level
pub fn build_filter(debug_flags: &CrateDebugFlags, default_level: &str) -> Result<EnvFilter> {
    let filter = debug_flags.to_filter_string(default_level);
    EnvFilter::try_new(&filter).with_context(|| format!("Invalid log filter: {}", filter))
}

/// Initialize logging with console output and optional file output
///
/// # Arguments
/// * `debug_flags` - Per-crate debug flags for filtering
/// * `default_level` - Level for crates without a debug flag
/// * `log_dir` - Base directory for run log folders (console only when `None`)
///
/// # Errors
/// Fails on an invalid level, an uncreatable log directory, or when a global
/// subscriber is already installed.
pub fn init_logging(
    debug_flags: &CrateDebugFlags,
    default_level: &str,
    log_dir: Option<PathBuf>,
) -> Result<LoggingGuard> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(build_filter(debug_flags, default_level)?);
    #[allow(unused_mut)]
    let mut layers: Vec<BoxedLayer> = vec![console_layer.boxed()];

    #[cfg(feature = "file-logging")]
    let (file_guard, run_folder) = match log_dir {
        Some(base) => {
            let (layer, guard, run_folder) = file_layer(&base, debug_flags, default_level)?;
            layers.push(layer);
            (Some(guard), Some(run_folder))
        }
        None => (None, None),
    };

    #[cfg(not(feature = "file-logging"))]
    let run_folder: Option<PathBuf> = None;

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| anyhow!("Failed to install global subscriber: {}", e))?;

    #[cfg(not(feature = "file-logging"))]
    {
        if let Some(dir) = log_dir {
            tracing::warn!(
                "File logging to {} requested but the `file-logging` feature is disabled; logging to console only",
                dir.display()
            );
        }
    }

    Ok(LoggingGuard {
        #[cfg(feature = "file-logging")]
        _file_guard: file_guard,
        log_dir: run_folder,
    })
}

#[cfg(feature = "file-logging")]
fn file_layer(
    base_log_dir: &Path,
    debug_flags: &CrateDebugFlags,
    default_level: &str,
) -> Result<(BoxedLayer, tracing_appender::non_blocking::WorkerGuard, PathBuf)> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let run_folder = base_log_dir.join(format!("run_{}", timestamp));
    std::fs::create_dir_all(&run_folder)
        .with_context(|| format!("Failed to create log directory: {}", run_folder.display()))?;

    let appender = tracing_appender::rolling::daily(&run_folder, "lifdv.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(build_filter(debug_flags, default_level)?)
        .boxed();

    Ok((layer, guard, run_folder))
}

/// Initialize console logging at `info` with flags from args and `LIFDV_DEBUG`
pub fn init_logging_default() -> Result<LoggingGuard> {
    init_logging(&crate::cli::parse_debug_flags(), "info", None)
}
