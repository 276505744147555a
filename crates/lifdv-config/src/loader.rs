// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{validate_config, ConfigError, ConfigResult, LifDvConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration file name searched for on disk
pub const CONFIG_FILE_NAME: &str = "lifdv_configuration.toml";

/// Find the configuration file
///
/// Search order:
/// 1. `LIFDV_CONFIG_PATH` environment variable
/// 2. Current working directory: `./lifdv_configuration.toml`
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    // 1. Check environment variable first
    if let Ok(env_path) = env::var("LIFDV_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by LIFDV_CONFIG_PATH not found: {}",
                path.display()
            )));
        }
    }

    // 2. Search in common locations
    let mut search_paths = Vec::new();

    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd.as_path();
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent;
                }
                None => break,
            }
        }
    }

    if let Some(path) = search_paths.iter().find(|p| p.exists()) {
        return Ok(path.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "Configuration file '{}' not found in any of these locations:\n{}\n\nSet LIFDV_CONFIG_PATH environment variable to specify custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Returns
///
/// Complete, validated `LifDvConfig` with all overrides applied
///
/// # Errors
///
/// Returns error if config file is not found, contains invalid TOML, has an
/// unparsable CLI override, or fails validation
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<LifDvConfig> {
    let config_file = if let Some(path) = config_path {
        path.to_path_buf()
    } else {
        find_config_file()?
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: LifDvConfig = toml::from_str(&content)?;

    // Apply overrides in order
    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli)?;
    }

    validate_config(&config)?;
    Ok(config)
}

fn env_parsed<T: FromStr>(name: &str, slot: &mut T) {
    if let Ok(value) = env::var(name) {
        if let Ok(parsed) = value.parse::<T>() {
            *slot = parsed;
        }
    }
}

/// Apply environment variable overrides to configuration
///
/// Unparsable values are ignored. Supported environment variables:
/// - `LIFDV_TIMESTEP_MS` -> `simulation.timestep_ms`
/// - `LIFDV_NEURON_V_INIT` -> `neuron.v_init`
/// - `LIFDV_NEURON_I_OFFSET` -> `neuron.i_offset`
/// - `LIFDV_NEURON_GAMMA` -> `neuron.gamma`
/// - `LIFDV_LOG_LEVEL` -> `logging.level`
/// - `LIFDV_LOG_DIR` -> `logging.log_dir`
pub fn apply_environment_overrides(config: &mut LifDvConfig) {
    // Simulation settings
    env_parsed("LIFDV_TIMESTEP_MS", &mut config.simulation.timestep_ms);

    // Neuron settings
    env_parsed("LIFDV_NEURON_V_INIT", &mut config.neuron.v_init);
    env_parsed("LIFDV_NEURON_I_OFFSET", &mut config.neuron.i_offset);
    env_parsed("LIFDV_NEURON_GAMMA", &mut config.neuron.gamma);

    // Logging settings
    if let Ok(value) = env::var("LIFDV_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("LIFDV_LOG_DIR") {
        config.logging.log_dir = Some(PathBuf::from(value));
    }
}

fn cli_parsed<T: FromStr>(
    cli_args: &HashMap<String, String>,
    key: &str,
    slot: &mut T,
) -> ConfigResult<()> {
    if let Some(value) = cli_args.get(key) {
        *slot = value.parse::<T>().map_err(|_| {
            ConfigError::InvalidValue(format!("--{} expects a number, got '{}'", key, value))
        })?;
    }
    Ok(())
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"timestep_ms": "0.1", "log_level": "debug"}`)
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a numeric override does not parse
pub fn apply_cli_overrides(
    config: &mut LifDvConfig,
    cli_args: &HashMap<String, String>,
) -> ConfigResult<()> {
    cli_parsed(cli_args, "timestep_ms", &mut config.simulation.timestep_ms)?;
    cli_parsed(cli_args, "v_init", &mut config.neuron.v_init)?;
    cli_parsed(cli_args, "i_offset", &mut config.neuron.i_offset)?;
    cli_parsed(cli_args, "gamma", &mut config.neuron.gamma)?;

    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("log_dir") {
        config.logging.log_dir = Some(PathBuf::from(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::tempdir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_find_config_file_env_var() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("custom_config.toml");
        File::create(&config_path).unwrap();

        env::set_var("LIFDV_CONFIG_PATH", config_path.to_str().unwrap());
        let result = find_config_file();
        env::remove_var("LIFDV_CONFIG_PATH");

        assert_eq!(result.unwrap(), config_path);
    }

    #[test]
    fn test_find_config_file_env_var_missing() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();

        env::set_var("LIFDV_CONFIG_PATH", dir.path().join("absent.toml"));
        let result = find_config_file();
        env::remove_var("LIFDV_CONFIG_PATH");

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_minimal_config() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let saved_timestep = env::var("LIFDV_TIMESTEP_MS").ok();
        env::remove_var("LIFDV_TIMESTEP_MS");
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[simulation]").unwrap();
        writeln!(file, "timestep_ms = 0.1").unwrap();
        writeln!(file, "[neuron]").unwrap();
        writeln!(file, "tau_m = 10.0").unwrap();

        let config = load_config(Some(&config_path), None).unwrap();

        assert_eq!(config.simulation.timestep_ms, 0.1);
        assert_eq!(config.neuron.tau_m, 10.0);
        // Untouched fields keep their defaults
        assert_eq!(config.neuron.v_rest, -65.0);
        assert_eq!(config.plasticity.synapse_types.len(), 2);

        if let Some(value) = saved_timestep {
            env::set_var("LIFDV_TIMESTEP_MS", value);
        }
    }

    #[test]
    fn test_load_synapse_type_tables() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[[plasticity.synapse_types]]").unwrap();
        writeln!(file, "min_weight = -5").unwrap();
        writeln!(file, "max_weight = 500").unwrap();
        writeln!(file, "scale = 8").unwrap();
        writeln!(file, "[[plasticity.synapse_types]]").unwrap();
        writeln!(file, "max_weight = 250").unwrap();

        let config = load_config(Some(&config_path), None).unwrap();
        let types = &config.plasticity.synapse_types;

        assert_eq!((types[0].min_weight, types[0].max_weight, types[0].scale), (-5, 500, 8));
        assert_eq!(types[1].max_weight, 250);
        assert_eq!(types[1].min_weight, 0);
    }

    #[test]
    fn test_invalid_toml_reports_parse_error() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[simulation\ntimestep_ms = ").unwrap();

        assert!(matches!(
            load_config(Some(&config_path), None),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[neuron]\ngamma = 2.0\n").unwrap();

        assert!(matches!(
            load_config(Some(&config_path), None),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_environment_overrides() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let mut config = LifDvConfig::default();

        env::set_var("LIFDV_TIMESTEP_MS", "0.5");
        env::set_var("LIFDV_NEURON_GAMMA", "not-a-number");
        env::set_var("LIFDV_LOG_LEVEL", "debug");

        apply_environment_overrides(&mut config);

        env::remove_var("LIFDV_TIMESTEP_MS");
        env::remove_var("LIFDV_NEURON_GAMMA");
        env::remove_var("LIFDV_LOG_LEVEL");

        assert_eq!(config.simulation.timestep_ms, 0.5);
        assert_eq!(config.neuron.gamma, 0.9); // unparsable value ignored
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LifDvConfig::default();
        let mut cli_args = HashMap::new();
        cli_args.insert("gamma".to_string(), "0.5".to_string());
        cli_args.insert("log_dir".to_string(), "/tmp/lifdv-logs".to_string());

        apply_cli_overrides(&mut config, &cli_args).unwrap();

        assert_eq!(config.neuron.gamma, 0.5);
        assert_eq!(config.logging.log_dir, Some(PathBuf::from("/tmp/lifdv-logs")));
    }

    #[test]
    fn test_cli_override_must_parse() {
        let mut config = LifDvConfig::default();
        let mut cli_args = HashMap::new();
        cli_args.insert("timestep_ms".to_string(), "fast".to_string());

        assert!(matches!(
            apply_cli_overrides(&mut config, &cli_args),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_override_precedence() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        // CLI overrides take precedence over environment variables
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[neuron]").unwrap();
        writeln!(file, "v_init = -60.0").unwrap();
        writeln!(file, "i_offset = 0.1").unwrap();

        env::set_var("LIFDV_NEURON_V_INIT", "-55.0");
        env::set_var("LIFDV_NEURON_I_OFFSET", "0.2");

        let mut cli_args = HashMap::new();
        cli_args.insert("v_init".to_string(), "-50.0".to_string());

        let config = load_config(Some(&config_path), Some(&cli_args)).unwrap();

        env::remove_var("LIFDV_NEURON_V_INIT");
        env::remove_var("LIFDV_NEURON_I_OFFSET");

        // CLI wins for v_init, env wins for i_offset (no CLI override)
        assert_eq!(config.neuron.v_init, -50.0);
        assert_eq!(config.neuron.i_offset, 0.2);
    }
}
