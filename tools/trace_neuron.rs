// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Single-neuron trace tool.
//!
//! Loads `lifdv_configuration.toml`, drives one LIF-dV neuron with a constant
//! input current, and prints its state every timestep. The neuron is spiked
//! whenever its voltage reaches `--threshold`.
//!
//! Set `LIFDV_TRACE_DYNAMICS=1` to also emit per-step `trace!` events.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::OnceLock;

use lifdv::config::load_config;
use lifdv::observability::{debug_flags_help, init_logging, parse_debug_flags};
use lifdv::prelude::*;
use tracing::{info, trace};

struct TraceArgs {
    config_path: Option<PathBuf>,
    steps: u32,
    input: f64,
    threshold: f64,
    overrides: HashMap<String, String>,
}

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: trace_neuron [--config <path>] [--steps <n>] [--input <nA>] [--threshold <mV>]\n\
         \x20                   [--timestep-ms <ms>] [--v-init <mV>] [--gamma <0-1>] [--log-level <level>]\n\n\
         Defaults:\n\
         - config: lifdv_configuration.toml (searched from the working directory)\n\
         - steps: 100\n\
         - input: 1.0\n\
         - threshold: -50.0\n\n\
         {}",
        debug_flags_help()
    );
    process::exit(2);
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> T {
    let value = value.unwrap_or_else(|| usage_and_exit());
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid value for {flag}: {value}");
        usage_and_exit();
    })
}

fn parse_args() -> TraceArgs {
    let mut parsed = TraceArgs {
        config_path: None,
        steps: 100,
        input: 1.0,
        threshold: -50.0,
        overrides: HashMap::new(),
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let v = args.next().unwrap_or_else(|| usage_and_exit());
                parsed.config_path = Some(PathBuf::from(v));
            }
            "--steps" => parsed.steps = parse_number("--steps", args.next()),
            "--input" => parsed.input = parse_number("--input", args.next()),
            "--threshold" => parsed.threshold = parse_number("--threshold", args.next()),
            "--timestep-ms" | "--v-init" | "--gamma" | "--log-level" => {
                let v = args.next().unwrap_or_else(|| usage_and_exit());
                let key = arg.trim_start_matches("--").replace('-', "_");
                parsed.overrides.insert(key, v);
            }
            "-h" | "--help" => usage_and_exit(),
            // Consumed by parse_debug_flags
            other if other.starts_with("--debug-") => {}
            other => {
                eprintln!("Unknown argument: {other}");
                usage_and_exit();
            }
        }
    }

    parsed
}

fn trace_enabled() -> bool {
    static TRACE_DYNAMICS: OnceLock<bool> = OnceLock::new();
    *TRACE_DYNAMICS.get_or_init(|| {
        env::var("LIFDV_TRACE_DYNAMICS")
            .map(|v| v == "1")
            .unwrap_or(false)
    })
}

fn main() {
    let args = parse_args();

    let config = load_config(args.config_path.as_deref(), Some(&args.overrides))
        .unwrap_or_else(|e| {
            eprintln!("Failed to load configuration: {e}");
            process::exit(2);
        });

    let _guard = init_logging(
        &parse_debug_flags(),
        &config.logging.level,
        config.logging.log_dir.clone(),
    )
    .unwrap_or_else(|e| {
        eprintln!("Failed to initialize logging: {e:#}");
        process::exit(2);
    });

    let mut neuron = neuron_from_config(&config).unwrap_or_else(|e| {
        eprintln!("Failed to build neuron: {e}");
        process::exit(1);
    });
    let weights = weight_table_from_config(&config).unwrap_or_else(|e| {
        eprintln!("Failed to load weight bounds: {e}");
        process::exit(1);
    });
    for (synapse_type, region) in weights.iter() {
        info!(
            "{:?} weights: [{}, {}] scale {}",
            synapse_type, region.min_weight, region.max_weight, region.scale
        );
    }
    neuron.print_parameters();

    let input = [Accum::from_num(args.input)];
    let threshold = Accum::from_num(args.threshold);
    let mut spikes = 0u32;

    println!("{:>6} {:>11} {:>11} {:>11} {:>6}", "t", "v", "dv_dt", "dv_dt_slow", "refr");
    for t in 0..args.steps {
        let v = neuron.state_update(&input, &[], Accum::ZERO);
        println!(
            "{:>6} {:>11} {:>11} {:>11} {:>6}",
            t,
            v,
            neuron.dv_dt(),
            neuron.dv_dt_slow(),
            neuron.refract_timer()
        );
        if trace_enabled() {
            trace!(
                "[LIFDV-TRACE] t={} v={} dv_dt={} dv_dt_slow={} refract={}",
                t,
                v,
                neuron.dv_dt(),
                neuron.dv_dt_slow(),
                neuron.refract_timer()
            );
        }

        if !neuron.is_refractory() && v >= threshold {
            neuron.has_spiked();
            spikes += 1;
        }
    }

    neuron.print_state_variables();
    info!("Traced {} timesteps, {} spikes", args.steps, spikes);
}
