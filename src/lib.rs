//! # LIF-dV - Leaky Integrate-and-Fire Neuron with Filtered dV/dt
//!
//! A fixed-point leaky integrate-and-fire neuron kernel that also tracks a
//! low-pass filtered membrane-voltage derivative, plus the loader for the
//! weight-bound parameter region used by voltage-dependent plasticity.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! lifdv = "0.1"  # Default: std
//! ```
//!
//! ## Feature Flags
//!
//! - **`platform-std`** (default): Standard Rust; enables configuration loading
//!   and physical-unit parameter derivation
//! - **`file-logging`**: Daily-rolling log files in timestamped run folders
//!
//! ## Usage Examples
//!
//! ### Neuron from configuration
//!
//! ```rust
//! use lifdv::prelude::*;
//!
//! let config = LifDvConfig::default();
//! let mut neuron = lifdv::builder::neuron_from_config(&config)?;
//!
//! let v = neuron.state_update(&[Accum::from_num(0.5)], &[], Accum::ZERO);
//! assert!(v > Accum::from_num(config.neuron.v_init));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Weight bounds from a host buffer
//!
//! ```rust
//! use lifdv::prelude::*;
//!
//! // [min, max, scale] per synapse type, excitatory first
//! let words = [0, 1024, 64, 0, 512, 32];
//! let mut table = WeightRegionTable::new();
//! let end = table.initialise(&words, 0, &[])?;
//!
//! assert_eq!(end, words.len());
//! assert_eq!(table.region(SynapseType::Inhibitory).max_weight, 512);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Algorithms: lifdv-npu-neural, lifdv-npu-plasticity     │
//! │  (Fixed-point kernel, parameter regions, no I/O)        │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Infrastructure: lifdv-config, lifdv-observability      │
//! │  (TOML configuration, logging)                          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

// Re-export algorithms
pub use lifdv_npu_neural as neural;
pub use lifdv_npu_plasticity as plasticity;

// Re-export infrastructure
pub use lifdv_config as config;
pub use lifdv_observability as observability;

#[cfg(feature = "platform-std")]
pub mod builder;

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use crate::neural::{
        Accum, LifDvNeuron, LifDvParameters, ModelParameters, NeuronModel, PhysicalParameters,
        SynapseType,
    };
    pub use crate::plasticity::{WeightDependence, WeightRegion, WeightRegionTable};

    pub use crate::config::LifDvConfig;

    #[cfg(feature = "platform-std")]
    pub use crate::builder::{neuron_from_config, weight_table_from_config, BuildError};
}
