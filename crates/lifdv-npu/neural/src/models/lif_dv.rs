// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # LIF-dV (Leaky Integrate-and-Fire + filtered dV/dt) Neuron Model
//!
//! A leaky integrate-and-fire neuron advanced with the closed-form solution of
//! its ODE, plus a low-pass filtered membrane-voltage derivative consumed by
//! voltage-dependent plasticity.
//!
//! ## Model Dynamics
//!
//! ```text
//! Input (Active only):
//!     I = Σ exc - Σ inh + external_bias + I_offset
//!
//! Membrane Potential Update (exact solution over one timestep):
//!     alpha = I × R_membrane + V_rest
//!     V(t+1) = alpha - exp_TC × (alpha - V(t))
//!
//!     Where:
//!     - exp_TC = exp(-dt / RC), derived offline
//!
//! Refractory:
//!     refract_timer > 0  →  refract_timer -= 1, V unchanged
//!
//! Derivative (every timestep):
//!     dV_dt      = V(t+1) - V_prev
//!     V_prev     = V(t+1)
//!     dV_dt_slow = dV_dt_slow × gamma + dV_dt × (1 - gamma)
//!
//! Spike (host-triggered):
//!     V = V_reset, refract_timer = T_refract
//! ```

use super::traits::{ModelParameters, NeuronModel};
use crate::synapse::total_input_current;
use crate::types::{Accum, NeuralError, RegionReader, Result};
use tracing::debug;

/// Words in a serialized LIF-dV neuron record
pub const LIF_DV_REGION_WORDS: usize = 13;

/// Physical-unit description of a LIF-dV neuron, as written by a modeller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    /// Resting potential (mV)
    pub v_rest: f64,
    /// Post-spike reset potential (mV)
    pub v_reset: f64,
    /// Membrane time constant (ms)
    pub tau_m: f64,
    /// Membrane capacitance (nF)
    pub cm: f64,
    /// Bias current (nA)
    pub i_offset: f64,
    /// Refractory period (ms)
    pub tau_refrac: f64,
    /// dV/dt smoothing coefficient, 0-1
    pub gamma: f64,
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            v_rest: -65.0,
            v_reset: -70.0,
            tau_m: 20.0,
            cm: 1.0,
            i_offset: 0.0,
            tau_refrac: 2.0,
            gamma: 0.9,
        }
    }
}

/// Fixed per-neuron parameters of the LIF-dV model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifDvParameters {
    /// Resting potential (mV)
    pub v_rest: Accum,
    /// Post-spike reset potential (mV)
    pub v_reset: Accum,
    /// Membrane resistance (MOhm)
    pub r_membrane: Accum,
    /// Decay factor exp(-dt/RC)
    pub exp_tc: Accum,
    /// Constant bias current (nA)
    pub i_offset: Accum,
    /// Refractory period in timesteps
    pub t_refract: i32,
    /// Filter coefficient applied to the previous smoothed derivative
    pub gamma: Accum,
    /// Filter coefficient applied to the new derivative (1 - gamma)
    pub gamma_complement: Accum,
}

impl LifDvParameters {
    /// Derive fixed-point parameters from physical units
    ///
    /// `exp_tc = exp(-dt/tau_m)`, `r_membrane = tau_m / cm`,
    /// `t_refract = ceil(tau_refrac / dt)`, `gamma_complement = 1 - gamma`.
    ///
    /// # Example
    /// ```
    /// use lifdv_npu_neural::{Accum, LifDvParameters, PhysicalParameters};
    ///
    /// let params = LifDvParameters::from_physical(&PhysicalParameters::default(), 1.0).unwrap();
    /// assert_eq!(params.t_refract, 2);
    /// assert_eq!(params.r_membrane, Accum::from_int(20));
    /// assert_eq!(params.gamma + params.gamma_complement, Accum::ONE);
    /// ```
    #[cfg(feature = "std")]
    pub fn from_physical(physical: &PhysicalParameters, timestep_ms: f64) -> Result<Self> {
        require_positive("timestep_ms", timestep_ms)?;
        require_positive("tau_m", physical.tau_m)?;
        require_positive("cm", physical.cm)?;
        if !(physical.tau_refrac >= 0.0) {
            return Err(NeuralError::InvalidParameter {
                name: "tau_refrac",
                reason: format!("must be non-negative, got {}", physical.tau_refrac),
            });
        }

        let exp_tc = (-timestep_ms / physical.tau_m).exp();
        let r_membrane = physical.tau_m / physical.cm;

        // Ratios like 2.0 / 0.1 land a hair above the integer
        let steps = physical.tau_refrac / timestep_ms;
        let nearest = steps.round();
        let t_refract = if (steps - nearest).abs() < 1e-9 {
            nearest
        } else {
            steps.ceil()
        };
        if t_refract > i32::MAX as f64 {
            return Err(NeuralError::InvalidParameter {
                name: "tau_refrac",
                reason: format!("{} timesteps does not fit the refractory counter", t_refract),
            });
        }

        let gamma = Accum::from_num(physical.gamma);
        let params = Self {
            v_rest: require_accum("v_rest", physical.v_rest)?,
            v_reset: require_accum("v_reset", physical.v_reset)?,
            r_membrane: require_accum("r_membrane", r_membrane)?,
            exp_tc: Accum::from_num(exp_tc),
            i_offset: require_accum("i_offset", physical.i_offset)?,
            t_refract: t_refract as i32,
            gamma,
            gamma_complement: Accum::ONE - gamma,
        };
        params.validate()?;
        Ok(params)
    }
}

#[cfg(feature = "std")]
fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(NeuralError::InvalidParameter {
            name,
            reason: format!("must be positive, got {}", value),
        })
    }
}

#[cfg(feature = "std")]
fn require_accum(name: &'static str, value: f64) -> Result<Accum> {
    Accum::checked_from_num(value).ok_or_else(|| NeuralError::InvalidParameter {
        name,
        reason: format!("{} is outside the fixed-point range [-65536, 65536)", value),
    })
}

fn require_unit_range(name: &'static str, value: Accum) -> Result<()> {
    if value < Accum::ZERO || value > Accum::ONE {
        return Err(NeuralError::InvalidParameter {
            name,
            reason: format!("must be in [0, 1], got {}", value),
        });
    }
    Ok(())
}

impl ModelParameters for LifDvParameters {
    fn validate(&self) -> Result<()> {
        require_unit_range("exp_tc", self.exp_tc)?;
        require_unit_range("gamma", self.gamma)?;
        require_unit_range("gamma_complement", self.gamma_complement)?;
        if self.t_refract < 0 {
            return Err(NeuralError::InvalidParameter {
                name: "t_refract",
                reason: format!("must be non-negative, got {}", self.t_refract),
            });
        }
        // Independently rounded coefficients may be off by one step each
        let drift = (self.gamma + self.gamma_complement - Accum::ONE).saturating_abs();
        if drift > Accum::from_raw(2) {
            return Err(NeuralError::InvalidParameter {
                name: "gamma_complement",
                reason: format!(
                    "gamma ({}) + gamma_complement ({}) must equal 1",
                    self.gamma, self.gamma_complement
                ),
            });
        }
        Ok(())
    }

    fn parameter_count() -> usize {
        8 // v_rest, v_reset, r_membrane, exp_tc, i_offset, t_refract, gamma, gamma_complement
    }
}

/// The LIF-dV model has no model-wide parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifDvGlobalParameters;

/// One LIF-dV neuron: fixed parameters plus mutable state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifDvNeuron {
    v_membrane: Accum,
    v_prev: Accum,
    refract_timer: i32,
    dv_dt: Accum,
    dv_dt_slow: Accum,
    params: LifDvParameters,
}

impl LifDvNeuron {
    /// Create a neuron at rest, outside its refractory period
    pub fn new(params: LifDvParameters) -> Self {
        Self::with_state(params, params.v_rest, 0)
    }

    /// Create a neuron with an explicit initial voltage and refractory timer
    pub fn with_state(params: LifDvParameters, v_init: Accum, refract_timer: i32) -> Self {
        Self {
            v_membrane: v_init,
            v_prev: v_init,
            refract_timer,
            dv_dt: Accum::ZERO,
            dv_dt_slow: Accum::ZERO,
            params,
        }
    }

    pub fn params(&self) -> &LifDvParameters {
        &self.params
    }

    /// Remaining refractory timesteps
    pub fn refract_timer(&self) -> i32 {
        self.refract_timer
    }

    pub fn is_refractory(&self) -> bool {
        self.refract_timer > 0
    }

    /// Voltage change over the last timestep
    pub fn dv_dt(&self) -> Accum {
        self.dv_dt
    }

    /// Low-pass filtered voltage change
    pub fn dv_dt_slow(&self) -> Accum {
        self.dv_dt_slow
    }

    /// Voltage stored at the end of the last timestep
    pub fn v_prev(&self) -> Accum {
        self.v_prev
    }

    #[inline(always)]
    fn lif_closed_form(&mut self, input: Accum) {
        let alpha = input * self.params.r_membrane + self.params.v_rest;
        self.v_membrane = alpha - self.params.exp_tc * (alpha - self.v_membrane);
    }

    #[inline(always)]
    fn update_dv_dt(&mut self) {
        self.dv_dt = self.v_membrane - self.v_prev;
        self.v_prev = self.v_membrane;
        self.dv_dt_slow =
            self.dv_dt_slow * self.params.gamma + self.dv_dt * self.params.gamma_complement;
    }

    /// Read one neuron record starting at word `offset`
    ///
    /// Returns the neuron and the offset of the first word after the record.
    /// Word order: `v_membrane, v_prev, v_rest, v_reset, r_membrane, exp_tc,
    /// i_offset, refract_timer, t_refract, dv_dt, dv_dt_slow, gamma,
    /// gamma_complement`.
    pub fn read_region(words: &[i32], offset: usize) -> Result<(Self, usize)> {
        let mut reader = RegionReader::new("neuron", words, offset);
        let w = reader.take(LIF_DV_REGION_WORDS)?;

        let params = LifDvParameters {
            v_rest: Accum::from_raw(w[2]),
            v_reset: Accum::from_raw(w[3]),
            r_membrane: Accum::from_raw(w[4]),
            exp_tc: Accum::from_raw(w[5]),
            i_offset: Accum::from_raw(w[6]),
            t_refract: w[8],
            gamma: Accum::from_raw(w[11]),
            gamma_complement: Accum::from_raw(w[12]),
        };
        params.validate()?;

        let neuron = Self {
            v_membrane: Accum::from_raw(w[0]),
            v_prev: Accum::from_raw(w[1]),
            refract_timer: w[7],
            dv_dt: Accum::from_raw(w[9]),
            dv_dt_slow: Accum::from_raw(w[10]),
            params,
        };
        Ok((neuron, reader.offset()))
    }

    /// Append this neuron's record in [`LifDvNeuron::read_region`] word order
    pub fn write_region(&self, out: &mut Vec<i32>) {
        let p = &self.params;
        out.extend_from_slice(&[
            self.v_membrane.raw(),
            self.v_prev.raw(),
            p.v_rest.raw(),
            p.v_reset.raw(),
            p.r_membrane.raw(),
            p.exp_tc.raw(),
            p.i_offset.raw(),
            self.refract_timer,
            p.t_refract,
            self.dv_dt.raw(),
            self.dv_dt_slow.raw(),
            p.gamma.raw(),
            p.gamma_complement.raw(),
        ]);
    }
}

impl NeuronModel for LifDvNeuron {
    type GlobalParameters = LifDvGlobalParameters;

    fn model_name(&self) -> &'static str {
        "Leaky Integrate-and-Fire with filtered dV/dt (LIF-dV)"
    }

    fn state_update(
        &mut self,
        exc_input: &[Accum],
        inh_input: &[Accum],
        external_bias: Accum,
    ) -> Accum {
        if self.refract_timer <= 0 {
            let input =
                total_input_current(exc_input, inh_input, external_bias, self.params.i_offset);
            self.lif_closed_form(input);
        } else {
            self.refract_timer -= 1;
        }

        self.update_dv_dt();

        self.v_membrane
    }

    fn has_spiked(&mut self) {
        self.v_membrane = self.params.v_reset;
        self.refract_timer = self.params.t_refract;
    }

    #[inline(always)]
    fn membrane_voltage(&self) -> Accum {
        self.v_membrane
    }

    fn set_global_parameters(&mut self, _params: &LifDvGlobalParameters) {
        // No model-wide parameters
    }

    fn print_state_variables(&self) {
        debug!("V membrane    = {:>11} mv", self.v_membrane);
        debug!("dV/dt         = {:>11} mv", self.dv_dt);
        debug!("dV/dt slow    = {:>11} mv", self.dv_dt_slow);
        debug!("refract timer = {} timesteps", self.refract_timer);
    }

    fn print_parameters(&self) {
        let p = &self.params;
        debug!("V reset       = {:>11} mv", p.v_reset);
        debug!("V rest        = {:>11} mv", p.v_rest);
        debug!("I offset      = {:>11} nA", p.i_offset);
        debug!("R membrane    = {:>11} Mohm", p.r_membrane);
        debug!("exp(-ms/(RC)) = {:>11} [.]", p.exp_tc);
        debug!("T refract     = {} timesteps", p.t_refract);
        debug!("gamma         = {:>11}", p.gamma);
        debug!("gamma comp    = {:>11}", p.gamma_complement);
    }
}
