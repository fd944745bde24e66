//! Run settings and physical constants for the integrator.

use crate::error::SimError;
use crate::float::Float;
use crate::vec::Vec2;

/// How long to simulate and with which fixed step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings<F: Float> {
    duration_seconds: F,
    timestep: F,
}

impl<F: Float> Settings<F> {
    /// Both values must be positive and finite, and their ratio must be a
    /// countable number of steps.
    pub fn new(duration_seconds: F, timestep: F) -> Result<Self, SimError> {
        if !timestep.is_positive_finite() {
            return Err(SimError::InvalidTimestep);
        }
        if !duration_seconds.is_positive_finite() {
            return Err(SimError::InvalidDuration);
        }
        let quotient = (duration_seconds / timestep).to_f64();
        if !quotient.is_finite() || quotient >= usize::MAX as f64 {
            return Err(SimError::TooManySteps);
        }
        Ok(Settings { duration_seconds, timestep })
    }

    pub fn duration_seconds(&self) -> F { self.duration_seconds }
    pub fn timestep(&self) -> F { self.timestep }

    /// Number of whole steps that fit in the duration. A trailing partial
    /// step is not simulated.
    pub fn step_count(&self) -> usize {
        (self.duration_seconds / self.timestep).floor().to_f64() as usize
    }

    /// Whether `step_count` drops part of the duration.
    pub fn has_remainder(&self) -> bool {
        let quotient = self.duration_seconds / self.timestep;
        quotient != quotient.floor()
    }
}

/// Which rope forces the integrator actually applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ForceGate {
    /// Apply only when a component of the force on `start` is strictly
    /// positive. Pulls pointing left and down are skipped. Existing results
    /// were produced this way.
    #[default]
    PositiveComponent,
    /// Apply whenever the rope is under tension.
    Tension,
    /// Apply every computed force.
    Always,
}

impl ForceGate {
    pub fn admits<F: Float>(self, force: Vec2<F>, tension: F) -> bool {
        match self {
            ForceGate::PositiveComponent => force.x > F::zero() || force.y > F::zero(),
            ForceGate::Tension => tension > F::zero(),
            ForceGate::Always => true,
        }
    }
}

/// Physical constants for the integrator.
///
/// # Builder Pattern
/// ```
/// use ropefall::config::{ForceGate, SimConfig};
///
/// let config: SimConfig<f64> = SimConfig::new()
///     .with_gravity(9.81)
///     .with_damping(1500.0)
///     .with_force_gate(ForceGate::Tension);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimConfig<F: Float> {
    /// Downward gravitational acceleration, m/s². Default: 9.8.
    pub gravity: F,
    /// Drag coefficient used when damping is enabled. Default: 2 000 000.
    pub damping_constant: F,
    /// Default: false.
    pub damping_enabled: bool,
    /// Default: [`ForceGate::PositiveComponent`].
    pub force_gate: ForceGate,
}

impl<F: Float> SimConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimConfig {
            gravity: F::from_f64(9.8),
            damping_constant: F::from_f64(2_000_000.0),
            damping_enabled: false,
            force_gate: ForceGate::default(),
        }
    }

    /// Set the gravitational acceleration.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Enable damping with the given constant.
    pub fn with_damping(mut self, constant: F) -> Self {
        self.damping_constant = constant;
        self.damping_enabled = true;
        self
    }

    pub fn without_damping(mut self) -> Self {
        self.damping_enabled = false;
        self
    }

    /// Set the rope force gate.
    pub fn with_force_gate(mut self, gate: ForceGate) -> Self {
        self.force_gate = gate;
        self
    }

    /// The damping constant is only checked while damping is enabled.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.damping_enabled
            && (!self.damping_constant.is_finite() || self.damping_constant < F::zero())
        {
            return Err(SimError::InvalidDamping);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
