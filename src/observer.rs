//! Step observer trait for watching the integrator work.

use crate::body::Mass;
use crate::float::Float;
use crate::vec::Vec2;

/// Trait for observing simulation steps.
///
/// Implement this trait to inspect intermediate state (e.g., for debugging,
/// force-balance checks, or progress reporting). All methods have default
/// no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called once every mass holds only its weight, before any rope force.
    fn on_forces_reset(&mut self, _masses: &[Mass<F>]) {}

    /// Called for each rope with the force computed for its `start` endpoint
    /// and whether the force gate let it through.
    fn on_rope_force(&mut self, _rope: usize, _force: Vec2<F>, _applied: bool) {}

    /// Called when a step has been fully integrated. `step` counts from 1.
    fn on_step_complete(&mut self, _step: usize) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
