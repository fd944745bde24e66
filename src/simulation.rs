//! Fixed-timestep run loop.

use crate::config::{Settings, SimConfig};
use crate::error::SimError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::snapshot::Recording;
use crate::system::RopeSystem;

/// Run `system` for `settings.step_count()` steps, recording a snapshot
/// after each one.
///
/// Everything is validated before the first step, so an error means no
/// state was touched. Once started, the run always completes.
pub fn simulate<F: Float, O: StepObserver<F>>(
    settings: &Settings<F>,
    config: &SimConfig<F>,
    system: &mut RopeSystem<F>,
    observer: &mut O,
) -> Result<Recording<F>, SimError> {
    config.validate()?;
    system.validate()?;

    let steps = settings.step_count();
    let dt = settings.timestep();
    if settings.has_remainder() {
        ftlog::warn!(
            "Duration {} is not a multiple of timestep {}; the final partial step is dropped",
            settings.duration_seconds(),
            dt
        );
    }
    ftlog::info!(
        "Simulating {} steps of {} s for {} masses, {} anchors and {} ropes",
        steps,
        dt,
        system.mass_count(),
        system.anchor_count(),
        system.rope_count()
    );

    let mut recording = Recording::with_capacity(dt, steps);
    for step in 1..=steps {
        system.step(dt, config, observer);
        recording.push(system.snapshot());
        observer.on_step_complete(step);
    }

    ftlog::info!("Finished simulation with {} snapshots", recording.len());
    Ok(recording)
}
