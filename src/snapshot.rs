//! Recorded state of a run, one snapshot per completed step.

use crate::float::Float;
use serde::{Deserialize, Serialize};

/// Position of one mass at the end of a step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MassSnapshot<F: Float> {
    pub name: String,
    pub x: F,
    pub y: F,
}

/// Endpoint positions and tension of one rope at the end of a step.
///
/// The tension is the one computed during that step's force pass, so it
/// lags the recorded endpoint positions by the position update.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RopeSnapshot<F: Float> {
    pub start_x: F,
    pub start_y: F,
    pub end_x: F,
    pub end_y: F,
    pub tension: F,
}

/// Masses and ropes in the order they were added to the system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<F: Float> {
    pub masses: Vec<MassSnapshot<F>>,
    pub ropes: Vec<RopeSnapshot<F>>,
}

/// Snapshots of a whole run in chronological order. Snapshot `i` holds the
/// state at `(i + 1) * timestep`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recording<F: Float> {
    pub timestep: F,
    pub snapshots: Vec<Snapshot<F>>,
}

/// Snapshots reserved up front; longer runs grow the buffer as they go.
const MAX_RESERVED_SNAPSHOTS: usize = 1 << 16;

impl<F: Float> Recording<F> {
    /// `capacity` is a hint; at most `MAX_RESERVED_SNAPSHOTS` are reserved.
    pub fn with_capacity(timestep: F, capacity: usize) -> Self {
        Recording {
            timestep,
            snapshots: Vec::with_capacity(capacity.min(MAX_RESERVED_SNAPSHOTS)),
        }
    }

    pub fn push(&mut self, snapshot: Snapshot<F>) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Simulated time at the end of step `index`.
    pub fn time_at(&self, index: usize) -> F {
        F::from_f64((index + 1) as f64) * self.timestep
    }

    /// Latest snapshot taken at or before `time`, for playback at a frame
    /// rate unrelated to the timestep. `None` before the first step ends.
    pub fn snapshot_at_time(&self, time: F) -> Option<&Snapshot<F>> {
        if !time.is_finite() || time < self.timestep {
            return None;
        }
        let steps = (time / self.timestep).floor().to_f64() as usize;
        let index = steps.min(self.snapshots.len()).checked_sub(1)?;
        self.snapshots.get(index)
    }

    /// Step index and value of the highest tension `rope` reached. The
    /// earliest step wins a tie.
    pub fn peak_tension(&self, rope: usize) -> Option<(usize, F)> {
        let mut peak: Option<(usize, F)> = None;
        for (i, snap) in self.snapshots.iter().enumerate() {
            let tension = match snap.ropes.get(rope) {
                Some(r) => r.tension,
                None => continue,
            };
            match peak {
                Some((_, best)) if tension <= best => {}
                _ => peak = Some((i, tension)),
            }
        }
        peak
    }

    /// Tension of `rope` over the run, one value per step.
    pub fn tension_series(&self, rope: usize) -> Vec<F> {
        self.snapshots
            .iter()
            .filter_map(|s| s.ropes.get(rope).map(|r| r.tension))
            .collect()
    }
}
