//! The set of masses, anchors and ropes advanced by the integrator.

use crate::body::{Anchor, Mass};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::rope::{Endpoint, Rope};
use crate::snapshot::{MassSnapshot, RopeSnapshot, Snapshot};
use crate::vec::Vec2;

/// Owns every entity of a run. Ropes refer to masses and anchors by index,
/// so entities can only be added, never removed.
#[derive(Clone, Debug, Default)]
pub struct RopeSystem<F: Float> {
    pub masses: Vec<Mass<F>>,
    pub anchors: Vec<Anchor<F>>,
    pub ropes: Vec<Rope<F>>,
}

impl<F: Float> RopeSystem<F> {
    pub fn new() -> Self {
        RopeSystem {
            masses: Vec::new(),
            anchors: Vec::new(),
            ropes: Vec::new(),
        }
    }

    /// Add a mass and return its endpoint. Fails if the mass is not positive.
    pub fn add_mass(&mut self, mass: Mass<F>) -> Result<Endpoint, SimError> {
        let idx = self.masses.len();
        check_mass(idx, &mass)?;
        self.masses.push(mass);
        Ok(Endpoint::Mass(idx))
    }

    pub fn add_anchor(&mut self, anchor: Anchor<F>) -> Endpoint {
        let idx = self.anchors.len();
        self.anchors.push(anchor);
        Endpoint::Anchor(idx)
    }

    /// Add a rope between two existing endpoints and return its index.
    pub fn add_rope(&mut self, rope: Rope<F>) -> Result<usize, SimError> {
        let idx = self.ropes.len();
        self.check_rope(idx, &rope)?;
        self.ropes.push(rope);
        Ok(idx)
    }

    /// Re-check every entity. Public fields may have been edited since they
    /// were added.
    pub fn validate(&self) -> Result<(), SimError> {
        for (i, m) in self.masses.iter().enumerate() {
            check_mass(i, m)?;
        }
        for (i, r) in self.ropes.iter().enumerate() {
            self.check_rope(i, r)?;
        }
        ftlog::debug!(
            "Validated {} masses, {} anchors and {} ropes",
            self.masses.len(),
            self.anchors.len(),
            self.ropes.len()
        );
        Ok(())
    }

    /// Current position of an endpoint, or `None` if it does not resolve.
    pub fn position(&self, endpoint: Endpoint) -> Option<Vec2<F>> {
        endpoint_pos(&self.masses, &self.anchors, endpoint)
    }

    fn check_rope(&self, idx: usize, rope: &Rope<F>) -> Result<(), SimError> {
        for endpoint in [rope.start, rope.end] {
            if self.position(endpoint).is_none() {
                return Err(SimError::DanglingEndpoint { rope: idx, endpoint });
            }
        }
        if !rope.length.is_finite() || rope.length < F::zero() {
            return Err(SimError::InvalidRopeLength { rope: idx });
        }
        if !rope.spring.is_positive_finite() {
            return Err(SimError::InvalidSpring { rope: idx });
        }
        Ok(())
    }

    /// Advance every mass by one explicit Euler step of `dt` seconds.
    ///
    /// Assumes the system has been validated; endpoints that do not resolve
    /// are skipped rather than reported.
    pub fn step<O: StepObserver<F>>(&mut self, dt: F, config: &SimConfig<F>, observer: &mut O) {
        for m in self.masses.iter_mut() {
            m.reset_force(config.gravity);
        }
        observer.on_forces_reset(&self.masses);

        for (i, rope) in self.ropes.iter_mut().enumerate() {
            let (start, end) = match (
                endpoint_pos(&self.masses, &self.anchors, rope.start),
                endpoint_pos(&self.masses, &self.anchors, rope.end),
            ) {
                (Some(s), Some(e)) => (s, e),
                _ => continue,
            };
            let force = rope.compute_force(start, end);
            let applied = config.force_gate.admits(force, rope.current_tension());
            observer.on_rope_force(i, force, applied);
            if !applied {
                continue;
            }

            if let Some(m) = endpoint_mass(&mut self.masses, rope.start) {
                m.apply_force(force);
                if config.damping_enabled {
                    m.apply_damping(config.damping_constant, dt);
                }
            }
            if let Some(m) = endpoint_mass(&mut self.masses, rope.end) {
                m.apply_force(-force);
                if config.damping_enabled {
                    m.apply_damping(config.damping_constant, dt);
                }
            }
        }

        for m in self.masses.iter_mut() {
            m.integrate(dt);
        }
    }

    /// Positions of every mass and the ends and tension of every rope, in
    /// insertion order.
    pub fn snapshot(&self) -> Snapshot<F> {
        let masses = self
            .masses
            .iter()
            .map(|m| {
                let (name, x, y) = m.snapshot();
                MassSnapshot { name, x, y }
            })
            .collect();
        let ropes = self
            .ropes
            .iter()
            .map(|r| {
                let start = self.position(r.start).unwrap_or_default();
                let end = self.position(r.end).unwrap_or_default();
                RopeSnapshot {
                    start_x: start.x,
                    start_y: start.y,
                    end_x: end.x,
                    end_y: end.y,
                    tension: r.current_tension(),
                }
            })
            .collect();
        Snapshot { masses, ropes }
    }

    pub fn mass_count(&self) -> usize { self.masses.len() }
    pub fn anchor_count(&self) -> usize { self.anchors.len() }
    pub fn rope_count(&self) -> usize { self.ropes.len() }
    pub fn mass(&self, index: usize) -> &Mass<F> { &self.masses[index] }
    pub fn mass_mut(&mut self, index: usize) -> &mut Mass<F> { &mut self.masses[index] }
    pub fn rope(&self, index: usize) -> &Rope<F> { &self.ropes[index] }
}

fn check_mass<F: Float>(idx: usize, mass: &Mass<F>) -> Result<(), SimError> {
    if mass.mass.is_positive_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidMass { mass: idx })
    }
}

fn endpoint_pos<F: Float>(masses: &[Mass<F>], anchors: &[Anchor<F>], endpoint: Endpoint) -> Option<Vec2<F>> {
    match endpoint {
        Endpoint::Mass(i) => masses.get(i).map(|m| m.pos),
        Endpoint::Anchor(i) => anchors.get(i).map(|a| a.pos),
    }
}

// Anchors take no force.
fn endpoint_mass<F: Float>(masses: &mut [Mass<F>], endpoint: Endpoint) -> Option<&mut Mass<F>> {
    masses.get_mut(endpoint.mass_index()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;

    #[test]
    fn rejects_zero_mass() {
        let mut sys: RopeSystem<f64> = RopeSystem::new();
        let err = sys.add_mass(Mass::new("m", 0.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(err, SimError::InvalidMass { mass: 0 });
        assert_eq!(sys.mass_count(), 0);
    }

    #[test]
    fn rejects_dangling_endpoint() {
        let mut sys: RopeSystem<f64> = RopeSystem::new();
        let m = sys.add_mass(Mass::new("m", 0.0, 0.0, 1.0)).unwrap();
        let err = sys.add_rope(Rope::new(m, Endpoint::Anchor(3), 1.0, 10.0)).unwrap_err();
        assert_eq!(err, SimError::DanglingEndpoint { rope: 0, endpoint: Endpoint::Anchor(3) });
    }

    #[test]
    fn rejects_bad_rope_constants() {
        let mut sys: RopeSystem<f64> = RopeSystem::new();
        let m = sys.add_mass(Mass::new("m", 0.0, 0.0, 1.0)).unwrap();
        let a = sys.add_anchor(Anchor::new("a", 0.0, 1.0));
        assert_eq!(
            sys.add_rope(Rope::new(m, a, -1.0, 10.0)),
            Err(SimError::InvalidRopeLength { rope: 0 })
        );
        assert_eq!(
            sys.add_rope(Rope::new(m, a, 1.0, 0.0)),
            Err(SimError::InvalidSpring { rope: 0 })
        );
        assert_eq!(sys.add_rope(Rope::new(m, a, 0.0, 10.0)), Ok(0));
    }

    #[test]
    fn validate_catches_later_edits() {
        let mut sys: RopeSystem<f64> = RopeSystem::new();
        sys.add_mass(Mass::new("m", 0.0, 0.0, 1.0)).unwrap();
        sys.mass_mut(0).mass = -1.0;
        assert_eq!(sys.validate(), Err(SimError::InvalidMass { mass: 0 }));
    }

    #[test]
    fn anchor_to_anchor_rope_is_inert() {
        let mut sys: RopeSystem<f64> = RopeSystem::new();
        sys.add_mass(Mass::new("m", 0.0, 0.0, 1.0)).unwrap();
        let a = sys.add_anchor(Anchor::new("a", 0.0, 0.0));
        let b = sys.add_anchor(Anchor::new("b", 10.0, 0.0));
        sys.add_rope(Rope::new(a, b, 1.0, 100.0)).unwrap();

        let config = SimConfig::new().with_gravity(0.0);
        sys.step(0.01, &config, &mut NoOpStepObserver);

        assert_eq!(sys.rope(0).tension, Some(900.0));
        assert_eq!(sys.mass(0).pos, Vec2::new(0.0, 0.0));
        assert_eq!(sys.anchors[1].pos, Vec2::new(10.0, 0.0));
    }
}
