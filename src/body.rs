//! Point bodies: free masses and fixed anchors.

use crate::float::Float;
use crate::vec::Vec2;

/// A fixed attachment point. Anchors carry no velocity or mass and are never
/// moved by the integrator.
#[derive(Clone, Debug, PartialEq)]
pub struct Anchor<F: Float> {
    pub name: String,
    pub pos: Vec2<F>,
}

impl<F: Float> Anchor<F> {
    pub fn new(name: impl Into<String>, x: F, y: F) -> Self {
        Anchor { name: name.into(), pos: Vec2::new(x, y) }
    }
}

/// A point mass moved by gravity and rope tension.
///
/// `force` is per-step scratch space: the integrator overwrites it with the
/// weight of the mass at the start of every step before ropes add to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Mass<F: Float> {
    pub name: String,
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    /// kg, must be positive.
    pub mass: F,
    pub force: Vec2<F>,
}

impl<F: Float> Mass<F> {
    /// A mass at rest at `(x, y)`.
    pub fn new(name: impl Into<String>, x: F, y: F, mass: F) -> Self {
        Mass {
            name: name.into(),
            pos: Vec2::new(x, y),
            vel: Vec2::zero(),
            mass,
            force: Vec2::zero(),
        }
    }

    pub fn with_velocity(mut self, vx: F, vy: F) -> Self {
        self.vel = Vec2::new(vx, vy);
        self
    }

    /// Zero the accumulator and load the weight of the mass.
    pub fn reset_force(&mut self, gravity: F) {
        self.force = Vec2::new(F::zero(), -gravity * self.mass);
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.force += force;
    }

    /// Velocity-proportional drag, scaled by the step like the rest of the
    /// accumulated force.
    pub fn apply_damping(&mut self, constant: F, dt: F) {
        self.force.x = self.force.x - (constant * self.vel.x / self.mass) * dt;
        self.force.y = self.force.y - (constant * self.vel.y / self.mass) * dt;
    }

    /// Forward Euler on velocity, then position from the updated velocity.
    pub fn integrate(&mut self, dt: F) {
        self.vel.x = self.vel.x + (self.force.x / self.mass) * dt;
        self.vel.y = self.vel.y + (self.force.y / self.mass) * dt;
        self.pos.x = self.pos.x + dt * self.vel.x;
        self.pos.y = self.pos.y + dt * self.vel.y;
    }

    /// `(name, x, y)` as recorded in a snapshot.
    pub fn snapshot(&self) -> (String, F, F) {
        (self.name.clone(), self.pos.x, self.pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_discards_previous_force() {
        let mut m = Mass::new("person", 0.0f64, 0.0, 80.0);
        m.apply_force(Vec2::new(500.0, 900.0));
        m.reset_force(9.8);
        assert_eq!(m.force.x, 0.0);
        assert_eq!(m.force.y, -9.8 * 80.0);
    }

    #[test]
    fn damping_opposes_velocity() {
        let mut m = Mass::new("person", 0.0f64, 0.0, 2.0).with_velocity(1.0, -3.0);
        m.apply_damping(10.0, 0.1);
        assert!((m.force.x - -0.5).abs() < 1e-12);
        assert!((m.force.y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn integrate_uses_updated_velocity() {
        let mut m = Mass::new("m", 0.0f64, 0.0, 1.0);
        m.force = Vec2::new(2.0, 0.0);
        m.integrate(0.5);
        assert_eq!(m.vel.x, 1.0);
        assert_eq!(m.pos.x, 0.5);
    }
}
