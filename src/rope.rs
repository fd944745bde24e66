//! Tension-only elastic ropes and the per-rope force law.

use crate::float::Float;
use crate::vec::Vec2;

/// One end of a rope: an index into the owning system's masses or anchors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Mass(usize),
    Anchor(usize),
}

impl Endpoint {
    /// Index of the mass this endpoint refers to, if it is one.
    pub fn mass_index(self) -> Option<usize> {
        match self {
            Endpoint::Mass(i) => Some(i),
            Endpoint::Anchor(_) => None,
        }
    }
}

/// A massless rope that pulls its endpoints together once stretched past its
/// natural length and goes slack otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Rope<F: Float> {
    pub start: Endpoint,
    pub end: Endpoint,
    /// Natural (unstretched) length, m.
    pub length: F,
    /// N per metre of over-length.
    pub spring: F,
    /// Tension from the latest force computation, `None` until the first one.
    pub tension: Option<F>,
}

impl<F: Float> Rope<F> {
    pub fn new(start: Endpoint, end: Endpoint, length: F, spring: F) -> Self {
        Rope { start, end, length, spring, tension: None }
    }

    /// Linear spring beyond the natural length, zero at or below it.
    pub fn tension_at(&self, distance: F) -> F {
        if distance <= self.length {
            F::zero()
        } else {
            self.spring * (distance - self.length)
        }
    }

    /// Compute and store the tension for the given endpoint positions and
    /// return the force on `start`. The force on `end` is its negation.
    ///
    /// Coincident endpoints have no pull direction and yield zero tension
    /// and zero force.
    pub fn compute_force(&mut self, start: Vec2<F>, end: Vec2<F>) -> Vec2<F> {
        let d = start - end;
        let distance = d.length();
        if distance == F::zero() {
            self.tension = Some(F::zero());
            return Vec2::zero();
        }

        let tension = self.tension_at(distance);
        self.tension = Some(tension);

        // Negative: the rope pulls start toward end.
        Vec2::new(
            -d.x / distance * tension,
            -d.y / distance * tension,
        )
    }

    /// Tension for reporting; an uncomputed rope reads as slack.
    pub fn current_tension(&self) -> F {
        self.tension.unwrap_or_else(F::zero)
    }
}

/// Spring constant of a rope rated to carry `force` newtons at a fractional
/// `stretch` (0.05 for 5 %). The result is the force per 100 % stretch.
pub fn spring_from_stretch<F: Float>(force: F, stretch: F) -> F {
    force / stretch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rope(length: f64, spring: f64) -> Rope<f64> {
        Rope::new(Endpoint::Mass(0), Endpoint::Anchor(0), length, spring)
    }

    #[test]
    fn tension_unset_before_first_computation() {
        let r = rope(1.0, 10.0);
        assert_eq!(r.tension, None);
        assert_eq!(r.current_tension(), 0.0);
    }

    #[test]
    fn slack_rope_exerts_nothing() {
        let mut r = rope(5.0, 100.0);
        let f = r.compute_force(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        assert_eq!(r.tension, Some(0.0));
        assert!(f.is_zero());
    }

    #[test]
    fn stretched_rope_pulls_start_toward_end() {
        let mut r = rope(4.0, 100.0);
        let f = r.compute_force(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        assert_eq!(r.tension, Some(100.0));
        assert!((f.x - 60.0).abs() < 1e-9);
        assert!((f.y - 80.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_endpoints_are_inert() {
        let mut r = rope(0.0, 100.0);
        let f = r.compute_force(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
        assert_eq!(r.tension, Some(0.0));
        assert!(f.is_zero());
    }

    #[test]
    fn rated_stretch_to_spring_constant() {
        assert!((spring_from_stretch(1500.0f64, 0.05) - 30_000.0).abs() < 1e-9);
    }
}
