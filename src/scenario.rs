//! Ready-made falls onto anchored ropes.
//!
//! Both presets use a dynamic climbing rope rated at 1500 N for 5 % stretch
//! and an 80 kg climber.

use crate::body::{Anchor, Mass};
use crate::error::SimError;
use crate::rope::{spring_from_stretch, Rope};
use crate::system::RopeSystem;

const CLIMBER_MASS: f64 = 80.0;
const ROPE_RATED_FORCE: f64 = 1500.0;
const ROPE_RATED_STRETCH: f64 = 0.05;

/// Spring constant shared by the presets, N per 100 % stretch.
pub fn climbing_rope_spring() -> f64 {
    spring_from_stretch(ROPE_RATED_FORCE, ROPE_RATED_STRETCH)
}

/// A climber hanging between two belays on a tyrolean traverse slips off.
pub fn fall_during_tyrolean() -> Result<RopeSystem<f64>, SimError> {
    let mut system = RopeSystem::new();
    let person = system.add_mass(Mass::new("person", 10.0, 8.0, CLIMBER_MASS))?;
    let left = system.add_anchor(Anchor::new("belay", 5.0, 8.5));
    let right = system.add_anchor(Anchor::new("belay", 15.0, 8.0));

    system.add_rope(Rope::new(person, left, 5.5, climbing_rope_spring()))?;
    system.add_rope(Rope::new(person, right, 5.5, climbing_rope_spring()))?;
    Ok(system)
}

/// A climber falls from level with the anchor on 6 m of rope.
pub fn fall_from_anchor() -> Result<RopeSystem<f64>, SimError> {
    let mut system = RopeSystem::new();
    let person = system.add_mass(Mass::new("person", 10.0, 8.0, CLIMBER_MASS))?;
    let belay = system.add_anchor(Anchor::new("belay", 10.0, 8.0));

    system.add_rope(Rope::new(person, belay, 6.0, climbing_rope_spring()))?;
    Ok(system)
}
