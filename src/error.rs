//! Error types for simulation setup.

use crate::rope::Endpoint;
use core::fmt;

/// Configuration errors. All of them are reported before the first step runs;
/// a run that starts always completes.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Mass must be positive and finite.
    InvalidMass { mass: usize },
    /// Timestep must be positive and finite.
    InvalidTimestep,
    /// Duration must be positive and finite.
    InvalidDuration,
    /// Duration over timestep does not fit in a step counter.
    TooManySteps,
    /// Rope natural length must be non-negative and finite.
    InvalidRopeLength { rope: usize },
    /// Rope spring constant must be positive and finite.
    InvalidSpring { rope: usize },
    /// Damping constant must be non-negative and finite.
    InvalidDamping,
    /// A rope refers to a mass or anchor the system does not hold.
    DanglingEndpoint { rope: usize, endpoint: Endpoint },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidMass { mass } => {
                write!(f, "mass {} must be positive and finite", mass)
            }
            SimError::InvalidTimestep => write!(f, "timestep must be positive and finite"),
            SimError::InvalidDuration => write!(f, "duration must be positive and finite"),
            SimError::TooManySteps => write!(f, "duration / timestep is too many steps to count"),
            SimError::InvalidRopeLength { rope } => {
                write!(f, "rope {} length must be non-negative and finite", rope)
            }
            SimError::InvalidSpring { rope } => {
                write!(f, "rope {} spring constant must be positive and finite", rope)
            }
            SimError::InvalidDamping => write!(f, "damping constant must be non-negative and finite"),
            SimError::DanglingEndpoint { rope, endpoint } => {
                write!(f, "rope {} refers to missing endpoint {:?}", rope, endpoint)
            }
        }
    }
}

impl std::error::Error for SimError {}
