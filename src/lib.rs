//! Point masses on elastic, tension-only ropes.
//!
//! `ropefall` approximates falls onto anchored ropes (lead falls, tyrolean
//! traverses) by treating climbers as point masses and ropes as massless
//! springs that only pull. A run advances the system with fixed-step explicit
//! Euler integration and records a [`Snapshot`] of every mass position and
//! rope tension after each step, ready for rendering or analysis.
//!
//! # Features
//!
//! - **Tension-only ropes**: linear spring beyond the natural length, slack below
//! - **Anchors and masses**: either can sit at either end of a rope
//! - **Deterministic**: `libm` math, one fixed step, no hidden state
//! - **Observable**: inspect each force pass via the `StepObserver` trait
//! - **Serializable output**: snapshots derive `serde` traits
//!
//! # Example
//! ```
//! use ropefall::{scenario, simulate, NoOpStepObserver, Settings, SimConfig};
//!
//! let mut system = scenario::fall_from_anchor().unwrap();
//! let settings = Settings::new(1.0, 0.005).unwrap();
//! let recording = simulate(&settings, &SimConfig::new(), &mut system, &mut NoOpStepObserver).unwrap();
//! assert_eq!(recording.len(), 200);
//! ```

pub mod float;
pub mod vec;
pub mod body;
pub mod rope;
pub mod system;
pub mod simulation;
pub mod snapshot;
pub mod scenario;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use body::{Anchor, Mass};
pub use rope::{spring_from_stretch, Endpoint, Rope};
pub use system::RopeSystem;
pub use simulation::simulate;
pub use snapshot::{MassSnapshot, Recording, RopeSnapshot, Snapshot};
pub use config::{ForceGate, Settings, SimConfig};
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::SimError;
