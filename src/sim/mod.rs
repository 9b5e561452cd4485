//! Deterministic simulation module
//!
//! The particle core lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (clock-derived seed enters exactly once, at startup)
//! - Insertion-order iteration, never relied on for correctness
//! - No rendering or platform backends; collaborators enter through the
//!   capability traits in `view` and `audio`

pub mod particle;
pub mod registry;
pub mod rng;
pub mod state;

pub use particle::{CoinVisual, DeathCondition, Kinematics, Particle, TickContext};
pub use registry::{Entry, ParticleRegistry, Peers};
pub use rng::SpawnRng;
pub use state::CreditState;
