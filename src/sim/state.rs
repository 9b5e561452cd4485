//! Shared game state
//!
//! The counters and flags every handler mutates. Counters are unsigned and
//! every decrement sits behind an `insert_count > 0` guard, so they can
//! never go below zero.

use serde::{Deserialize, Serialize};

/// Credit counters and play flags shared across buttons and particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreditState {
    /// Completed play rounds.
    pub play_count: u32,
    /// Credits currently inserted and not yet consumed or withdrawn.
    pub insert_count: u32,
    /// Credits withdrawn via CREDITS OUT.
    pub remove_count: u32,
    /// Freezes particle integration while set. Aliveness polling continues.
    pub physics_paused: bool,
    /// Derived each tick: true while at least one coin is alive. Never an
    /// independent source of truth.
    pub play_ongoing: bool,
}
