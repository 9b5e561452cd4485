//! Named coin collection
//!
//! Holds every coin in insertion order and drives their physics each tick.
//! Death conditions see the rest of the swarm through [`Peers`], a view
//! that excludes the coin being evaluated, so nothing here depends on
//! iteration order for correctness.

use crate::view::{Drawable, RenderSurface};

use super::particle::{Particle, TickContext};

/// A coin plus the name it was registered under.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub coin: Particle,
}

/// Read-only view over every coin except the one currently updating.
pub struct Peers<'a> {
    before: &'a [Entry],
    after: &'a [Entry],
}

impl Peers<'_> {
    /// View with no peers at all, for coins updated outside a registry.
    pub fn empty() -> Peers<'static> {
        Peers {
            before: &[],
            after: &[],
        }
    }

    /// True when every other coin is dead. Derived fresh on each call,
    /// never cached.
    pub fn all_dead(&self) -> bool {
        self.before
            .iter()
            .chain(self.after.iter())
            .all(|entry| !entry.coin.is_alive())
    }
}

/// Insertion-ordered, named collection of coins.
#[derive(Debug, Clone, Default)]
pub struct ParticleRegistry {
    entries: Vec<Entry>,
}

impl ParticleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, coin: Particle) {
        self.entries.push(Entry {
            name: name.into(),
            coin,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Particle> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.coin)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Particle> {
        self.entries
            .iter_mut()
            .find(|entry| entry.name == name)
            .map(|entry| &mut entry.coin)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Advance every coin by `dt`, handing each one a [`Peers`] view over
    /// the rest of the swarm for its death condition.
    pub fn update_physics(&mut self, dt: f32, ctx: &mut TickContext<'_>) {
        for i in 0..self.entries.len() {
            let (left, rest) = self.entries.split_at_mut(i);
            let Some((entry, right)) = rest.split_first_mut() else {
                break;
            };
            let peers = Peers {
                before: &*left,
                after: &*right,
            };
            entry.coin.update_physics(dt, &peers, ctx);
        }
    }

    /// True while at least one coin is alive.
    pub fn any_alive(&self) -> bool {
        self.entries.iter().any(|entry| entry.coin.is_alive())
    }

    /// True when every coin other than `excluded` is dead.
    pub fn all_dead_except(&self, excluded: &str) -> bool {
        self.entries
            .iter()
            .filter(|entry| entry.name != excluded)
            .all(|entry| !entry.coin.is_alive())
    }

    /// Rewind every coin to its birth baseline and bring it alive, in that
    /// order per coin.
    pub fn rebirth_all(&mut self) {
        for entry in &mut self.entries {
            entry.coin.reset_to_birth_state();
            entry.coin.birth();
        }
    }
}

impl Drawable for ParticleRegistry {
    fn draw_to(&self, surface: &mut dyn RenderSurface) {
        for entry in &self.entries {
            entry.coin.draw_to(surface);
        }
    }
}
