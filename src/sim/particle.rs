//! Coin particle lifecycle and physics
//!
//! Each coin is an independently animated point entity: dead until
//! `birth()`, invisible until its birth delay elapses, then integrated
//! with semi-implicit Euler until its bound death condition fires.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::registry::Peers;
use super::rng::SpawnRng;
use super::state::CreditState;
use crate::audio::{AudioSink, SoundCue};
use crate::consts::*;
use crate::view::{ButtonView, Drawable, RenderSurface, TextView};

/// Instantaneous physical state of a coin. Value type, copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

/// Visual half of a coin: where it draws and whether it draws at all.
///
/// Kept as a plain component next to the physics rather than inherited
/// from it; the coin forwards position updates here at the end of each
/// physics tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinVisual {
    pub position: Vec2,
    pub visible: bool,
    /// Packed 0xRRGGBB tint.
    pub color: u32,
}

impl Default for CoinVisual {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            visible: false,
            color: 0xFF_FF_FF,
        }
    }
}

impl CoinVisual {
    /// Random tint with every channel in [20, 255].
    pub fn randomize_color(&mut self, rng: &mut SpawnRng) {
        let channel = |rng: &mut SpawnRng| rng.sample(20.0, 255.0) as u32;
        let (r, g, b) = (channel(rng), channel(rng), channel(rng));
        self.color = (r << 16) | (g << 8) | b;
    }
}

impl Drawable for CoinVisual {
    fn draw_to(&self, surface: &mut dyn RenderSurface) {
        if self.visible {
            surface.draw_sprite(self.position, self.color);
        }
    }
}

/// Collaborators threaded through a physics tick.
///
/// Every field is optional: a missing collaborator skips only the effect
/// that needed it, never the rest of the tick.
pub struct TickContext<'a> {
    pub audio: Option<&'a mut dyn AudioSink>,
    pub state: Option<&'a mut CreditState>,
    pub play_count_text: Option<&'a mut dyn TextView>,
    pub start_button: Option<&'a mut dyn ButtonView>,
}

impl<'a> TickContext<'a> {
    /// A context with no collaborators attached. Physics still runs; every
    /// side effect is skipped.
    pub fn detached() -> TickContext<'a> {
        TickContext {
            audio: None,
            state: None,
            play_count_text: None,
            start_button: None,
        }
    }
}

/// Death-condition predicate bound to a coin: decides each tick whether
/// the coin should die, and may carry round-completion side effects.
///
/// An unbound coin never dies on its own. Rebinding replaces the previous
/// condition.
pub type DeathCondition = fn(&Particle, &Peers<'_>, &mut TickContext<'_>) -> bool;

/// A coin particle: physics, lifecycle, and the hooks fired around it.
#[derive(Debug, Clone)]
pub struct Particle {
    kin: Kinematics,
    reset_kin: Kinematics,
    alive: bool,
    /// Delay in seconds before the coin becomes visible and starts moving.
    time_of_birth: f32,
    /// Elapsed since the last `birth()`. Advances only while alive.
    time_alive: f32,
    birth_cue_played: bool,
    birth_cue: Option<SoundCue>,
    birth_cue_enabled: bool,
    death_cue: Option<SoundCue>,
    death_cue_enabled: bool,
    death_condition: Option<DeathCondition>,
    visual: CoinVisual,
}

impl Default for Particle {
    fn default() -> Self {
        Self::new()
    }
}

impl Particle {
    /// A dead coin at the origin with no cues and no death condition.
    pub fn new() -> Self {
        Self {
            kin: Kinematics::default(),
            reset_kin: Kinematics::default(),
            alive: false,
            time_of_birth: 0.0,
            time_alive: 0.0,
            birth_cue_played: false,
            birth_cue: None,
            birth_cue_enabled: false,
            death_cue: None,
            death_cue_enabled: false,
            death_condition: None,
            visual: CoinVisual::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_visible(&self) -> bool {
        self.visual.visible
    }

    pub fn kinematics(&self) -> Kinematics {
        self.kin
    }

    pub fn reset_kinematics(&self) -> Kinematics {
        self.reset_kin
    }

    pub fn time_alive(&self) -> f32 {
        self.time_alive
    }

    pub fn time_of_birth(&self) -> f32 {
        self.time_of_birth
    }

    pub fn visual(&self) -> &CoinVisual {
        &self.visual
    }

    pub fn visual_mut(&mut self) -> &mut CoinVisual {
        &mut self.visual
    }

    /// Set current and reset state together, for explicit (non-random)
    /// births.
    pub fn set_birth_state(&mut self, kin: Kinematics, time_of_birth: f32) {
        self.kin = kin;
        self.time_of_birth = time_of_birth;
        self.reset_kin = kin;
    }

    /// Replace only the baseline the next `reset_to_birth_state` returns to.
    pub fn set_reset_state(&mut self, kin: Kinematics) {
        self.reset_kin = kin;
    }

    /// Randomized left-edge launch within `bounds` (window size):
    /// spawn at x = 0 with y in the middle band of the window, a rightward
    /// launch velocity, and a constant deceleration that eventually pulls
    /// the coin back past x = 0. Stored as both current and reset state.
    pub fn set_random_birth_state(&mut self, rng: &mut SpawnRng, bounds: Vec2) {
        let kin = Kinematics {
            position: Vec2::new(0.0, rng.sample(SPAWN_BAND_MIN * bounds.y, SPAWN_BAND_MAX * bounds.y)),
            velocity: Vec2::new(rng.sample(LAUNCH_SPEED_MIN, LAUNCH_SPEED_MAX), 0.0),
            acceleration: Vec2::new(-rng.sample(LAUNCH_DECEL_MIN, LAUNCH_DECEL_MAX), 0.0),
        };
        self.kin = kin;
        self.reset_kin = kin;
        self.time_of_birth = rng.sample(0.0, BIRTH_DELAY_MAX);
    }

    /// Copy the reset baseline back into the current state. Must precede a
    /// re-`birth()` or the coin resumes mid-flight.
    pub fn reset_to_birth_state(&mut self) {
        self.kin = self.reset_kin;
    }

    /// Transition Dead -> Alive. Resets the lifetime clock and the birth
    /// cue latch before raising the alive flag, so no physics tick can
    /// observe alive with a stale elapsed time.
    pub fn birth(&mut self) {
        self.time_alive = 0.0;
        self.birth_cue_played = false;
        self.alive = true;
    }

    /// Transition Alive -> Dead. The alive flag drops first, then
    /// visibility, then the death cue fires, so aliveness queries from
    /// inside the side effect see the updated state.
    pub fn death(&mut self, audio: Option<&mut (dyn AudioSink + '_)>) {
        self.alive = false;
        self.visual.visible = false;

        if self.death_cue_enabled {
            if let (Some(cue), Some(audio)) = (self.death_cue, audio) {
                audio.play(cue);
            }
        }
    }

    /// Bind the death-condition predicate, replacing any previous one.
    pub fn set_death_condition(&mut self, condition: DeathCondition) {
        self.death_condition = Some(condition);
    }

    /// Set and enable the cue fired once per birth, when the coin first
    /// becomes visible.
    pub fn set_birth_cue(&mut self, cue: SoundCue) {
        self.birth_cue = Some(cue);
        self.birth_cue_enabled = true;
    }

    pub fn enable_birth_cue(&mut self, enable: bool) {
        self.birth_cue_enabled = enable;
    }

    /// Set and enable the cue fired on death.
    pub fn set_death_cue(&mut self, cue: SoundCue) {
        self.death_cue = Some(cue);
        self.death_cue_enabled = true;
    }

    pub fn enable_death_cue(&mut self, enable: bool) {
        self.death_cue_enabled = enable;
    }

    /// Advance the coin by `dt` seconds. No-op while dead.
    ///
    /// The lifetime clock always advances; motion and visibility wait for
    /// the birth delay. Velocity integrates before position. The death
    /// condition is evaluated every live tick, birth delay or not, and the
    /// visual position is synced last.
    pub fn update_physics(&mut self, dt: f32, peers: &Peers<'_>, ctx: &mut TickContext<'_>) {
        if !self.alive {
            return;
        }

        self.time_alive += dt;

        if self.time_alive >= self.time_of_birth {
            self.visual.visible = true;
            self.kin.velocity += dt * self.kin.acceleration;
            self.kin.position += dt * self.kin.velocity;

            // birth cue, once per birth
            if !self.birth_cue_played && self.birth_cue_enabled {
                if let Some(cue) = self.birth_cue {
                    self.birth_cue_played = true;
                    if let Some(audio) = ctx.audio.as_deref_mut() {
                        audio.play(cue);
                    }
                }
            }
        }

        if let Some(condition) = self.death_condition {
            if condition(self, peers, ctx) {
                self.death(ctx.audio.as_deref_mut());
            }
        }

        self.visual.position = self.kin.position;
    }
}

impl Drawable for Particle {
    fn draw_to(&self, surface: &mut dyn RenderSurface) {
        self.visual.draw_to(surface);
    }
}
