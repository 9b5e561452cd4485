//! Game orchestration
//!
//! `CasinoGame` owns the whole object graph for one window session: the
//! credit state, the coin swarm, the three buttons, and the injected view
//! and audio collaborators. It wires the bindings at construction, drives
//! the per-tick physics update, and routes window events into button
//! commands. A new window session means a new `CasinoGame`.

pub mod handlers;

use glam::Vec2;

use crate::audio::{AudioSink, SoundCue};
use crate::consts::*;
use crate::platform::WindowEvent;
use crate::settings::GameConfig;
use crate::sim::particle::{Particle, TickContext};
use crate::sim::registry::ParticleRegistry;
use crate::sim::rng::SpawnRng;
use crate::sim::state::CreditState;
use crate::ui::Button;
use crate::view::{Drawable, RenderSurface, TextView};

use handlers::{
    ButtonAction, CreditsInContext, CreditsOutContext, StartContext, coin_death_condition,
    on_credits_in_button, on_credits_out_button, on_start_button,
};

/// The value displays owned by the window layer, injected at construction.
pub struct GameViews {
    pub play_count: Box<dyn TextView>,
    pub credits_inserted: Box<dyn TextView>,
    pub credits_removed: Box<dyn TextView>,
}

/// One window session of the casino game.
pub struct CasinoGame {
    win_size: Vec2,
    state: CreditState,
    coins: ParticleRegistry,
    rng: SpawnRng,
    start_button: Button<ButtonAction>,
    credits_in_button: Button<ButtonAction>,
    credits_out_button: Button<ButtonAction>,
    views: GameViews,
    audio: Box<dyn AudioSink>,
    close_requested: bool,
}

impl CasinoGame {
    /// Build and wire a complete game for one window session. Persisted
    /// state loading is stubbed: every session starts fresh.
    pub fn new(
        config: &GameConfig,
        views: GameViews,
        audio: Box<dyn AudioSink>,
        rng: SpawnRng,
    ) -> Self {
        let win_size = config.window_size;
        let button_size = Vec2::new(BUTTON_WIDTH, BUTTON_HEIGHT);
        let button_y = win_size.y - BUTTON_ROW_MARGIN;
        let spacing = BUTTON_WIDTH + BUTTON_GAP;

        let mut game = Self {
            win_size,
            state: CreditState::default(),
            coins: ParticleRegistry::new(),
            rng,
            start_button: Button::new(
                "START",
                Vec2::new(win_size.x / 2.0 - spacing, button_y),
                button_size,
            ),
            credits_in_button: Button::new(
                "CREDITS IN",
                Vec2::new(win_size.x / 2.0, button_y),
                button_size,
            ),
            credits_out_button: Button::new(
                "CREDITS OUT",
                Vec2::new(win_size.x / 2.0 + spacing, button_y),
                button_size,
            ),
            views,
            audio,
            close_requested: false,
        };
        game.init(config.coin_count);
        game
    }

    fn init(&mut self, coin_count: usize) {
        self.audio.play_looping(SoundCue::MainLoop);

        for i in 0..coin_count {
            let mut coin = Particle::new();
            coin.visual_mut().randomize_color(&mut self.rng);
            coin.set_birth_cue(SoundCue::CoinJumpIn);
            coin.set_death_cue(SoundCue::CoinJumpOut);
            coin.set_random_birth_state(&mut self.rng, self.win_size);
            coin.set_death_condition(coin_death_condition);
            self.coins.add(format!("JumpCoin{i}"), coin);
        }

        self.start_button.bind(ButtonAction::StartPlay);
        self.credits_in_button.bind(ButtonAction::InsertCredit);
        self.credits_out_button.bind(ButtonAction::RemoveCredit);
        for button in [
            &mut self.start_button,
            &mut self.credits_in_button,
            &mut self.credits_out_button,
        ] {
            button.set_hover_cue(SoundCue::ButtonHover);
        }

        log::info!(
            "casino game ready: {} coins, {}x{} window",
            self.coins.len(),
            self.win_size.x,
            self.win_size.y
        );
    }

    /// Advance the simulation one fixed step. Integration freezes while
    /// paused, but `play_ongoing` is re-derived from coin aliveness every
    /// tick regardless.
    pub fn update(&mut self, dt: f32) {
        if !self.state.physics_paused {
            let mut ctx = TickContext {
                audio: Some(self.audio.as_mut()),
                state: Some(&mut self.state),
                play_count_text: Some(self.views.play_count.as_mut()),
                start_button: Some(&mut self.start_button),
            };
            self.coins.update_physics(dt, &mut ctx);
        }

        self.state.play_ongoing = self.coins.any_alive();
    }

    /// Route one window event: close requests latch the close flag, mouse
    /// events feed every button and the resulting command is dispatched.
    pub fn on_window_event(&mut self, evnt: &WindowEvent) {
        if *evnt == WindowEvent::Closed {
            log::info!("window close requested");
            self.close_requested = true;
            return;
        }

        let audio = self.audio.as_mut();
        let mut pressed = None;
        for button in [
            &mut self.start_button,
            &mut self.credits_in_button,
            &mut self.credits_out_button,
        ] {
            if let Some(action) = button.on_window_event(evnt, audio) {
                pressed = Some(action);
            }
        }

        if let Some(action) = pressed {
            self.dispatch(action);
        }
    }

    fn dispatch(&mut self, action: ButtonAction) {
        log::debug!("button action: {action:?}");
        match action {
            ButtonAction::StartPlay => on_start_button(StartContext {
                state: Some(&mut self.state),
                button: Some(&mut self.start_button),
                credits_text: Some(self.views.credits_inserted.as_mut()),
                coins: Some(&mut self.coins),
            }),
            ButtonAction::InsertCredit => on_credits_in_button(CreditsInContext {
                state: Some(&mut self.state),
                credits_text: Some(self.views.credits_inserted.as_mut()),
            }),
            ButtonAction::RemoveCredit => on_credits_out_button(CreditsOutContext {
                state: Some(&mut self.state),
                removed_text: Some(self.views.credits_removed.as_mut()),
                inserted_text: Some(self.views.credits_inserted.as_mut()),
            }),
        }
    }

    /// Draw the session's children in layer order: value displays and
    /// buttons first, coins on top.
    pub fn draw_to(&self, surface: &mut dyn RenderSurface) {
        self.views.play_count.draw_to(surface);
        self.views.credits_inserted.draw_to(surface);
        self.views.credits_removed.draw_to(surface);

        self.start_button.draw_to(surface);
        self.credits_in_button.draw_to(surface);
        self.credits_out_button.draw_to(surface);

        self.coins.draw_to(surface);
    }

    pub fn is_open(&self) -> bool {
        !self.close_requested
    }

    pub fn credit_state(&self) -> &CreditState {
        &self.state
    }

    pub fn coins(&self) -> &ParticleRegistry {
        &self.coins
    }

    pub fn start_button(&self) -> &Button<ButtonAction> {
        &self.start_button
    }

    pub fn credits_in_button(&self) -> &Button<ButtonAction> {
        &self.credits_in_button
    }

    pub fn credits_out_button(&self) -> &Button<ButtonAction> {
        &self.credits_out_button
    }
}
