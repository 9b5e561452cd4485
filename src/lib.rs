//! Coin Jump - a casino-style coin jump game
//!
//! Core modules:
//! - `sim`: Deterministic particle simulation (lifecycle, physics, state)
//! - `game`: Orchestration and the button/death-condition handlers
//! - `ui`: Clickable buttons with rebindable commands
//! - `view` / `audio` / `platform`: capability traits for the excluded
//!   rendering, sound and window layers
//! - `settings`: Session configuration (stubbed persistence)

pub mod audio;
pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;
pub mod view;

pub use game::{CasinoGame, GameViews};
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one physics step per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Fixed update rate
    pub const FRAME_RATE: u32 = 60;

    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Coins generated per session
    pub const COIN_COUNT: usize = 50;

    /// Coins spawn with y inside this band of the window height
    pub const SPAWN_BAND_MIN: f32 = 0.2;
    pub const SPAWN_BAND_MAX: f32 = 0.8;
    /// Rightward launch speed range (px/s)
    pub const LAUNCH_SPEED_MIN: f32 = 250.0;
    pub const LAUNCH_SPEED_MAX: f32 = 300.0;
    /// Constant pull-back deceleration range (px/s²)
    pub const LAUNCH_DECEL_MIN: f32 = 80.0;
    pub const LAUNCH_DECEL_MAX: f32 = 150.0;
    /// Maximum birth delay (seconds)
    pub const BIRTH_DELAY_MAX: f32 = 2.0;

    /// Button layout
    pub const BUTTON_WIDTH: f32 = 150.0;
    pub const BUTTON_HEIGHT: f32 = 50.0;
    /// Gap between neighbouring buttons
    pub const BUTTON_GAP: f32 = 20.0;
    /// Button row distance from the bottom window edge
    pub const BUTTON_ROW_MARGIN: f32 = 37.0;
}
