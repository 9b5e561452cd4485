//! Game configuration
//!
//! Window layout, fixed frame rate and swarm size. Defaults reproduce the
//! shipped cabinet layout; `load()` is the stubbed persisted-state path
//! and always starts fresh.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window title.
    pub window_title: String,
    /// Window size in pixels; also the coin spawn bounds.
    pub window_size: Vec2,
    /// Fixed update rate in frames per second.
    pub frame_rate: u32,
    /// Coins generated per session.
    pub coin_count: usize,
    /// Master volume (0.0 - 1.0), handed to the audio layer.
    pub master_volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "A Casino Game".to_owned(),
            window_size: Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            frame_rate: FRAME_RATE,
            coin_count: COIN_COUNT,
            master_volume: 0.8,
        }
    }
}

impl GameConfig {
    /// Load the session configuration. Persisted state is not implemented;
    /// every session starts from defaults.
    pub fn load() -> Self {
        log::info!("no persisted state, starting fresh");
        Self::default()
    }

    /// Fixed timestep derived from the frame rate.
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate as f32
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cabinet_layout() {
        let config = GameConfig::default();
        assert_eq!(config.window_size, Vec2::new(800.0, 600.0));
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.coin_count, 50);
        assert!((config.master_volume - 0.8).abs() < 1e-6);
        assert!((config.frame_dt() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = GameConfig::default();
        config.coin_count = 12;

        let json = config.to_json().expect("serialize");
        let back = GameConfig::from_json(&json).expect("parse");
        assert_eq!(back, config);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(GameConfig::from_json("{not json").is_err());
    }
}
