//! Coin Jump entry point
//!
//! Headless demo driver: runs the same update-then-poll loop a real window
//! would, fed from a scripted event tape instead of a live cursor. Inserts
//! a few credits, starts a round, pauses and resumes it, and lets the
//! swarm play out until the round completes.

use glam::Vec2;

use coin_jump::audio::LoggingAudio;
use coin_jump::consts::*;
use coin_jump::platform::{EventSource, ScriptedEvents, WindowEvent};
use coin_jump::sim::SpawnRng;
use coin_jump::view::Label;
use coin_jump::{CasinoGame, GameConfig, GameViews};

/// Session length guard; one round finishes in well under a minute.
const MAX_TICKS: u64 = 60 * 60;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load();
    log::info!("'{}' has started", config.window_title);

    let game_views = views(config.window_size);
    let mut game = CasinoGame::new(
        &config,
        game_views,
        Box::new(LoggingAudio),
        SpawnRng::seeded_from_clock(),
    );

    let start = game.start_button().center();
    let credits_in = game.credits_in_button().center();
    let credits_out = game.credits_out_button().center();

    // (tick, event) tape: three credits in, one out, start, pause, resume
    let script: Vec<(u64, WindowEvent)> = vec![
        (5, WindowEvent::MouseMoved(credits_in)),
        (10, WindowEvent::MousePressed(credits_in)),
        (12, WindowEvent::MousePressed(credits_in)),
        (14, WindowEvent::MousePressed(credits_in)),
        (20, WindowEvent::MousePressed(credits_out)),
        (30, WindowEvent::MousePressed(start)),
        (120, WindowEvent::MousePressed(start)),
        (180, WindowEvent::MousePressed(start)),
    ];
    let script_end = script.iter().map(|(tick, _)| *tick).max().unwrap_or(0);

    let mut events = ScriptedEvents::new();
    let dt = config.frame_dt();
    let mut tick: u64 = 0;

    while game.is_open() && tick < MAX_TICKS {
        game.update(dt);

        for (due, evnt) in &script {
            if *due == tick {
                events.push(*evnt);
            }
        }
        // the round is over once every coin has fallen back out
        if tick > script_end && !game.credit_state().play_ongoing {
            events.push(WindowEvent::Closed);
        }

        while let Some(evnt) = events.poll_event() {
            game.on_window_event(&evnt);
        }

        tick += 1;
    }

    let state = game.credit_state();
    log::info!(
        "session over after {tick} ticks: {} plays, {} credits in, {} credits out",
        state.play_count,
        state.insert_count,
        state.remove_count
    );
    log::info!("'{}' has quit gracefully", config.window_title);
}

fn views(win_size: Vec2) -> GameViews {
    let size = Vec2::new(100.0, 40.0);
    let row = 85.0;
    let spacing = BUTTON_WIDTH + BUTTON_GAP;
    GameViews {
        play_count: Box::new(Label::new("0", Vec2::new(win_size.x / 2.0 - spacing, row), size)),
        credits_inserted: Box::new(Label::new("0", Vec2::new(win_size.x / 2.0, row), size)),
        credits_removed: Box::new(Label::new(
            "0",
            Vec2::new(win_size.x / 2.0 + spacing, row),
            size,
        )),
    }
}
