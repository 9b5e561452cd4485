//! Audio interface
//!
//! Sound playback is owned by the platform layer outside this crate; the
//! game core only triggers cues. Loading failures are that layer's problem
//! and surface at construction time, never from the trigger path.

/// The game's sound cue vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Looping background music started once at game init.
    MainLoop,
    /// A coin becoming visible and launching.
    CoinJumpIn,
    /// A coin falling out past the edge.
    CoinJumpOut,
    /// Cursor entering a button.
    ButtonHover,
    /// Button press.
    ButtonClick,
}

/// Sound-trigger capability implemented by the excluded audio layer.
pub trait AudioSink {
    /// Play the cue from the start.
    fn play(&mut self, cue: SoundCue);
    /// (Re)start the cue only if it is not currently playing.
    fn uninterrupted_play(&mut self, cue: SoundCue);
    /// Start the cue looping until the session ends.
    fn play_looping(&mut self, cue: SoundCue);
}

/// Discards every cue. Useful for tests and headless runs.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
    fn uninterrupted_play(&mut self, _cue: SoundCue) {}
    fn play_looping(&mut self, _cue: SoundCue) {}
}

/// Logs every cue instead of playing it.
#[derive(Debug, Default)]
pub struct LoggingAudio;

impl AudioSink for LoggingAudio {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("audio cue: {cue:?}");
    }

    fn uninterrupted_play(&mut self, cue: SoundCue) {
        log::debug!("audio cue (uninterrupted): {cue:?}");
    }

    fn play_looping(&mut self, cue: SoundCue) {
        log::debug!("audio cue (looping): {cue:?}");
    }
}
