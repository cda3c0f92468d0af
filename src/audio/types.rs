//! Audio command and event types exchanged with the worker thread.

use std::time::Duration;

/// Commands accepted by the audio thread.
#[derive(Debug)]
pub enum AudioCmd {
    /// Load the track at the given catalog index, paused at the start.
    Load(usize),
    /// Resume the loaded track.
    Play,
    /// Pause the loaded track.
    Pause,
    /// Set the sink volume (`0.0..=1.0`).
    SetVolume(f32),
    /// Stop playback and shut the thread down.
    Quit,
}

/// Notifications emitted by the audio thread.
#[derive(Debug, Clone)]
pub enum AudioEvent {
    /// Periodic elapsed-time report for the loaded track.
    Position { index: usize, elapsed: Duration },
    /// Total duration of the loaded track, when the decoder knows it.
    DurationKnown { index: usize, duration: Duration },
    /// The loaded track played to its end.
    Ended { index: usize },
    /// The thread acknowledged a transport change.
    Transport { playing: bool },
    /// Opening or decoding failed; playback did not start.
    Failed { reason: String },
}
