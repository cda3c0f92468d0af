//! Store types: `Transport`, `PlayerState`, `Feedback` and `PlayerStore`.

use std::time::Duration;

use crate::library::{Catalog, Genre, Track};

/// Transport intent: whether playback should be active.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Transport {
    #[default]
    Paused,
    Playing,
}

impl Transport {
    pub fn flipped(self) -> Self {
        match self {
            Self::Paused => Self::Playing,
            Self::Playing => Self::Paused,
        }
    }

    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

/// Snapshot of the player state handed to subscribers and the view layer.
///
/// `intended` is the caller's last intent; `confirmed` is what the audio
/// thread last acknowledged. The two may diverge until the next
/// acknowledgment arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub current_index: usize,
    pub intended: Transport,
    pub confirmed: Transport,
    /// Volume in `[0.0, 1.0]`.
    pub volume: f32,
    /// Playback progress as a percentage in `[0.0, 100.0]`.
    pub progress: f32,
    /// Track length in seconds; 0 until the decoder reports it.
    pub duration: f32,
    pub minimized: bool,
    pub volume_slider: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_index: 0,
            intended: Transport::Paused,
            confirmed: Transport::Paused,
            volume: 0.7,
            progress: 0.0,
            duration: 0.0,
            minimized: false,
            volume_slider: false,
        }
    }
}

/// Playback feedback from the media primitive.
#[derive(Debug, Clone)]
pub enum Feedback {
    /// Elapsed position within the current track changed.
    Position(Duration),
    /// Total duration of the current track became known.
    DurationKnown(Duration),
    /// The media primitive acknowledged a transport change.
    TransportConfirmed(bool),
    /// The current track played to its end.
    Ended,
    /// The media primitive rejected or aborted playback.
    Failed,
}

pub type Subscriber = Box<dyn FnMut(&PlayerState) + Send>;

/// The authoritative mutable player state for one session.
///
/// Constructed once at startup and passed by reference; there is no global
/// instance. Commands never raise: continuous values are clamped to their
/// domain and out-of-range indices are dropped without mutation.
pub struct PlayerStore {
    catalog: Catalog,
    state: PlayerState,
    subscribers: Vec<Subscriber>,
}

impl PlayerStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: PlayerState::default(),
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Register an observer. Subscribers are invoked synchronously on every
    /// state change, in registration order, with the full updated snapshot.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&PlayerState) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }

    /// Flip the intended transport state.
    pub fn toggle_play_pause(&mut self) {
        self.state.intended = self.state.intended.flipped();
        self.notify();
    }

    /// Advance to the next track, wrapping past the end of the catalog.
    pub fn next_track(&mut self) {
        self.state.current_index = (self.state.current_index + 1) % self.catalog.len();
        self.state.progress = 0.0;
        self.notify();
    }

    /// Step back to the previous track, wrapping past the start.
    pub fn prev_track(&mut self) {
        let len = self.catalog.len();
        self.state.current_index = (self.state.current_index + len - 1) % len;
        self.state.progress = 0.0;
        self.notify();
    }

    /// Select `index` and start playing. Out-of-range indices are dropped:
    /// no mutation, no notification.
    pub fn play_track(&mut self, index: usize) {
        if index >= self.catalog.len() {
            return;
        }
        self.state.current_index = index;
        self.state.progress = 0.0;
        self.state.intended = Transport::Playing;
        self.notify();
    }

    /// Set the volume, clamped to `[0.0, 1.0]`.
    pub fn set_volume(&mut self, volume: f32) {
        self.state.volume = volume.clamp(0.0, 1.0);
        self.notify();
    }

    /// Set the progress percentage, clamped to `[0.0, 100.0]`.
    pub fn set_progress(&mut self, percent: f32) {
        self.state.progress = percent.clamp(0.0, 100.0);
        self.notify();
    }

    /// Set the track duration in seconds, floored at 0.
    pub fn set_duration(&mut self, seconds: f32) {
        self.state.duration = seconds.max(0.0);
        self.notify();
    }

    pub fn set_minimized(&mut self, minimized: bool) {
        self.state.minimized = minimized;
        self.notify();
    }

    pub fn set_volume_slider(&mut self, show: bool) {
        self.state.volume_slider = show;
        self.notify();
    }

    /// Apply playback feedback from the media primitive.
    ///
    /// Feedback only ever touches the confirmed side of the transport split;
    /// `intended` stays whatever the caller last asked for, which keeps the
    /// optimistic window explicit.
    pub fn apply(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::Position(elapsed) => {
                let percent = if self.state.duration > 0.0 {
                    elapsed.as_secs_f32() / self.state.duration * 100.0
                } else {
                    0.0
                };
                self.state.progress = percent.clamp(0.0, 100.0);
            }
            Feedback::DurationKnown(total) => {
                self.state.duration = total.as_secs_f32();
            }
            Feedback::TransportConfirmed(playing) => {
                self.state.confirmed = if playing {
                    Transport::Playing
                } else {
                    Transport::Paused
                };
            }
            Feedback::Ended => {
                // Advance and keep going.
                self.state.current_index = (self.state.current_index + 1) % self.catalog.len();
                self.state.progress = 0.0;
                self.state.intended = Transport::Playing;
            }
            Feedback::Failed => {
                self.state.confirmed = Transport::Paused;
            }
        }
        self.notify();
    }

    /// The track at `current_index`. Total: every mutation path keeps the
    /// index inside the catalog.
    pub fn current_track(&self) -> &Track {
        &self.catalog.tracks()[self.state.current_index]
    }

    pub fn tracks_by_genre(&self, genre: Genre) -> Vec<&Track> {
        self.catalog.by_genre(genre)
    }
}
