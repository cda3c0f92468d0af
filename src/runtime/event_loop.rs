//! The main terminal event loop.
//!
//! Per iteration: drain audio feedback into the store, translate store
//! snapshots (pushed by the subscriber) into audio commands, draw, then
//! poll for input. All store mutations happen here, on this thread.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::{AudioCmd, AudioEvent, AudioPlayer};
use crate::config;
use crate::store::{Feedback, PlayerState, PlayerStore, SceneContext};
use crate::ui;

const VOLUME_STEP: f32 = 0.05;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Cursor position in the track list; distinct from the playing track.
    pub selected: usize,
    /// Scene context feeding the recommendation query.
    pub scene: SceneContext,
    /// Whether the track-info popup is open.
    pub show_info: bool,
    /// Last media failure, surfaced in the status line.
    pub last_error: Option<String>,
}

impl EventLoopState {
    pub fn new(settings: &config::Settings) -> Self {
        let scene = match settings.player.scene {
            config::SceneSetting::Day => SceneContext::Day,
            config::SceneSetting::Night => SceneContext::Night,
            config::SceneSetting::Sunset => SceneContext::Sunset,
            config::SceneSetting::Sunrise => SceneContext::Sunrise,
        };
        Self {
            selected: 0,
            scene,
            show_info: false,
            last_error: None,
        }
    }
}

/// Run until quit is requested. Owns no terminal setup/teardown; the caller
/// wraps this with raw mode and the alternate screen.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    store: &mut PlayerStore,
    audio_player: &AudioPlayer,
    audio_events: &Receiver<AudioEvent>,
    sync_rx: &Receiver<PlayerState>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    // Prime the audio thread with the initial selection and volume.
    let mut last_synced = store.state().clone();
    let _ = audio_player.send(AudioCmd::Load(last_synced.current_index));
    let _ = audio_player.send(AudioCmd::SetVolume(last_synced.volume));

    loop {
        // Feedback from the audio thread first, so the store is current
        // before drawing.
        while let Ok(ev) = audio_events.try_recv() {
            apply_audio_event(ev, store, state);
        }

        // Snapshots pushed by the store subscriber since the last iteration.
        while let Ok(snapshot) = sync_rx.try_recv() {
            sync_audio(&last_synced, &snapshot, audio_player);
            last_synced = snapshot;
        }

        let view = ui::ViewContext {
            selected: state.selected,
            scene: state.scene,
            show_info: state.show_info,
            last_error: state.last_error.as_deref(),
        };
        terminal.draw(|f| ui::draw(f, store, &view, &settings.ui))?;

        if event::poll(Duration::from_millis(settings.ui.tick_ms))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, store, state) {
                    audio_player.quit();
                    return Ok(());
                }
            }
        }
    }
}

/// Feed one audio notification into the store.
fn apply_audio_event(ev: AudioEvent, store: &mut PlayerStore, state: &mut EventLoopState) {
    match ev {
        AudioEvent::Position { index, elapsed } => {
            if index == store.state().current_index {
                store.apply(Feedback::Position(elapsed));
            }
        }
        AudioEvent::DurationKnown { index, duration } => {
            if index == store.state().current_index {
                store.apply(Feedback::DurationKnown(duration));
            }
        }
        AudioEvent::Ended { index } => {
            // Stale end reports for an already-switched track are dropped.
            if index == store.state().current_index {
                store.apply(Feedback::Ended);
            }
        }
        AudioEvent::Transport { playing } => {
            store.apply(Feedback::TransportConfirmed(playing));
        }
        AudioEvent::Failed { reason } => {
            state.last_error = Some(reason);
            store.apply(Feedback::Failed);
        }
    }
}

/// Translate a snapshot delta into audio commands.
fn sync_audio(prev: &PlayerState, next: &PlayerState, audio_player: &AudioPlayer) {
    if next.current_index != prev.current_index {
        let _ = audio_player.send(AudioCmd::Load(next.current_index));
        if next.intended.is_playing() {
            let _ = audio_player.send(AudioCmd::Play);
        }
    } else if next.intended != prev.intended {
        let cmd = if next.intended.is_playing() {
            AudioCmd::Play
        } else {
            AudioCmd::Pause
        };
        let _ = audio_player.send(cmd);
    }

    if next.volume != prev.volume {
        let _ = audio_player.send(AudioCmd::SetVolume(next.volume));
    }
}

/// Handle one key press. Returns `true` when the app should quit.
fn handle_key_event(key: KeyEvent, store: &mut PlayerStore, state: &mut EventLoopState) -> bool {
    let len = store.catalog().len();
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => {
            state.selected = (state.selected + 1) % len;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.selected = (state.selected + len - 1) % len;
        }
        KeyCode::Enter => {
            store.play_track(state.selected);
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            store.toggle_play_pause();
        }
        KeyCode::Char('l') => {
            store.next_track();
        }
        KeyCode::Char('h') => {
            store.prev_track();
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let volume = store.state().volume + VOLUME_STEP;
            store.set_volume(volume);
        }
        KeyCode::Char('-') => {
            let volume = store.state().volume - VOLUME_STEP;
            store.set_volume(volume);
        }
        KeyCode::Char('v') => {
            let show = !store.state().volume_slider;
            store.set_volume_slider(show);
        }
        KeyCode::Char('m') => {
            let minimized = !store.state().minimized;
            store.set_minimized(minimized);
        }
        KeyCode::Char('i') => {
            state.show_info = !state.show_info;
        }
        KeyCode::Char('d') => {
            state.scene = state.scene.cycled();
        }
        KeyCode::Char('r') => {
            if let Some(index) = store.recommend(state.scene, &mut rand::rng()) {
                state.selected = index;
                store.play_track(index);
            }
        }
        _ => {}
    }

    false
}
