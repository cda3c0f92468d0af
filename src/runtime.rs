//! Runtime wiring: terminal lifecycle, store construction and the event loop.

use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::AudioPlayer;
use crate::library::Catalog;
use crate::store::{PlayerState, PlayerStore};

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let catalog = match settings.library.catalog_path {
        Some(ref path) => Catalog::from_path(path)?,
        None => Catalog::island_default(),
    };

    let mut store = PlayerStore::new(catalog.clone());
    store.set_volume(settings.player.volume);
    store.set_minimized(settings.player.start_minimized);

    let (audio_player, audio_events) = AudioPlayer::new(catalog.tracks().to_vec());

    // The runtime's subscriber forwards every snapshot to the audio-sync
    // side of the loop; further subscribers would run after it, in order.
    let (sync_tx, sync_rx) = mpsc::channel::<PlayerState>();
    store.subscribe(move |state| {
        let _ = sync_tx.send(state.clone());
    });

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new(&settings);
        event_loop::run(
            &mut terminal,
            &settings,
            &mut store,
            &audio_player,
            &audio_events,
            &sync_rx,
            &mut state,
        )
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
