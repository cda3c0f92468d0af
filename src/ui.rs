//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. The
//! store is the single source of truth; everything here reads and never
//! mutates.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::config::UiSettings;
use crate::store::{PlayerStore, SceneContext, Transport};

/// Per-frame view inputs that live outside the store.
pub struct ViewContext<'a> {
    pub selected: usize,
    pub scene: SceneContext,
    pub show_info: bool,
    pub last_error: Option<&'a str>,
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Reconstruct elapsed seconds from the store's percent/duration pair.
fn elapsed_from_progress(progress: f32, duration: f32) -> Duration {
    Duration::from_secs_f64((progress as f64 / 100.0 * duration as f64).max(0.0))
}

/// Now-playing text: `Artist - Title [MM:SS / MM:SS]` once duration is known.
fn now_playing_text(store: &PlayerStore) -> String {
    let state = store.state();
    let track = store.current_track();
    if state.duration > 0.0 {
        let elapsed = elapsed_from_progress(state.progress, state.duration);
        let total = Duration::from_secs_f64(state.duration as f64);
        format!(
            "{} [{} / {}]",
            track.display(),
            format_mmss(elapsed),
            format_mmss(total)
        )
    } else {
        track.display()
    }
}

fn transport_text(store: &PlayerStore) -> String {
    let state = store.state();
    let intent = match state.intended {
        Transport::Playing => "Playing",
        Transport::Paused => "Paused",
    };
    // Surface the optimistic window instead of hiding it.
    if state.confirmed == state.intended {
        intent.to_string()
    } else {
        format!("{intent} (syncing)")
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn controls_text() -> String {
    [
        "[j/k] up/down",
        "[enter] play selected",
        "[space/p] play/pause",
        "[h/l] prev/next",
        "[-/+] volume",
        "[v] volume slider",
        "[i] track info",
        "[m] minimize",
        "[d] scene",
        "[r] recommend",
        "[q] quit",
    ]
    .join(" | ")
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, store: &PlayerStore, view: &ViewContext, ui_settings: &UiSettings) {
    if store.state().minimized {
        draw_minimized(frame, store);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" lagoon ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = {
        let state = store.state();
        let mut parts: Vec<String> = Vec::new();

        parts.push(format!("SCENE: {}", view.scene.label()));
        parts.push(transport_text(store));
        parts.push(format!("Song: {}", now_playing_text(store)));
        parts.push(format!("Vol: {:>3.0}%", state.volume * 100.0));

        if let Some(err) = view.last_error {
            parts.push(format!("audio: {err}"));
        }

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Track list
    {
        let current = store.state().current_index;
        let items: Vec<ListItem> = store
            .catalog()
            .tracks()
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let marker = if i == current { "♪ " } else { "  " };
                ListItem::new(format!(
                    "{marker}{}  ({}/{})",
                    track.display(),
                    track.genre.label(),
                    track.mood.label()
                ))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" tracks "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut list_state = ratatui::widgets::ListState::default();
        list_state.select(Some(view.selected));
        frame.render_stateful_widget(list, chunks[2], &mut list_state);
    }

    // Track info popup (keeps the list visible under it).
    if view.show_info {
        let popup_area = centered_rect_sized(72, 8, chunks[2]);
        frame.render_widget(Clear, popup_area);

        let info = match store.catalog().get(view.selected) {
            Some(track) => format!(
                "Id: {}\nTitle: {}\nArtist: {}\nGenre: {} / Mood: {}\nArt: {}\nSrc: {}",
                track.id,
                track.title,
                track.artist,
                track.genre.label(),
                track.mood.label(),
                track.album_art.as_deref().unwrap_or("-"),
                track.src.display()
            ),
            None => "No track selected".to_string(),
        };
        let info_paragraph = Paragraph::new(info)
            .block(
                Block::default()
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    })
                    .borders(Borders::ALL)
                    .title(" track (i closes) "),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(info_paragraph, popup_area);
    }

    // Volume slider popup (keeps the list visible under it).
    if store.state().volume_slider {
        let popup_area = centered_rect_sized(40, 3, chunks[2]);
        frame.render_widget(Clear, popup_area);

        let volume = store.state().volume;
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" volume (v closes) "),
            )
            .ratio(volume.clamp(0.0, 1.0) as f64)
            .label(format!("{:.0}%", volume * 100.0));
        frame.render_widget(gauge, popup_area);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

/// Compact one-line layout used when the player is minimized.
fn draw_minimized(frame: &mut Frame, store: &PlayerStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(frame.area());

    let line = format!(
        "♪ {} • {} • Vol: {:>3.0}% • [m] expand",
        now_playing_text(store),
        transport_text(store),
        store.state().volume * 100.0
    );

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" lagoon ")
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            }),
    );
    frame.render_widget(bar, chunks[0]);
}
