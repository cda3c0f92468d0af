//! The audio worker thread.
//!
//! One sink at a time; commands arrive over the channel, and every tick
//! without a command is used to report elapsed time and detect end-of-track
//! via `sink.empty()`.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rodio::{OutputStreamBuilder, Sink};

use crate::library::Track;

use super::sink::create_sink;
use super::types::{AudioCmd, AudioEvent};

const TICK: Duration = Duration::from_millis(200);

pub(super) fn spawn_audio_thread(
    tracks: Vec<Track>,
    rx: Receiver<AudioCmd>,
    events: Sender<AudioEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => s,
            Err(e) => {
                let _ = events.send(AudioEvent::Failed {
                    reason: format!("no audio output device: {e}"),
                });
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        let mut sink: Option<Sink> = None;
        let mut index: Option<usize> = None;
        let mut paused = true;
        let mut volume: f32 = 1.0;

        // Track start time and accumulated elapsed when paused.
        let mut started_at: Option<Instant> = None;
        let mut accumulated = Duration::ZERO;

        loop {
            match rx.recv_timeout(TICK) {
                Ok(AudioCmd::Load(i)) => {
                    if let Some(s) = sink.as_ref() {
                        s.stop();
                    }
                    sink = None;
                    index = None;
                    paused = true;
                    started_at = None;
                    accumulated = Duration::ZERO;

                    let Some(track) = tracks.get(i) else {
                        let _ = events.send(AudioEvent::Failed {
                            reason: format!("no track at index {i}"),
                        });
                        continue;
                    };

                    match create_sink(&stream, track) {
                        Ok((new_sink, duration)) => {
                            new_sink.set_volume(volume);
                            if let Some(d) = duration {
                                let _ = events.send(AudioEvent::DurationKnown {
                                    index: i,
                                    duration: d,
                                });
                            }
                            sink = Some(new_sink);
                            index = Some(i);
                        }
                        Err(reason) => {
                            let _ = events.send(AudioEvent::Failed { reason });
                        }
                    }
                }
                Ok(AudioCmd::Play) => {
                    if let Some(s) = sink.as_ref() {
                        if paused {
                            s.play();
                            paused = false;
                            started_at = Some(Instant::now());
                            let _ = events.send(AudioEvent::Transport { playing: true });
                        }
                    }
                }
                Ok(AudioCmd::Pause) => {
                    if let Some(s) = sink.as_ref() {
                        if !paused {
                            s.pause();
                            paused = true;
                            if let Some(st) = started_at.take() {
                                accumulated += st.elapsed();
                            }
                            let _ = events.send(AudioEvent::Transport { playing: false });
                        }
                    }
                }
                Ok(AudioCmd::SetVolume(v)) => {
                    volume = v.clamp(0.0, 1.0);
                    if let Some(s) = sink.as_ref() {
                        s.set_volume(volume);
                    }
                }
                Ok(AudioCmd::Quit) => {
                    if let Some(s) = sink.as_ref() {
                        s.stop();
                    }
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {
                    let Some(i) = index else { continue };
                    if paused {
                        continue;
                    }

                    let finished = sink.as_ref().map(|s| s.empty()).unwrap_or(false);
                    if finished {
                        sink = None;
                        index = None;
                        paused = true;
                        started_at = None;
                        accumulated = Duration::ZERO;
                        let _ = events.send(AudioEvent::Ended { index: i });
                    } else {
                        let elapsed = accumulated
                            + started_at.map(|st| st.elapsed()).unwrap_or(Duration::ZERO);
                        let _ = events.send(AudioEvent::Position { index: i, elapsed });
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
