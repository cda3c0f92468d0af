//! `AudioPlayer`: the handle owned by the view layer.

use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use crate::library::Track;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, AudioEvent};

pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Spawn the worker thread for `tracks`. Returns the command handle and
    /// the receiving end of the event channel.
    pub fn new(tracks: Vec<Track>) -> (Self, Receiver<AudioEvent>) {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<AudioEvent>();
        let join = spawn_audio_thread(tracks, rx, event_tx);

        (
            Self {
                tx,
                join: Mutex::new(Some(join)),
            },
            event_rx,
        )
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    /// Ask the thread to stop and wait for it to exit.
    pub fn quit(&self) {
        let _ = self.send(AudioCmd::Quit);
        if let Ok(mut join) = self.join.lock() {
            if let Some(handle) = join.take() {
                let _ = handle.join();
            }
        }
    }
}
