//! Audio playback worker: the media primitive behind a command channel.
//!
//! A dedicated thread owns the rodio output stream and the current sink.
//! The view layer sends [`AudioCmd`]s and feeds the emitted [`AudioEvent`]s
//! back into the store.

mod player;
mod sink;
mod thread;
mod types;

pub use player::*;
pub use types::*;
