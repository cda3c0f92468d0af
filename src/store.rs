//! Player state store: the single mutable session state and its commands.
//!
//! The store is a coordination point between UI intents and the audio
//! thread. It performs no I/O itself; playback feedback flows back in
//! through [`PlayerStore::apply`]. Every successful mutation notifies the
//! registered subscribers synchronously, in registration order.

mod model;
mod recommend;

pub use model::*;
pub use recommend::*;

#[cfg(test)]
mod tests;
