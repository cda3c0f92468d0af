//! Utilities for creating `rodio` sinks from `Track` values.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::library::Track;

/// Create a paused `Sink` for `track`, along with the decoded duration when
/// the decoder can report one.
pub(super) fn create_sink(
    handle: &OutputStream,
    track: &Track,
) -> Result<(Sink, Option<Duration>), String> {
    let file =
        File::open(&track.src).map_err(|e| format!("open {}: {e}", track.src.display()))?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| format!("decode {}: {e}", track.src.display()))?;
    let duration = source.total_duration();

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok((sink, duration))
}
