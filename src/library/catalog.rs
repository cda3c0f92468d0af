//! The `Catalog`: a validated, ordered, read-only collection of tracks.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{Genre, Mood, Track};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no tracks")]
    Empty,
    #[error("duplicate track id: {0}")]
    DuplicateId(String),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Ordered track collection. Order is declaration order and never changes.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
}

/// On-disk catalog shape: a TOML file with `[[tracks]]` entries.
#[derive(Deserialize)]
struct CatalogFile {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog, enforcing the non-empty and unique-id invariants.
    pub fn new(tracks: Vec<Track>) -> Result<Self, CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for track in &tracks {
            if !seen.insert(track.id.as_str()) {
                return Err(CatalogError::DuplicateId(track.id.clone()));
            }
        }

        Ok(Self { tracks })
    }

    /// Load a catalog from a TOML file with `[[tracks]]` entries.
    ///
    /// The external source can replace the built-in list without touching
    /// the store contract, as long as the same invariants hold.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&raw)?;
        Self::new(file.tracks)
    }

    /// All tracks, in declaration order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Tracks of `genre`, preserving relative order. Empty when none match.
    pub fn by_genre(&self, genre: Genre) -> Vec<&Track> {
        self.tracks.iter().filter(|t| t.genre == genre).collect()
    }

    /// The track with `id`, or `None`.
    pub fn by_id(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// The built-in island catalog used when no catalog file is configured.
    pub fn island_default() -> Self {
        // Invariants hold by construction; skip revalidation.
        Self {
            tracks: default_tracks(),
        }
    }
}

fn default_tracks() -> Vec<Track> {
    fn track(
        id: &str,
        title: &str,
        artist: &str,
        src: &str,
        genre: Genre,
        mood: Mood,
        album_art: &str,
    ) -> Track {
        Track {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            src: PathBuf::from(src),
            genre,
            mood,
            album_art: Some(album_art.to_string()),
        }
    }

    vec![
        track(
            "1",
            "Island Breeze",
            "Tropical Vibes",
            "audio/island-breeze.mp3",
            Genre::LoFi,
            Mood::Chill,
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=400&fit=crop&crop=center",
        ),
        track(
            "2",
            "Sunset Reggae",
            "Ocean Waves",
            "audio/sunset-reggae.mp3",
            Genre::Reggae,
            Mood::Tropical,
            "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=400&h=400&fit=crop&crop=center",
        ),
        track(
            "3",
            "Palm Tree Dreams",
            "Chill Beats",
            "audio/palm-dreams.mp3",
            Genre::LoFi,
            Mood::Dreamy,
            "https://images.unsplash.com/photo-1520637836862-4d197d17c27a?w=400&h=400&fit=crop&crop=center",
        ),
        track(
            "4",
            "Caribbean Flow",
            "Island Rhythms",
            "audio/caribbean-flow.mp3",
            Genre::Reggae,
            Mood::Upbeat,
            "https://images.unsplash.com/photo-1541888946425-d81bb19240f5?w=400&h=400&fit=crop&crop=center",
        ),
        track(
            "5",
            "Moonlight Waves",
            "Night Sounds",
            "audio/moonlight-waves.mp3",
            Genre::LoFi,
            Mood::Dreamy,
            "https://images.unsplash.com/photo-1493514789931-586cb221d7a7?w=400&h=400&fit=crop&crop=center",
        ),
        track(
            "6",
            "Beach Party",
            "Sunny Vibes",
            "audio/beach-party.mp3",
            Genre::Reggae,
            Mood::Upbeat,
            "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=400&h=400&fit=crop&crop=center",
        ),
    ]
}
