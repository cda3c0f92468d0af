//! Catalog record types: `Track` and its closed `Genre`/`Mood` classifications.

use std::path::PathBuf;

use serde::Deserialize;

/// Genre classification. Closed set; catalog files use the kebab-case names.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    LoFi,
    Reggae,
}

impl Genre {
    pub fn label(self) -> &'static str {
        match self {
            Self::LoFi => "lo-fi",
            Self::Reggae => "reggae",
        }
    }
}

/// Mood classification used by scene-based recommendations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Chill,
    Upbeat,
    Dreamy,
    Tropical,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Self::Chill => "chill",
            Self::Upbeat => "upbeat",
            Self::Dreamy => "dreamy",
            Self::Tropical => "tropical",
        }
    }
}

/// One playable catalog entry. Immutable once the catalog is built.
///
/// `src` is an opaque locator handed to the audio thread; the catalog and
/// store never open it themselves.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub src: PathBuf,
    pub genre: Genre,
    pub mood: Mood,
    #[serde(default)]
    pub album_art: Option<String>,
}

impl Track {
    /// Display string for list views.
    pub fn display(&self) -> String {
        let artist = self.artist.trim();
        if artist.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", artist, self.title)
        }
    }
}
