use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/lagoon/config.toml` or `~/.config/lagoon/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `LAGOON__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub library: LibrarySettings,
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player: PlayerSettings::default(),
            library: LibrarySettings::default(),
            ui: UiSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Initial volume, in [0.0, 1.0].
    pub volume: f32,
    /// Whether the player starts in the compact one-line layout.
    pub start_minimized: bool,
    /// Scene the session starts in; drives mood recommendations.
    pub scene: SceneSetting,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            volume: 0.7,
            start_minimized: false,
            scene: SceneSetting::Day,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Optional TOML catalog file with `[[tracks]]` entries.
    /// The built-in island catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self { catalog_path: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Input poll interval for the event loop, in milliseconds.
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ drift away ~ ".to_string(),
            tick_ms: 50,
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneSetting {
    Day,
    Night,
    Sunset,
    Sunrise,
}
