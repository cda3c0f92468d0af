//! Scene-based track recommendation.
//!
//! Each scene context maps to a fixed preferred-mood set; the pick among
//! matching tracks is uniform via a caller-supplied RNG so tests can seed it.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::library::{Mood, Track};

use super::model::PlayerStore;

/// Scene context driving mood-based recommendations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SceneContext {
    Day,
    Night,
    Sunset,
    Sunrise,
}

impl SceneContext {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "day" => Some(Self::Day),
            "night" => Some(Self::Night),
            "sunset" => Some(Self::Sunset),
            "sunrise" => Some(Self::Sunrise),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
            Self::Sunset => "sunset",
            Self::Sunrise => "sunrise",
        }
    }

    /// The next scene in the day cycle.
    pub fn cycled(self) -> Self {
        match self {
            Self::Day => Self::Sunset,
            Self::Sunset => Self::Night,
            Self::Night => Self::Sunrise,
            Self::Sunrise => Self::Day,
        }
    }
}

/// Preferred moods for each scene, fixed lookup.
pub fn preferred_moods(scene: SceneContext) -> &'static [Mood] {
    match scene {
        SceneContext::Day => &[Mood::Chill, Mood::Upbeat, Mood::Tropical],
        SceneContext::Night => &[Mood::Dreamy, Mood::Chill],
        SceneContext::Sunset => &[Mood::Tropical, Mood::Dreamy],
        SceneContext::Sunrise => &[Mood::Upbeat, Mood::Chill],
    }
}

/// Preferred moods for a free-form label; unknown labels fall back to chill.
pub fn preferred_moods_for_label(label: &str) -> &'static [Mood] {
    match SceneContext::from_label(label) {
        Some(scene) => preferred_moods(scene),
        None => &[Mood::Chill],
    }
}

impl PlayerStore {
    /// Pick a random catalog index whose mood fits `scene`, never the
    /// current track. `None` when nothing else qualifies.
    pub fn recommend<R: Rng + ?Sized>(&self, scene: SceneContext, rng: &mut R) -> Option<usize> {
        self.pick(preferred_moods(scene), rng)
    }

    /// Label-based variant; unknown labels use the chill-only fallback set.
    pub fn recommend_for_label<R: Rng + ?Sized>(
        &self,
        label: &str,
        rng: &mut R,
    ) -> Option<usize> {
        self.pick(preferred_moods_for_label(label), rng)
    }

    pub fn recommended_track<R: Rng + ?Sized>(
        &self,
        scene: SceneContext,
        rng: &mut R,
    ) -> Option<&Track> {
        self.recommend(scene, rng).and_then(|i| self.catalog().get(i))
    }

    fn pick<R: Rng + ?Sized>(&self, moods: &[Mood], rng: &mut R) -> Option<usize> {
        let current = self.state().current_index;
        let candidates: Vec<usize> = self
            .catalog()
            .tracks()
            .iter()
            .enumerate()
            .filter(|(i, track)| *i != current && moods.contains(&track.mood))
            .map(|(i, _)| i)
            .collect();

        candidates.choose(rng).copied()
    }
}
