use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::library::{Catalog, Genre, Mood, Track};

use super::*;

fn catalog() -> Catalog {
    Catalog::island_default()
}

fn store() -> PlayerStore {
    PlayerStore::new(catalog())
}

fn small_catalog(moods: &[Mood]) -> Catalog {
    let tracks = moods
        .iter()
        .enumerate()
        .map(|(i, &mood)| Track {
            id: format!("{i}"),
            title: format!("Track {i}"),
            artist: "Test".into(),
            src: format!("audio/{i}.mp3").into(),
            genre: Genre::LoFi,
            mood,
            album_art: None,
        })
        .collect();
    Catalog::new(tracks).unwrap()
}

#[test]
fn next_track_wraps_modulo_catalog_size() {
    let mut store = store();
    let len = store.catalog().len();

    for n in 1..=(2 * len) {
        store.next_track();
        assert_eq!(store.state().current_index, n % len);
    }
}

#[test]
fn prev_track_wraps_symmetrically() {
    let mut store = store();
    let len = store.catalog().len();

    store.prev_track();
    assert_eq!(store.state().current_index, len - 1);

    for _ in 0..len {
        store.prev_track();
    }
    assert_eq!(store.state().current_index, len - 1);
}

#[test]
fn six_track_walkthrough_hits_each_index_then_wraps() {
    let mut store = store();
    assert_eq!(store.catalog().len(), 6);
    assert_eq!(store.state().current_index, 0);

    let mut seen = Vec::new();
    for _ in 0..5 {
        store.next_track();
        seen.push(store.state().current_index);
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);

    store.next_track();
    assert_eq!(store.state().current_index, 0);
}

#[test]
fn next_and_prev_reset_progress() {
    let mut store = store();
    store.set_progress(42.0);
    store.next_track();
    assert_eq!(store.state().progress, 0.0);

    store.set_progress(42.0);
    store.prev_track();
    assert_eq!(store.state().progress, 0.0);
}

#[test]
fn play_track_in_range_selects_and_starts() {
    let mut store = store();
    store.set_progress(66.0);

    store.play_track(3);
    let state = store.state();
    assert_eq!(state.current_index, 3);
    assert_eq!(state.progress, 0.0);
    assert_eq!(state.intended, Transport::Playing);
}

#[test]
fn play_track_out_of_range_changes_nothing() {
    let mut store = store();
    store.play_track(2);
    let before = store.state().clone();

    store.play_track(6);
    assert_eq!(*store.state(), before);

    store.play_track(usize::MAX);
    assert_eq!(*store.state(), before);
}

#[test]
fn play_track_out_of_range_does_not_notify() {
    let mut store = store();
    let calls = Arc::new(Mutex::new(0usize));
    let calls_in_sub = calls.clone();
    store.subscribe(move |_| {
        *calls_in_sub.lock().unwrap() += 1;
    });

    store.play_track(999);
    assert_eq!(*calls.lock().unwrap(), 0);

    store.play_track(1);
    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn toggle_play_pause_twice_is_identity() {
    let mut store = store();
    let initial = store.state().intended;

    store.toggle_play_pause();
    assert_eq!(store.state().intended, initial.flipped());

    store.toggle_play_pause();
    assert_eq!(store.state().intended, initial);
}

#[test]
fn set_volume_clamps_to_unit_range() {
    let mut store = store();

    store.set_volume(1.4);
    assert_eq!(store.state().volume, 1.0);

    store.set_volume(-0.2);
    assert_eq!(store.state().volume, 0.0);

    store.set_volume(0.35);
    assert_eq!(store.state().volume, 0.35);
}

#[test]
fn set_progress_and_duration_clamp_to_domain() {
    let mut store = store();

    store.set_progress(140.0);
    assert_eq!(store.state().progress, 100.0);
    store.set_progress(-5.0);
    assert_eq!(store.state().progress, 0.0);

    store.set_duration(-3.0);
    assert_eq!(store.state().duration, 0.0);
    store.set_duration(187.5);
    assert_eq!(store.state().duration, 187.5);
}

#[test]
fn presentation_flags_round_trip() {
    let mut store = store();

    store.set_minimized(true);
    store.set_volume_slider(true);
    assert!(store.state().minimized);
    assert!(store.state().volume_slider);

    store.set_minimized(false);
    store.set_volume_slider(false);
    assert!(!store.state().minimized);
    assert!(!store.state().volume_slider);
}

#[test]
fn subscribers_run_in_registration_order_with_full_snapshot() {
    let mut store = store();
    let log: Arc<Mutex<Vec<(&'static str, usize)>>> = Arc::new(Mutex::new(Vec::new()));

    let log_a = log.clone();
    store.subscribe(move |state| {
        log_a.lock().unwrap().push(("a", state.current_index));
    });
    let log_b = log.clone();
    store.subscribe(move |state| {
        log_b.lock().unwrap().push(("b", state.current_index));
    });

    store.next_track();
    store.next_track();

    assert_eq!(
        *log.lock().unwrap(),
        vec![("a", 1), ("b", 1), ("a", 2), ("b", 2)]
    );
}

#[test]
fn position_feedback_recomputes_progress_percent() {
    let mut store = store();
    store.apply(Feedback::DurationKnown(Duration::from_secs(200)));
    assert_eq!(store.state().duration, 200.0);

    store.apply(Feedback::Position(Duration::from_secs(50)));
    assert_eq!(store.state().progress, 25.0);

    // Past-the-end reports stay capped.
    store.apply(Feedback::Position(Duration::from_secs(400)));
    assert_eq!(store.state().progress, 100.0);
}

#[test]
fn position_feedback_without_duration_reports_zero() {
    let mut store = store();
    store.apply(Feedback::Position(Duration::from_secs(30)));
    assert_eq!(store.state().progress, 0.0);
}

#[test]
fn transport_confirmation_leaves_intent_alone() {
    let mut store = store();
    store.toggle_play_pause();
    assert_eq!(store.state().intended, Transport::Playing);
    assert_eq!(store.state().confirmed, Transport::Paused);

    store.apply(Feedback::TransportConfirmed(true));
    assert_eq!(store.state().confirmed, Transport::Playing);
    assert_eq!(store.state().intended, Transport::Playing);
}

#[test]
fn failure_feedback_pauses_confirmed_but_keeps_intent() {
    let mut store = store();
    store.play_track(1);

    store.apply(Feedback::Failed);
    assert_eq!(store.state().confirmed, Transport::Paused);
    // The optimistic intent survives until the next acknowledgment.
    assert_eq!(store.state().intended, Transport::Playing);
    assert_eq!(store.state().current_index, 1);
}

#[test]
fn ended_feedback_advances_and_keeps_playing() {
    let mut store = store();
    store.play_track(5);
    store.set_progress(99.0);

    store.apply(Feedback::Ended);
    let state = store.state();
    assert_eq!(state.current_index, 0); // wrapped
    assert_eq!(state.progress, 0.0);
    assert_eq!(state.intended, Transport::Playing);
}

#[test]
fn current_track_follows_index() {
    let mut store = store();
    assert_eq!(store.current_track().title, "Island Breeze");

    store.play_track(4);
    assert_eq!(store.current_track().title, "Moonlight Waves");
}

#[test]
fn tracks_by_genre_delegates_to_catalog() {
    let store = store();
    let reggae = store.tracks_by_genre(Genre::Reggae);
    assert_eq!(
        reggae.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
        vec!["Sunset Reggae", "Caribbean Flow", "Beach Party"]
    );
}

#[test]
fn night_recommendation_only_yields_dreamy_or_chill_and_never_current() {
    // Index 0 is chill; the remaining night-fitting tracks are 2 and 4.
    let store = store();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let pick = store.recommend(SceneContext::Night, &mut rng).unwrap();
        assert_ne!(pick, store.state().current_index);
        assert!(matches!(
            store.catalog().get(pick).unwrap().mood,
            Mood::Dreamy | Mood::Chill
        ));
    }
}

#[test]
fn recommendation_is_none_when_no_other_track_matches() {
    // Current track is the only chill one; night excludes it and the rest
    // are tropical, which night does not prefer.
    let mut store = PlayerStore::new(small_catalog(&[
        Mood::Chill,
        Mood::Tropical,
        Mood::Tropical,
    ]));
    store.play_track(0);

    let mut rng = StdRng::seed_from_u64(7);
    assert!(store.recommend(SceneContext::Night, &mut rng).is_none());
}

#[test]
fn recommendation_excludes_current_even_when_it_fits() {
    let mut store = PlayerStore::new(small_catalog(&[Mood::Dreamy, Mood::Dreamy]));
    store.play_track(1);

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        assert_eq!(store.recommend(SceneContext::Night, &mut rng), Some(0));
    }
}

#[test]
fn unknown_scene_labels_fall_back_to_chill() {
    assert_eq!(preferred_moods_for_label("eclipse"), &[Mood::Chill]);
    assert_eq!(
        preferred_moods_for_label("sunset"),
        preferred_moods(SceneContext::Sunset)
    );

    // Chill-only fallback: from index 1, only track 0 qualifies.
    let mut store = PlayerStore::new(small_catalog(&[Mood::Chill, Mood::Upbeat, Mood::Dreamy]));
    store.play_track(1);
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(store.recommend_for_label("eclipse", &mut rng), Some(0));
}

#[test]
fn recommended_track_resolves_the_picked_index() {
    let store = store();
    let mut rng = StdRng::seed_from_u64(42);
    let track = store.recommended_track(SceneContext::Night, &mut rng).unwrap();
    assert!(matches!(track.mood, Mood::Dreamy | Mood::Chill));
}

#[test]
fn scene_context_labels_round_trip_and_cycle() {
    for scene in [
        SceneContext::Day,
        SceneContext::Night,
        SceneContext::Sunset,
        SceneContext::Sunrise,
    ] {
        assert_eq!(SceneContext::from_label(scene.label()), Some(scene));
    }
    assert_eq!(SceneContext::from_label("noon"), None);

    let mut scene = SceneContext::Day;
    for _ in 0..4 {
        scene = scene.cycled();
    }
    assert_eq!(scene, SceneContext::Day);
}
