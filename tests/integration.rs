// SPDX-License-Identifier: MPL-2.0
use std::collections::HashSet;
use std::time::{Duration, Instant};
use taxboard::config::{self, Config};
use taxboard::ui::notifications::{Descriptor, Engine, NotificationMessage, ValidationError};
use taxboard::ui::theming::ThemeMode;
use tempfile::tempdir;

const DEFAULT: Duration = Duration::from_millis(5000);
const EPSILON: Duration = Duration::from_millis(50);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn export_complete_scenario() {
    let mut engine: Engine<()> = Engine::new(DEFAULT);
    let id = engine
        .enqueue(Descriptor::success("Export Complete", "Ready").duration_ms(0))
        .expect("valid descriptor");
    assert_eq!(engine.list().len(), 1);

    assert!(engine.dismiss(id));
    assert_eq!(engine.list().len(), 0);
}

#[test]
fn staggered_expiry_scenario() {
    let mut engine: Engine<()> = Engine::new(DEFAULT);
    let t0 = Instant::now();

    engine
        .enqueue_at(Descriptor::info("First", "a").duration_ms(100), t0)
        .unwrap();
    engine
        .enqueue_at(Descriptor::info("Second", "b").duration_ms(100), t0 + ms(50))
        .unwrap();

    engine.expire_due(t0 + ms(120));
    assert_eq!(engine.list().len(), 1);
    assert_eq!(engine.list()[0].title(), "Second");

    engine.expire_due(t0 + ms(150) + EPSILON);
    assert!(engine.is_empty());
}

#[test]
fn clear_all_cancels_default_timers() {
    let mut engine: Engine<()> = Engine::new(DEFAULT);
    let t0 = Instant::now();
    for i in 0..10 {
        engine
            .enqueue_at(Descriptor::info(format!("n{i}"), "default lifetime"), t0)
            .unwrap();
    }
    assert_eq!(engine.len(), 10);

    engine.clear_all();
    assert_eq!(engine.len(), 0);
    assert!(!engine.has_pending_timers());

    let revision = engine.revision();
    assert!(engine.expire_due(t0 + DEFAULT + EPSILON).is_empty());
    assert_eq!(engine.revision(), revision);
}

#[test]
fn ids_are_unique_and_count_tracks_removals() {
    let mut engine: Engine<()> = Engine::new(DEFAULT);
    let t0 = Instant::now();
    let mut ids = Vec::new();
    for i in 0..20u64 {
        let desc = Descriptor::warning("Check", format!("row {i}")).duration_ms((i as i64 % 4) * 100);
        ids.push(engine.enqueue_at(desc, t0).unwrap());
    }

    let distinct: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(distinct.len(), ids.len());

    let mut removed = 0;
    for id in ids.iter().step_by(3) {
        if engine.dismiss(*id) {
            removed += 1;
        }
    }
    assert_eq!(engine.len(), 20 - removed);

    removed += engine.expire_due(t0 + ms(300) + EPSILON).len();
    assert_eq!(engine.len(), 20 - removed);

    // Only the persistent ones (duration 0) remain.
    assert!(engine.list().iter().all(|n| n.lifetime().is_none()));
}

#[test]
fn dismiss_is_idempotent() {
    let mut engine: Engine<()> = Engine::new(DEFAULT);
    let id = engine.enqueue(Descriptor::error("Sync failed", "Timeout")).unwrap();

    assert!(engine.dismiss(id));
    let after_first: Vec<_> = engine.list().iter().map(|n| n.id()).collect();
    assert!(!engine.dismiss(id));
    let after_second: Vec<_> = engine.list().iter().map(|n| n.id()).collect();
    assert_eq!(after_first, after_second);
}

#[test]
fn invalid_descriptors_are_rejected_without_side_effects() {
    let mut engine: Engine<()> = Engine::new(DEFAULT);

    assert_eq!(
        engine.enqueue(Descriptor::info("", "message")),
        Err(ValidationError::EmptyTitle)
    );
    assert_eq!(
        engine.enqueue(Descriptor::info("Title", "   ")),
        Err(ValidationError::EmptyMessage)
    );
    assert_eq!(
        engine.enqueue(Descriptor::info("Title", "message").duration_ms(-5)),
        Err(ValidationError::NegativeDuration(-5))
    );
    assert!(engine.is_empty());
    assert_eq!(engine.revision(), 0);
}

#[test]
fn action_payload_is_returned_and_notification_stays() {
    let mut engine: Engine<&'static str> = Engine::new(DEFAULT);
    let id = engine
        .enqueue(Descriptor::info("Classified", "Staking reward").with_action("Undo", "undo-3"))
        .unwrap();

    assert_eq!(
        engine.handle_message(NotificationMessage::ActivateAction(id)),
        Some("undo-3")
    );
    assert_eq!(engine.len(), 1);
    assert_eq!(engine.handle_message(NotificationMessage::Dismiss(id)), None);
    assert!(engine.is_empty());
}

#[test]
fn settings_round_trip_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.theme_mode = ThemeMode::Light;
    settings.notifications.default_duration_ms = Some(2500);
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, settings);

    let engine: Engine<()> = Engine::new(loaded.notifications.default_duration());
    assert_eq!(engine.default_duration(), ms(2500));
}

#[test]
fn unreadable_settings_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[notifications\n").unwrap();

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}
