//! End-to-end flows through the backend services and UI state layer,
//! using the in-memory store as the remote collaborator.

use chrono::NaiveDate;
use patient_portal::backend::{Backend, MemoryStore};
use patient_portal::ui::state::{NotificationPanelState, SessionContext, SymptomGraphState, TrackerState};
use shared::{CategoryType, Channel, ChannelRecord, DatedRecord, Symptom};
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn record(date: &str, symptom: Symptom) -> DatedRecord {
    DatedRecord {
        date: date.to_string(),
        symptom,
    }
}

#[test]
fn notification_panel_load_edit_save_reload() {
    init_logging();
    let store = Arc::new(MemoryStore::new());
    for category in CategoryType::ALL {
        store.seed_settings("enrollee-1", category, ChannelRecord::default());
    }
    let backend = Backend::with_store(store.clone());
    let mut session = SessionContext::new();

    let mut panel = NotificationPanelState::new();
    panel.load(&backend, &mut session, "enrollee-1");
    assert_eq!(session.last_error(), None);

    // Treatment's in-app channel is pinned on even though the seed was all-false
    assert_eq!(
        panel.model.group(CategoryType::Treatment).channel(Channel::Insite),
        Some(true)
    );

    panel.handle_switch_change(CategoryType::Symptom, true);
    panel.handle_checkbox_change(CategoryType::Community, Channel::Email, true);
    assert!(panel.handle_save(&backend, &mut session));

    // A fresh panel over the same store sees the persisted state
    let mut reloaded = NotificationPanelState::new();
    reloaded.load(&Backend::with_store(store), &mut session, "enrollee-1");
    let symptom = reloaded.model.group(CategoryType::Symptom);
    for channel in Channel::ALL {
        assert_eq!(symptom.channel(channel), Some(true));
    }
    assert!(reloaded.model.group(CategoryType::Community).all_flag());
}

#[test]
fn report_view_over_mixed_feed() {
    init_logging();
    let store = Arc::new(MemoryStore::new());
    store.seed_dated_records(
        "enrollee-1",
        vec![
            record("2024-02-27", Symptom::Fatigue),
            record("2024-03-05", Symptom::Pain),
            record("2024-03-05", Symptom::Redness),
            record("not-a-date", Symptom::Mood),
            record("2024-03-12", Symptom::Itchiness),
            record("2024-04-01", Symptom::Temperature),
        ],
    );
    let backend = Backend::with_store(store);
    let mut session = SessionContext::new();

    let mut graph = SymptomGraphState::new();
    graph.load(&backend, &mut session, "enrollee-1");
    graph.select_month(&backend, 3, 2024);

    // The bad-date row vanished without an error
    assert_eq!(session.last_error(), None);
    assert!(graph.has_data);
    assert_eq!(graph.window.buckets.len(), 2);
    assert_eq!(graph.window.buckets[0].markers.len(), 2);
    assert_eq!(graph.bars[0].height, 40);
    assert_eq!(graph.bars[0].label, "05 Mar");

    let labels: Vec<_> = graph.month_options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["February 2024", "March 2024", "April 2024"]);
}

#[test]
fn empty_feed_shows_no_data_state() {
    init_logging();
    let backend = Backend::with_store(Arc::new(MemoryStore::new()));
    let mut session = SessionContext::new();

    let mut graph = SymptomGraphState::new();
    graph.load(&backend, &mut session, "enrollee-1");

    assert!(!graph.has_data);
    assert!(graph.bars.is_empty());
    assert_eq!(session.last_error(), None);
}

#[test]
fn tracker_entry_feeds_last_entry_lookup() {
    init_logging();
    let backend = Backend::with_store(Arc::new(MemoryStore::new()));
    let mut session = SessionContext::new();
    let today = chrono::Local::now().date_naive();

    let mut tracker = TrackerState::new();
    tracker.apply_date_change(&backend, &mut session, "enrollee-1", today, today);
    assert!(tracker.can_submit());

    tracker.handle_gpp_change(false);
    tracker.toggle_recent_activity("travel");
    tracker.toggle_recent_activity("stress");
    tracker.toggle_recent_activity("travel"); // changed their mind
    assert!(tracker.handle_submit(&backend, &mut session, "enrollee-1"));

    let entry = backend
        .symptom_entry_service
        .last_entry("enrollee-1")
        .unwrap()
        .unwrap();
    assert_eq!(entry.gpp_flag, Some(false));
    assert_eq!(
        entry.recent_activity.iter().cloned().collect::<Vec<_>>(),
        vec!["stress".to_string()]
    );

    // The same date is no longer available for a second entry
    let mut second = TrackerState::new();
    second.apply_date_change(&backend, &mut session, "enrollee-1", today, today);
    assert!(!second.can_submit());
}

#[test]
fn session_error_survives_across_widgets_until_taken() {
    init_logging();
    // No settings seeded at all: every category fetch fails
    let backend = Backend::with_store(Arc::new(MemoryStore::new()));
    let mut session = SessionContext::new();

    let mut panel = NotificationPanelState::new();
    panel.load(&backend, &mut session, "enrollee-1");
    assert!(session.last_error().is_some());

    // Another widget can read the sink, and taking it clears it
    let message = session.take_error().unwrap();
    assert!(message.contains("no record found"));
    assert_eq!(session.last_error(), None);
}

#[test]
fn far_future_month_has_no_data() {
    init_logging();
    let store = Arc::new(MemoryStore::new());
    store.seed_dated_records("enrollee-1", vec![record("2024-03-05", Symptom::Pain)]);
    let backend = Backend::with_store(store);
    let mut session = SessionContext::new();

    let mut graph = SymptomGraphState::new();
    graph.load(&backend, &mut session, "enrollee-1");
    graph.select_month(&backend, 3, 2031);

    assert!(!graph.has_data);

    // And back again
    graph.select_month(&backend, 3, 2024);
    assert!(graph.has_data);
    assert_eq!(
        graph.window.buckets[0].date,
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    );
}
