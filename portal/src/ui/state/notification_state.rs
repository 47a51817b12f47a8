//! # Notification Panel State
//!
//! View state for the notification preference panel: the toggle-group model
//! plus loading/saving bookkeeping. Checkbox and switch events land here;
//! the render layer only reads.

use crate::backend::domain::models::notification::ToggleGroupModel;
use crate::backend::domain::notification_service::CategorySaveOutcome;
use crate::backend::Backend;
use crate::ui::state::session::SessionContext;
use shared::{CategoryType, Channel};

/// State behind the notification settings panel.
#[derive(Debug)]
pub struct NotificationPanelState {
    /// The six toggle groups, one per category
    pub model: ToggleGroupModel,
    /// Whether the initial per-category fetches are in flight
    pub loading: bool,
    /// Outcomes of the most recent bulk save, panel order
    pub save_outcomes: Vec<CategorySaveOutcome>,
    /// Enrollee the panel is bound to, set on load
    pub enrollee_id: Option<String>,
}

impl NotificationPanelState {
    pub fn new() -> Self {
        Self {
            model: ToggleGroupModel::new(),
            loading: false,
            save_outcomes: Vec::new(),
            enrollee_id: None,
        }
    }

    /// Fetch all category settings and populate the model.
    ///
    /// Categories that fail to load stay at policy defaults; their errors go
    /// to the session error sink so the page can surface the last one.
    pub fn load(&mut self, backend: &Backend, session: &mut SessionContext, enrollee_id: &str) {
        self.loading = true;
        let (model, failures) = backend.notification_service.load_all(enrollee_id);
        self.model = model;
        self.enrollee_id = Some(enrollee_id.to_string());
        for (category, err) in failures {
            session.report_error(format!("{}: {}", category, err));
        }
        self.loading = false;
    }

    /// One channel checkbox changed.
    pub fn handle_checkbox_change(&mut self, category: CategoryType, channel: Channel, checked: bool) {
        self.model.set_channel(category, channel, checked);
    }

    /// A category's "all" switch changed.
    pub fn handle_switch_change(&mut self, category: CategoryType, checked: bool) {
        self.model.set_all(category, checked);
    }

    /// Save every category. Partial failures do not block other categories;
    /// each failure is reported to the session error sink. Returns whether
    /// every category persisted.
    pub fn handle_save(&mut self, backend: &Backend, session: &mut SessionContext) -> bool {
        let Some(enrollee_id) = self.enrollee_id.clone() else {
            session.report_error("Notification settings saved before loading");
            return false;
        };

        self.save_outcomes = backend.notification_service.save_all(&enrollee_id, &self.model);
        for outcome in &self.save_outcomes {
            if let Err(err) = &outcome.result {
                session.report_error(format!("{}: {}", outcome.category, err));
            }
        }
        self.save_outcomes.iter().all(|o| o.succeeded())
    }
}

impl Default for NotificationPanelState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;
    use shared::ChannelRecord;
    use std::sync::Arc;

    fn backend_with_settings() -> (Backend, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        for category in CategoryType::ALL {
            store.seed_settings("enrollee-1", category, ChannelRecord::default());
        }
        (Backend::with_store(store.clone()), store)
    }

    #[test]
    fn test_load_binds_enrollee_and_populates_model() {
        let (backend, store) = backend_with_settings();
        store.seed_settings(
            "enrollee-1",
            CategoryType::Community,
            ChannelRecord {
                email: true,
                ..Default::default()
            },
        );
        let mut state = NotificationPanelState::new();
        let mut session = SessionContext::new();

        state.load(&backend, &mut session, "enrollee-1");

        assert_eq!(state.enrollee_id.as_deref(), Some("enrollee-1"));
        assert!(state.model.group(CategoryType::Community).all_flag());
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn test_load_reports_missing_category_to_session() {
        let store = Arc::new(MemoryStore::new());
        // Only one category seeded; the other five are missing
        store.seed_settings("enrollee-1", CategoryType::Symptom, ChannelRecord::default());
        let backend = Backend::with_store(store);
        let mut state = NotificationPanelState::new();
        let mut session = SessionContext::new();

        state.load(&backend, &mut session, "enrollee-1");

        assert!(session.last_error().is_some());
        assert!(!state.loading);
    }

    #[test]
    fn test_checkbox_and_switch_events_reach_model() {
        let mut state = NotificationPanelState::new();

        state.handle_checkbox_change(CategoryType::Symptom, Channel::Email, true);
        assert!(state.model.group(CategoryType::Symptom).all_flag());

        state.handle_switch_change(CategoryType::Symptom, false);
        assert!(!state.model.group(CategoryType::Symptom).all_flag());
    }

    #[test]
    fn test_save_round_trips_through_store() {
        let (backend, store) = backend_with_settings();
        let mut state = NotificationPanelState::new();
        let mut session = SessionContext::new();
        state.load(&backend, &mut session, "enrollee-1");

        state.handle_checkbox_change(CategoryType::Questionnaire, Channel::Sms, true);
        assert!(state.handle_save(&backend, &mut session));

        let fresh = Backend::with_store(store);
        let mut reloaded = NotificationPanelState::new();
        reloaded.load(&fresh, &mut session, "enrollee-1");
        assert_eq!(
            reloaded
                .model
                .group(CategoryType::Questionnaire)
                .channel(Channel::Sms),
            Some(true)
        );
    }

    #[test]
    fn test_save_before_load_reports_error() {
        let (backend, _) = backend_with_settings();
        let mut state = NotificationPanelState::new();
        let mut session = SessionContext::new();

        assert!(!state.handle_save(&backend, &mut session));
        assert!(session.last_error().is_some());
    }
}
