//! Notification settings domain logic.
//!
//! Orchestrates the per-category fetch/save flows around the
//! [`ToggleGroupModel`]. Every category is fetched and saved independently:
//! the remote settings object keeps one record per category, fetches may
//! complete in any order, and a failed save for one category never rolls
//! back or blocks the others.

use crate::backend::domain::models::notification::ToggleGroupModel;
use crate::backend::storage::traits::{NotificationSettingsStore, StoreError};
use log::{info, warn};
use shared::CategoryType;
use std::sync::Arc;

/// Result of one category's save attempt within a bulk save.
#[derive(Debug, Clone)]
pub struct CategorySaveOutcome {
    pub category: CategoryType,
    pub result: Result<(), StoreError>,
}

impl CategorySaveOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Service handling notification preference load and save.
#[derive(Clone)]
pub struct NotificationService {
    store: Arc<dyn NotificationSettingsStore>,
}

impl NotificationService {
    pub fn new(store: Arc<dyn NotificationSettingsStore>) -> Self {
        Self { store }
    }

    /// Fetch every category's settings and build the panel model.
    ///
    /// Categories whose fetch fails are left at policy defaults and reported
    /// in the returned failure list; the remaining categories still load.
    pub fn load_all(&self, enrollee_id: &str) -> (ToggleGroupModel, Vec<(CategoryType, StoreError)>) {
        let mut model = ToggleGroupModel::new();
        let mut failures = Vec::new();

        for category in CategoryType::ALL {
            match self.store.fetch_category_settings(enrollee_id, category) {
                Ok(record) => model.load(category, &record),
                Err(err) => {
                    warn!(
                        "settings fetch failed for {} / {}: {}",
                        enrollee_id, category, err
                    );
                    failures.push((category, err));
                }
            }
        }

        info!(
            "loaded notification settings for {} ({} of {} categories)",
            enrollee_id,
            CategoryType::ALL.len() - failures.len(),
            CategoryType::ALL.len()
        );
        (model, failures)
    }

    /// Save every category, one request each, continuing past failures.
    ///
    /// Callers must not assume all-or-nothing semantics; the outcomes list
    /// is the only record of which categories persisted.
    pub fn save_all(&self, enrollee_id: &str, model: &ToggleGroupModel) -> Vec<CategorySaveOutcome> {
        let outcomes: Vec<CategorySaveOutcome> = model
            .to_save_requests()
            .iter()
            .map(|request| {
                let result = self.store.save_category_settings(enrollee_id, request);
                if let Err(err) = &result {
                    warn!(
                        "settings save failed for {} / {}: {}",
                        enrollee_id, request.category, err
                    );
                }
                CategorySaveOutcome {
                    category: request.category,
                    result,
                }
            })
            .collect();

        let saved = outcomes.iter().filter(|o| o.succeeded()).count();
        info!(
            "saved notification settings for {} ({} of {} categories)",
            enrollee_id,
            saved,
            outcomes.len()
        );
        outcomes
    }
}
