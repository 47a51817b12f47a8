//! Symptom tracker entry domain logic.
//!
//! An enrollee logs at most one entry per calendar date. The entry carries
//! the recent-activity selections and the GPP answer; the service enforces
//! the date rules (no future dates, no duplicates) before anything reaches
//! the store.

use crate::backend::domain::models::symptom::{EntryValidationError, SymptomEntry};
use crate::backend::storage::traits::{StoreError, SymptomStore};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use log::info;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Service managing symptom tracker entries.
#[derive(Clone)]
pub struct SymptomEntryService {
    store: Arc<dyn SymptomStore>,
}

impl SymptomEntryService {
    pub fn new(store: Arc<dyn SymptomStore>) -> Self {
        Self { store }
    }

    /// Create a new entry for the given date.
    ///
    /// Rejects future dates and dates the enrollee already logged; both
    /// surface as [`EntryValidationError`] so the form can flag the field
    /// instead of treating them as infrastructure failures.
    pub fn create_entry(&self, enrollee_id: &str, date: NaiveDate) -> Result<SymptomEntry> {
        self.create_entry_as_of(enrollee_id, date, Local::now().date_naive())
    }

    /// `create_entry` with an explicit "today", for deterministic tests.
    pub fn create_entry_as_of(
        &self,
        enrollee_id: &str,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<SymptomEntry> {
        if date > today {
            return Err(EntryValidationError::FutureDate.into());
        }
        if self.store.has_entry_on(enrollee_id, date)? {
            return Err(EntryValidationError::DuplicateDate.into());
        }

        let entry = SymptomEntry::new(enrollee_id, date);
        self.store.store_entry(&entry)?;
        info!("created symptom entry {} for {} on {}", entry.id, enrollee_id, date);
        Ok(entry)
    }

    /// Whether the date picker may accept this date.
    pub fn is_date_available(&self, enrollee_id: &str, date: NaiveDate) -> Result<bool, StoreError> {
        Ok(!self.store.has_entry_on(enrollee_id, date)?)
    }

    /// Replace the recent-activity selections on an existing entry.
    pub fn update_recent_activity(
        &self,
        entry_id: &str,
        selections: BTreeSet<String>,
    ) -> Result<SymptomEntry> {
        let mut entry = self.require_entry(entry_id)?;
        entry.recent_activity = selections;
        self.store.update_entry(&entry)?;
        info!(
            "updated recent activity on entry {} ({} selections)",
            entry_id,
            entry.recent_activity.len()
        );
        Ok(entry)
    }

    /// Record the "currently experiencing GPP" answer.
    pub fn set_gpp_flag(&self, entry_id: &str, flag: bool) -> Result<SymptomEntry> {
        let mut entry = self.require_entry(entry_id)?;
        entry.gpp_flag = Some(flag);
        self.store.update_entry(&entry)?;
        Ok(entry)
    }

    /// The enrollee's most recent entry by date, `None` when nothing is logged.
    pub fn last_entry(&self, enrollee_id: &str) -> Result<Option<SymptomEntry>, StoreError> {
        let entries = self.store.list_entries(enrollee_id)?;
        Ok(entries.into_iter().max_by_key(|e| e.entry_date))
    }

    fn require_entry(&self, entry_id: &str) -> Result<SymptomEntry> {
        self.store
            .get_entry(entry_id)?
            .ok_or_else(|| StoreError::NotFound(entry_id.to_string()).into())
    }
}
