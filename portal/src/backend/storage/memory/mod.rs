//! In-memory implementation of the collaborator traits.
//!
//! The production portal talks to managed remote objects; this store stands
//! in for them during local wiring and tests. Data lives for the process
//! lifetime only.

use crate::backend::domain::models::symptom::SymptomEntry;
use crate::backend::storage::traits::{
    NotificationSettingsStore, StoreError, SymptomStore,
};
use chrono::NaiveDate;
use shared::{CategoryType, Channel, ChannelRecord, ChannelUpdateRequest, DatedRecord};
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local store backing both collaborator traits.
#[derive(Default)]
pub struct MemoryStore {
    settings: Mutex<HashMap<(String, CategoryType), ChannelRecord>>,
    dated_records: Mutex<HashMap<String, Vec<DatedRecord>>>,
    entries: Mutex<Vec<SymptomEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a category settings record, as the remote enrolment flow would.
    pub fn seed_settings(&self, enrollee_id: &str, category: CategoryType, record: ChannelRecord) {
        self.settings
            .lock()
            .unwrap()
            .insert((enrollee_id.to_string(), category), record);
    }

    /// Seed the dated symptom record feed for an enrollee.
    pub fn seed_dated_records(&self, enrollee_id: &str, records: Vec<DatedRecord>) {
        self.dated_records
            .lock()
            .unwrap()
            .insert(enrollee_id.to_string(), records);
    }
}

impl NotificationSettingsStore for MemoryStore {
    fn fetch_category_settings(
        &self,
        enrollee_id: &str,
        category: CategoryType,
    ) -> Result<ChannelRecord, StoreError> {
        self.settings
            .lock()
            .unwrap()
            .get(&(enrollee_id.to_string(), category))
            .copied()
            .ok_or_else(|| {
                StoreError::NotFound(format!("{} settings for {}", category, enrollee_id))
            })
    }

    fn save_category_settings(
        &self,
        enrollee_id: &str,
        request: &ChannelUpdateRequest,
    ) -> Result<(), StoreError> {
        let get = |channel: Channel| request.channels.get(&channel).copied().unwrap_or(false);
        let record = ChannelRecord {
            email: get(Channel::Email),
            sms: get(Channel::Sms),
            insite: get(Channel::Insite),
            phone: get(Channel::Phone),
        };
        self.settings
            .lock()
            .unwrap()
            .insert((enrollee_id.to_string(), request.category), record);
        Ok(())
    }
}

impl SymptomStore for MemoryStore {
    fn fetch_dated_records(&self, enrollee_id: &str) -> Result<Vec<DatedRecord>, StoreError> {
        Ok(self
            .dated_records
            .lock()
            .unwrap()
            .get(enrollee_id)
            .cloned()
            .unwrap_or_default())
    }

    fn store_entry(&self, entry: &SymptomEntry) -> Result<(), StoreError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }

    fn get_entry(&self, entry_id: &str) -> Result<Option<SymptomEntry>, StoreError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == entry_id)
            .cloned())
    }

    fn update_entry(&self, entry: &SymptomEntry) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap();
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => {
                *existing = entry.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(entry.id.clone())),
        }
    }

    fn list_entries(&self, enrollee_id: &str) -> Result<Vec<SymptomEntry>, StoreError> {
        let mut entries: Vec<SymptomEntry> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.enrollee_id == enrollee_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.entry_date);
        Ok(entries)
    }

    fn has_entry_on(&self, enrollee_id: &str, date: NaiveDate) -> Result<bool, StoreError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .any(|e| e.enrollee_id == enrollee_id && e.entry_date == date))
    }
}
