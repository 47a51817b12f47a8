//! # Storage Traits
//!
//! Collaborator interfaces the domain layer depends on. The real portal
//! satisfies these with remote procedure calls against managed backend
//! objects; tests and local wiring use the in-memory implementation.
//!
//! Expected-empty states are not errors here: a patient with no symptom
//! records gets an empty list, not `NotFound`. `NotFound` is reserved for
//! identities that should exist but do not (unknown enrollee, missing
//! per-category settings record).

use crate::backend::domain::models::symptom::SymptomEntry;
use chrono::NaiveDate;
use shared::{CategoryType, ChannelRecord, ChannelUpdateRequest, DatedRecord};

/// Failure signalled by a collaborator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The remote object that should exist for this identity is missing
    #[error("no record found for {0}")]
    NotFound(String),
    /// The remote call itself was rejected
    #[error("persistence failure: {0}")]
    Persistence(String),
}

/// Per-category notification settings, fetched and saved independently.
pub trait NotificationSettingsStore: Send + Sync {
    /// Fetch the settings record for one category.
    ///
    /// An enrollee is expected to have a record per category; absence is a
    /// `NotFound`, never a silently defaulted record.
    fn fetch_category_settings(
        &self,
        enrollee_id: &str,
        category: CategoryType,
    ) -> Result<ChannelRecord, StoreError>;

    /// Overwrite one category's settings. No transactional grouping exists
    /// across categories; each save stands alone.
    fn save_category_settings(
        &self,
        enrollee_id: &str,
        request: &ChannelUpdateRequest,
    ) -> Result<(), StoreError>;
}

/// Symptom log records and entries.
pub trait SymptomStore: Send + Sync {
    /// All dated symptom records for an enrollee, in remote feed order.
    /// An enrollee with no records yields an empty list.
    fn fetch_dated_records(&self, enrollee_id: &str) -> Result<Vec<DatedRecord>, StoreError>;

    /// Store a newly created symptom entry.
    fn store_entry(&self, entry: &SymptomEntry) -> Result<(), StoreError>;

    /// Look up an entry by id.
    fn get_entry(&self, entry_id: &str) -> Result<Option<SymptomEntry>, StoreError>;

    /// Replace an existing entry (recent-activity or GPP updates).
    fn update_entry(&self, entry: &SymptomEntry) -> Result<(), StoreError>;

    /// All entries for an enrollee, ordered ascending by entry date.
    fn list_entries(&self, enrollee_id: &str) -> Result<Vec<SymptomEntry>, StoreError>;

    /// Whether the enrollee already logged an entry on the given date.
    fn has_entry_on(&self, enrollee_id: &str, date: NaiveDate) -> Result<bool, StoreError>;
}
