//! Domain model for a symptom tracker entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One day's symptom tracker entry for an enrollee.
///
/// Individual symptom details (sliders, photos) are captured by the remote
/// care-plan objects; this model owns the per-day facts the portal widgets
/// need: which recent-activity options were picked and the GPP answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub id: String,
    pub enrollee_id: String,
    pub entry_date: NaiveDate,
    /// Recent-activity option identifiers the patient toggled on
    pub recent_activity: BTreeSet<String>,
    /// "Are you currently experiencing GPP?" answer; `None` until answered
    pub gpp_flag: Option<bool>,
}

impl SymptomEntry {
    pub fn new(enrollee_id: &str, entry_date: NaiveDate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            enrollee_id: enrollee_id.to_string(),
            entry_date,
            recent_activity: BTreeSet::new(),
            gpp_flag: None,
        }
    }
}

/// Validation failures when creating a symptom entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryValidationError {
    #[error("Entry date cannot be in the future")]
    FutureDate,
    #[error("An entry already exists for this date")]
    DuplicateDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_has_unique_id_and_empty_selection() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let a = SymptomEntry::new("enrollee-1", date);
        let b = SymptomEntry::new("enrollee-1", date);

        assert_ne!(a.id, b.id);
        assert!(a.recent_activity.is_empty());
        assert_eq!(a.gpp_flag, None);
        assert_eq!(a.entry_date, date);
    }
}
