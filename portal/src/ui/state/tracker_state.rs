//! # Symptom Tracker Form State
//!
//! View state for the symptom tracker entry form: which accordion section
//! is open, the entry-date field, the GPP answer, and the recent-activity
//! selection. Selection is a plain set of option identifiers; the render
//! layer derives highlighting from membership instead of tracking colours
//! itself.

use crate::backend::Backend;
use crate::ui::state::session::SessionContext;
use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;

/// Accordion sections of the tracker form. At most one is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerSection {
    /// Entry date and intro
    EntryDate,
    /// "Are you currently experiencing GPP?"
    Gpp,
    /// Per-symptom detail sections
    Symptoms,
    /// Recent activity picker
    RecentActivity,
}

/// State behind the tracker entry form.
#[derive(Debug)]
pub struct TrackerState {
    /// Currently open accordion section
    pub open_section: Option<TrackerSection>,
    /// Date the patient picked for this entry
    pub entry_date: Option<NaiveDate>,
    /// Picked date lies in the future; blocks submission
    pub future_date: bool,
    /// Picked date has no existing entry yet
    pub date_available: bool,
    /// GPP answer, `None` until the patient picks yes/no
    pub gpp_answer: Option<bool>,
    /// Recent-activity option identifiers currently selected
    pub recent_selection: BTreeSet<String>,
    /// Id of the entry being edited, once one exists
    pub entry_id: Option<String>,
}

impl TrackerState {
    pub fn new() -> Self {
        Self {
            open_section: None,
            entry_date: None,
            future_date: false,
            date_available: true,
            gpp_answer: None,
            recent_selection: BTreeSet::new(),
            entry_id: None,
        }
    }

    /// Open a section, closing whichever was open; clicking the open
    /// section's header closes it.
    pub fn toggle_section(&mut self, section: TrackerSection) {
        self.open_section = if self.open_section == Some(section) {
            None
        } else {
            Some(section)
        };
    }

    /// Date field changed. Flags future dates and probes the store for
    /// date uniqueness; a probe failure goes to the session error sink.
    pub fn handle_date_change(
        &mut self,
        backend: &Backend,
        session: &mut SessionContext,
        enrollee_id: &str,
        date: NaiveDate,
    ) {
        self.apply_date_change(backend, session, enrollee_id, date, Local::now().date_naive());
    }

    /// `handle_date_change` with an explicit "today", for deterministic tests.
    pub fn apply_date_change(
        &mut self,
        backend: &Backend,
        session: &mut SessionContext,
        enrollee_id: &str,
        date: NaiveDate,
        today: NaiveDate,
    ) {
        self.entry_date = Some(date);
        self.future_date = date > today;
        if self.future_date {
            self.date_available = false;
            return;
        }
        match backend.symptom_entry_service.is_date_available(enrollee_id, date) {
            Ok(available) => self.date_available = available,
            Err(err) => {
                session.report_error(err.to_string());
                self.date_available = false;
            }
        }
    }

    /// Whether the form may be submitted with the current date field.
    pub fn can_submit(&self) -> bool {
        self.entry_date.is_some() && !self.future_date && self.date_available
    }

    /// GPP radio changed.
    pub fn handle_gpp_change(&mut self, answer: bool) {
        self.gpp_answer = Some(answer);
    }

    /// Toggle one recent-activity option. Toggling twice restores the
    /// previous selection state.
    pub fn toggle_recent_activity(&mut self, option: &str) {
        if !self.recent_selection.remove(option) {
            self.recent_selection.insert(option.to_string());
        }
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.recent_selection.contains(option)
    }

    /// Submit the entry: create it, then persist the GPP answer and the
    /// recent-activity selection against it. Validation and store failures
    /// land in the session error sink.
    pub fn handle_submit(
        &mut self,
        backend: &Backend,
        session: &mut SessionContext,
        enrollee_id: &str,
    ) -> bool {
        let Some(date) = self.entry_date else {
            session.report_error("Pick a date before submitting");
            return false;
        };

        let service = &backend.symptom_entry_service;
        let entry = match service.create_entry(enrollee_id, date) {
            Ok(entry) => entry,
            Err(err) => {
                session.report_error(err.to_string());
                return false;
            }
        };
        self.entry_id = Some(entry.id.clone());

        if let Some(answer) = self.gpp_answer {
            if let Err(err) = service.set_gpp_flag(&entry.id, answer) {
                session.report_error(err.to_string());
                return false;
            }
        }
        if !self.recent_selection.is_empty() {
            if let Err(err) =
                service.update_recent_activity(&entry.id, self.recent_selection.clone())
            {
                session.report_error(err.to_string());
                return false;
            }
        }
        true
    }
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new()
    }
}
