//! # Session Context
//!
//! Explicit in-memory replacement for the ad hoc browser-storage signaling
//! the portal pages used to pass transient state between steps of a flow.
//! Lifetime is tied to the page session: a reload starts a fresh context.

use shared::Symptom;
use std::collections::BTreeSet;

/// Transient per-session state shared between widgets.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Last domain error reported this session (the error sink)
    last_error: Option<String>,
    /// Symptom sections the patient completed during this tracker session
    completed_sections: BTreeSet<Symptom>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a domain error. Later reports overwrite earlier ones; the
    /// sink keeps only the most recent message.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Consume the pending error, e.g. when the error page has shown it.
    pub fn take_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    /// Mark a symptom section as filled in during this session.
    pub fn mark_section_complete(&mut self, symptom: Symptom) {
        self.completed_sections.insert(symptom);
    }

    pub fn is_section_complete(&self, symptom: Symptom) -> bool {
        self.completed_sections.contains(&symptom)
    }

    /// Whether any symptom section was completed this session. The submit
    /// flow warns before accepting an entry with no symptom data at all.
    pub fn has_completed_sections(&self) -> bool {
        !self.completed_sections.is_empty()
    }

    /// Reset everything, as a page reload would.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_sink_keeps_most_recent_message() {
        let mut session = SessionContext::new();
        assert_eq!(session.last_error(), None);

        session.report_error("first failure");
        session.report_error("second failure");
        assert_eq!(session.last_error(), Some("second failure"));

        assert_eq!(session.take_error().as_deref(), Some("second failure"));
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn test_section_completion_tracking() {
        let mut session = SessionContext::new();
        assert!(!session.has_completed_sections());

        session.mark_section_complete(Symptom::Pain);
        assert!(session.is_section_complete(Symptom::Pain));
        assert!(!session.is_section_complete(Symptom::Mood));
        assert!(session.has_completed_sections());

        session.clear();
        assert!(!session.has_completed_sections());
    }
}
