pub mod models;
pub mod notification_service;
pub mod symptom_entry_service;
pub mod symptom_graph_service;

pub use notification_service::{CategorySaveOutcome, NotificationService};
pub use symptom_entry_service::SymptomEntryService;
pub use symptom_graph_service::SymptomGraphService;
