//! # Backend Module
//!
//! Wires the domain services over a shared store connection and exposes
//! them to the UI state layer. Everything here is synchronous: the portal
//! is single-threaded and event-driven, and each remote interaction is an
//! independent request with no ordering guarantees between categories.

use anyhow::Result;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::MemoryStore;

/// Main backend struct orchestrating all services.
pub struct Backend {
    pub notification_service: domain::NotificationService,
    pub symptom_graph_service: domain::SymptomGraphService,
    pub symptom_entry_service: domain::SymptomEntryService,
}

impl Backend {
    /// Backend over a fresh in-memory store.
    pub fn new() -> Result<Self> {
        Ok(Self::with_store(Arc::new(MemoryStore::new())))
    }

    /// Backend over a caller-provided store, shared across services.
    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        Self {
            notification_service: domain::NotificationService::new(store.clone()),
            symptom_graph_service: domain::SymptomGraphService::new(store.clone()),
            symptom_entry_service: domain::SymptomEntryService::new(store),
        }
    }
}
