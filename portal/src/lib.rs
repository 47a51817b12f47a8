//! # Patient Portal Core
//!
//! State and domain logic for the patient-facing portal widgets: the
//! notification preference panel, the symptom tracker form, and the
//! month-by-month symptom report view.
//!
//! The crate is split the same way the application is:
//! - [`backend`] holds the domain services and the collaborator traits they
//!   talk to (remote settings object, symptom record feed). Remote call
//!   plumbing itself is out of scope; an in-memory store implements the
//!   traits for wiring and tests.
//! - [`ui`] holds presentation-free view state. Render layers read these
//!   structs; they never own business rules.

pub mod backend;
pub mod ui;
