pub mod notification;
pub mod symptom;
