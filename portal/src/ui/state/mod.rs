pub mod graph_state;
pub mod notification_state;
pub mod session;
pub mod tracker_state;

pub use graph_state::SymptomGraphState;
pub use notification_state::NotificationPanelState;
pub use session::SessionContext;
pub use tracker_state::{TrackerSection, TrackerState};
