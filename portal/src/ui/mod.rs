pub mod mappers;
pub mod state;

pub use state::*;
