//! Domain traits - Abstractions for infrastructure implementations

pub mod frontend;

pub use frontend::{Frontend, FrontendInfo};
