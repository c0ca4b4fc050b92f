//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Operator frontends (console)

pub mod config;
pub mod adapters;
