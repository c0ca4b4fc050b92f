//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: The classroom registry
//! - Errors: Typed failures
//! - Messaging: Command parsing, dispatching and the session loop

pub mod errors;
pub mod services;
pub mod messaging;
