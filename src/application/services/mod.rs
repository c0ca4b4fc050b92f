//! Application services - Business logic orchestration

pub mod registry;

pub use registry::{AssignmentSummary, ClassroomRegistry, Listing, RemovalPolicy};
