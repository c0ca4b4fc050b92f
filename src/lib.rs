//! In-memory classroom manager: classrooms, enrollment and assignment
//! submissions, driven by a line-oriented command interpreter.

pub mod domain;
pub mod application;
pub mod infrastructure;
