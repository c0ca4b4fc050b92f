//! Domain layer - Core classroom model, free of I/O
//! 
//! This layer contains:
//! - Entities: Core objects (Student, Assignment, Classroom, Command)
//! - Traits: Abstractions for infrastructure (Frontend)

pub mod entities;
pub mod traits;
