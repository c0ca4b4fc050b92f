//! Domain entities - Core objects with small local invariants

pub mod student;
pub mod assignment;
pub mod classroom;
pub mod command;

pub use student::Student;
pub use assignment::Assignment;
pub use classroom::Classroom;
pub use command::{Command, CommandKind};
