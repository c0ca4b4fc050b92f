//! Application layer errors

use thiserror::Error;

/// Top-level errors surfaced by the binary
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Registry operation failures. None of these are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Classroom already exists: {0}")]
    AlreadyExists(String),

    #[error("Classroom not found: {0}")]
    NotFound(String),

    #[error("Assignment not found for {class_name}: {details}")]
    AssignmentNotFound { class_name: String, details: String },

    #[error("Student {student_id} not enrolled in {class_name}")]
    NotEnrolled { student_id: String, class_name: String },
}

/// Command line parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command: {0}")]
    UnknownCommand(String),

    #[error("Invalid arguments for {command}. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to render config: {0}")]
    Serialize(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
