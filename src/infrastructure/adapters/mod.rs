//! Operator frontends

pub mod console;

pub use console::ConsoleAdapter;
