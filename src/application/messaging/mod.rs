//! Command handling - Line parsing, dispatching and the session loop

pub mod dispatcher;
pub mod parser;
pub mod session;

pub use dispatcher::{CommandDispatcher, Reply};
pub use parser::CommandParser;
pub use session::Session;
