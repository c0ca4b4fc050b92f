//! Command parser - Splits raw input lines into typed commands

use crate::application::errors::ParseError;
use crate::domain::entities::{Command, CommandKind};

/// Parses operator input into `Command` values.
///
/// The first word names the command. Positional arguments are single
/// whitespace-separated words, so class names and student ids never contain
/// spaces. Assignment details are the exception: they take the remainder of
/// the line. Surplus words after a word argument are ignored.
#[derive(Debug, Default, Clone)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a line. Blank lines yield `Ok(None)`.
    pub fn parse(&self, line: &str) -> Result<Option<Command>, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let kind = CommandKind::from_name(name)
            .ok_or_else(|| ParseError::UnknownCommand(name.to_string()))?;

        let args = split_args(rest, kind.arity(), kind.has_free_text());
        Command::from_args(kind, args)
            .map(Some)
            .ok_or(ParseError::MissingArguments {
                command: kind.name(),
                usage: kind.usage(),
            })
    }
}

/// Split at most `arity` arguments. With `free_text` the final one keeps
/// inner whitespace.
fn split_args(mut rest: &str, arity: usize, free_text: bool) -> Vec<String> {
    let mut args = Vec::with_capacity(arity);
    while args.len() < arity {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        if free_text && args.len() + 1 == arity {
            args.push(rest.trim_end().to_string());
            break;
        }
        let (arg, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        args.push(arg.to_string());
        rest = tail;
    }
    args
}
