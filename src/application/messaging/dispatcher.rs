//! Command dispatcher - Routes parsed commands to the registry

use crate::application::errors::RegistryError;
use crate::application::services::{ClassroomRegistry, Listing};
use crate::domain::entities::{Command, CommandKind};
use super::parser::CommandParser;

pub const DEFAULT_NAME: &str = "Virtual Classroom Manager";

/// Rendered outcome of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A single line of output
    Text(String),
    /// A heading followed by one line per item
    List { heading: String, items: Vec<String> },
    /// A failed command, shown as one warning line
    Warning(String),
    /// The session should end after showing this line
    Exit(String),
}

impl Reply {
    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

/// Command dispatcher - owns the registry and answers each command with a `Reply`
pub struct CommandDispatcher {
    parser: CommandParser,
    registry: ClassroomRegistry,
    name: String,
}

impl CommandDispatcher {
    pub fn new(registry: ClassroomRegistry) -> Self {
        Self {
            parser: CommandParser::new(),
            registry,
            name: DEFAULT_NAME.to_string(),
        }
    }

    /// Name used in the farewell line
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &ClassroomRegistry {
        &self.registry
    }

    /// Parse and run a raw line. Blank lines produce no reply.
    pub fn dispatch_line(&mut self, line: &str) -> Option<Reply> {
        match self.parser.parse(line) {
            Ok(Some(command)) => Some(self.dispatch(command)),
            Ok(None) => None,
            Err(e) => {
                tracing::debug!("Rejected input {:?}: {}", line, e);
                Some(Reply::Warning(e.to_string()))
            }
        }
    }

    /// Run a parsed command against the registry
    pub fn dispatch(&mut self, command: Command) -> Reply {
        let kind = command.kind();
        let result = self.run(command);

        match result {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("{} failed: {}", kind, e);
                Reply::Warning(e.to_string())
            }
        }
    }

    fn run(&mut self, command: Command) -> Result<Reply, RegistryError> {
        let reply = match command {
            Command::AddClassroom { name } => {
                self.registry.add_classroom(&name)?;
                Reply::Text(format!("Classroom {} has been created.", name))
            }
            Command::ListClassrooms => match self.registry.list_classrooms() {
                Listing::Empty => Reply::Text("No classrooms available.".to_string()),
                Listing::Items(names) => Reply::List {
                    heading: "Available Classrooms:".to_string(),
                    items: names,
                },
            },
            Command::RemoveClassroom { name } => {
                self.registry.remove_classroom(&name)?;
                Reply::Text(format!("Classroom {} removed.", name))
            }
            Command::AddStudent { student_id, class_name } => {
                self.registry.add_student(&student_id, &class_name)?;
                Reply::Text(format!("Student {} has been enrolled in {}.", student_id, class_name))
            }
            Command::ListStudents { class_name } => match self.registry.list_students(&class_name)? {
                Listing::Empty => Reply::Text(format!("No students enrolled in {}", class_name)),
                Listing::Items(ids) => Reply::List {
                    heading: format!("Students in {}:", class_name),
                    items: ids,
                },
            },
            Command::ScheduleAssignment { class_name, details } => {
                self.registry.schedule_assignment(&class_name, &details)?;
                Reply::Text(format!("Assignment for {} has been scheduled.", class_name))
            }
            Command::SubmitAssignment { student_id, class_name, details } => {
                self.registry.submit_assignment(&student_id, &class_name, &details)?;
                Reply::Text(format!("Assignment submitted by Student {} in {}.", student_id, class_name))
            }
            Command::ListAssignments { class_name } => match self.registry.list_assignments(&class_name)? {
                Listing::Empty => Reply::Text(format!("No assignments scheduled for {}", class_name)),
                Listing::Items(assignments) => Reply::List {
                    heading: format!("Assignments in {}:", class_name),
                    items: assignments
                        .iter()
                        .map(|a| format!(
                            "{} (scheduled {}, {} submitted)",
                            a.details,
                            a.scheduled_at.format("%Y-%m-%d %H:%M UTC"),
                            a.submissions
                        ))
                        .collect(),
                },
            },
            Command::SubmissionStatus { student_id, class_name, details } => {
                let submitted = self.registry.submission_status(&student_id, &class_name, &details)?;
                let verb = if submitted { "has submitted" } else { "has not submitted" };
                Reply::Text(format!("Student {} {} \"{}\" in {}.", student_id, verb, details, class_name))
            }
            Command::Help => Reply::List {
                heading: "Available commands:".to_string(),
                items: CommandKind::ALL
                    .iter()
                    .map(|kind| format!("  {} - {}", kind.usage(), kind.description()))
                    .collect(),
            },
            Command::Exit => Reply::Exit(format!("Exiting {}. Goodbye!", self.name)),
        };
        Ok(reply)
    }
}
