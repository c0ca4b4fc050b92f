use std::fmt;

/// Commands understood by the interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    AddClassroom,
    ListClassrooms,
    RemoveClassroom,
    AddStudent,
    ListStudents,
    ScheduleAssignment,
    SubmitAssignment,
    ListAssignments,
    SubmissionStatus,
    Help,
    Exit,
}

impl CommandKind {
    pub const ALL: [CommandKind; 11] = [
        CommandKind::AddClassroom,
        CommandKind::ListClassrooms,
        CommandKind::RemoveClassroom,
        CommandKind::AddStudent,
        CommandKind::ListStudents,
        CommandKind::ScheduleAssignment,
        CommandKind::SubmitAssignment,
        CommandKind::ListAssignments,
        CommandKind::SubmissionStatus,
        CommandKind::Help,
        CommandKind::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::AddClassroom => "add_classroom",
            CommandKind::ListClassrooms => "list_classrooms",
            CommandKind::RemoveClassroom => "remove_classroom",
            CommandKind::AddStudent => "add_student",
            CommandKind::ListStudents => "list_students",
            CommandKind::ScheduleAssignment => "schedule_assignment",
            CommandKind::SubmitAssignment => "submit_assignment",
            CommandKind::ListAssignments => "list_assignments",
            CommandKind::SubmissionStatus => "submission_status",
            CommandKind::Help => "help",
            CommandKind::Exit => "exit",
        }
    }

    /// Case-sensitive lookup by command name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Number of positional arguments
    pub fn arity(self) -> usize {
        match self {
            CommandKind::ListClassrooms | CommandKind::Help | CommandKind::Exit => 0,
            CommandKind::AddClassroom
            | CommandKind::RemoveClassroom
            | CommandKind::ListStudents
            | CommandKind::ListAssignments => 1,
            CommandKind::AddStudent | CommandKind::ScheduleAssignment => 2,
            CommandKind::SubmitAssignment | CommandKind::SubmissionStatus => 3,
        }
    }

    /// Whether the last argument is free text spanning the rest of the line
    pub fn has_free_text(self) -> bool {
        matches!(
            self,
            CommandKind::ScheduleAssignment | CommandKind::SubmitAssignment | CommandKind::SubmissionStatus
        )
    }

    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::AddClassroom => "add_classroom <class_name>",
            CommandKind::ListClassrooms => "list_classrooms",
            CommandKind::RemoveClassroom => "remove_classroom <class_name>",
            CommandKind::AddStudent => "add_student <student_id> <class_name>",
            CommandKind::ListStudents => "list_students <class_name>",
            CommandKind::ScheduleAssignment => "schedule_assignment <class_name> <details>",
            CommandKind::SubmitAssignment => "submit_assignment <student_id> <class_name> <details>",
            CommandKind::ListAssignments => "list_assignments <class_name>",
            CommandKind::SubmissionStatus => "submission_status <student_id> <class_name> <details>",
            CommandKind::Help => "help",
            CommandKind::Exit => "exit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CommandKind::AddClassroom => "Create a classroom",
            CommandKind::ListClassrooms => "List all classrooms",
            CommandKind::RemoveClassroom => "Remove a classroom and its assignments",
            CommandKind::AddStudent => "Enroll a student in a classroom",
            CommandKind::ListStudents => "List students enrolled in a classroom",
            CommandKind::ScheduleAssignment => "Schedule an assignment for a classroom",
            CommandKind::SubmitAssignment => "Mark an assignment as submitted by a student",
            CommandKind::ListAssignments => "List assignments scheduled for a classroom",
            CommandKind::SubmissionStatus => "Check whether a student has submitted an assignment",
            CommandKind::Help => "Show this message",
            CommandKind::Exit => "Leave the session",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed command with its arguments bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddClassroom { name: String },
    ListClassrooms,
    RemoveClassroom { name: String },
    AddStudent { student_id: String, class_name: String },
    ListStudents { class_name: String },
    ScheduleAssignment { class_name: String, details: String },
    SubmitAssignment { student_id: String, class_name: String, details: String },
    ListAssignments { class_name: String },
    SubmissionStatus { student_id: String, class_name: String, details: String },
    Help,
    Exit,
}

impl Command {
    /// Bind arguments to a command kind.
    ///
    /// Returns `None` unless exactly `kind.arity()` arguments are given.
    pub fn from_args(kind: CommandKind, args: Vec<String>) -> Option<Self> {
        if args.len() != kind.arity() {
            return None;
        }
        let mut args = args.into_iter();
        let mut next = move || args.next().unwrap_or_default();

        let command = match kind {
            CommandKind::AddClassroom => Command::AddClassroom { name: next() },
            CommandKind::ListClassrooms => Command::ListClassrooms,
            CommandKind::RemoveClassroom => Command::RemoveClassroom { name: next() },
            CommandKind::AddStudent => Command::AddStudent {
                student_id: next(),
                class_name: next(),
            },
            CommandKind::ListStudents => Command::ListStudents { class_name: next() },
            CommandKind::ScheduleAssignment => Command::ScheduleAssignment {
                class_name: next(),
                details: next(),
            },
            CommandKind::SubmitAssignment => Command::SubmitAssignment {
                student_id: next(),
                class_name: next(),
                details: next(),
            },
            CommandKind::ListAssignments => Command::ListAssignments { class_name: next() },
            CommandKind::SubmissionStatus => Command::SubmissionStatus {
                student_id: next(),
                class_name: next(),
                details: next(),
            },
            CommandKind::Help => Command::Help,
            CommandKind::Exit => Command::Exit,
        };
        Some(command)
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::AddClassroom { .. } => CommandKind::AddClassroom,
            Command::ListClassrooms => CommandKind::ListClassrooms,
            Command::RemoveClassroom { .. } => CommandKind::RemoveClassroom,
            Command::AddStudent { .. } => CommandKind::AddStudent,
            Command::ListStudents { .. } => CommandKind::ListStudents,
            Command::ScheduleAssignment { .. } => CommandKind::ScheduleAssignment,
            Command::SubmitAssignment { .. } => CommandKind::SubmitAssignment,
            Command::ListAssignments { .. } => CommandKind::ListAssignments,
            Command::SubmissionStatus { .. } => CommandKind::SubmissionStatus,
            Command::Help => CommandKind::Help,
            Command::Exit => CommandKind::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(CommandKind::from_name("Add_Classroom"), None);
        assert_eq!(CommandKind::from_name("quit"), None);
    }

    #[test]
    fn test_from_args_checks_arity() {
        assert_eq!(
            Command::from_args(CommandKind::AddStudent, vec!["S1".into(), "Math".into()]),
            Some(Command::AddStudent {
                student_id: "S1".into(),
                class_name: "Math".into()
            })
        );
        assert_eq!(Command::from_args(CommandKind::AddStudent, vec!["S1".into()]), None);
        assert_eq!(Command::from_args(CommandKind::Exit, vec![]), Some(Command::Exit));
    }

    #[test]
    fn test_usage_starts_with_name() {
        for kind in CommandKind::ALL {
            assert!(kind.usage().starts_with(kind.name()));
        }
    }
}
